//! 学生维度统计

use std::collections::HashSet;

use super::StatsService;
use crate::errors::{Result, SumWriteError};
use crate::models::stats::{entities::CorpusSnapshot, responses::StudentSummaryStats};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 获取单个学生的统计
pub(crate) async fn get_student_stats(
    service: &StatsService,
    student_id: i64,
) -> Result<StudentSummaryStats> {
    let snapshot = service.storage().corpus_snapshot(None).await?;

    let student = snapshot
        .students
        .iter()
        .find(|u| u.id == student_id)
        .ok_or_else(|| SumWriteError::not_found(format!("学生不存在: {student_id}")))?;

    Ok(compute_student_stats(student, &snapshot))
}

/// 从快照纯函数推导学生统计
///
/// 均分 = 已批阅得分的四舍五入均值，无批阅时为空；
/// 提交数不分状态；最近提交时刻只看非草稿。
pub(crate) fn compute_student_stats(
    student: &User,
    snapshot: &CorpusSnapshot,
) -> StudentSummaryStats {
    let submission_ids: HashSet<i64> = snapshot
        .submissions
        .iter()
        .filter(|s| s.student_id == student.id)
        .map(|s| s.id)
        .collect();

    let submission_count = submission_ids.len() as i64;

    let last_submission = snapshot
        .submissions
        .iter()
        .filter(|s| s.student_id == student.id && s.status != SubmissionStatus::Draft)
        .filter_map(|s| s.submitted_at)
        .max();

    let mut reviews: Vec<_> = snapshot
        .reviews
        .iter()
        .filter(|r| submission_ids.contains(&r.submission_id))
        .collect();
    reviews.sort_by_key(|r| (r.reviewed_at, r.id));
    let score_trend: Vec<f64> = reviews.iter().map(|r| r.score).collect();

    let average_score = if score_trend.is_empty() {
        None
    } else {
        let mean = score_trend.iter().sum::<f64>() / score_trend.len() as f64;
        Some(mean.round() as i64)
    };

    StudentSummaryStats {
        student_id: student.id,
        name: student.name.clone(),
        average_score,
        submission_count,
        last_submission,
        score_trend,
    }
}
