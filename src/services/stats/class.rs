//! 班级维度统计

use super::StatsService;
use super::student::compute_student_stats;
use crate::errors::{Result, SumWriteError};
use crate::models::classes::entities::Class;
use crate::models::stats::{
    entities::CorpusSnapshot,
    responses::{ClassStatsResponse, ScoreStats},
};
use crate::models::submissions::entities::SubmissionStatus;
use crate::storage::Storage;

/// 获取班级统计
pub(crate) async fn get_class_stats(
    service: &StatsService,
    class_id: i64,
) -> Result<ClassStatsResponse> {
    let class = service
        .storage()
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| SumWriteError::not_found(format!("班级不存在: {class_id}")))?;

    let snapshot = service.storage().corpus_snapshot(Some(class_id)).await?;
    Ok(compute_class_stats(&class, &snapshot))
}

/// 从快照纯函数推导班级统计
///
/// 班级均分取各学生均分的无权平均（与仪表盘展示口径一致），
/// 没有任何批阅的学生不参与；全班无批阅时均分为空而不是 0。
pub(crate) fn compute_class_stats(class: &Class, snapshot: &CorpusSnapshot) -> ClassStatsResponse {
    let student_count = snapshot.students.len() as i64;
    let total_submissions = snapshot.submissions.len() as i64;
    let pending_reviews = snapshot
        .submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Submitted)
        .count() as i64;

    let student_averages: Vec<i64> = snapshot
        .students
        .iter()
        .filter_map(|student| compute_student_stats(student, snapshot).average_score)
        .collect();

    let average_score = if student_averages.is_empty() {
        None
    } else {
        let mean =
            student_averages.iter().sum::<i64>() as f64 / student_averages.len() as f64;
        Some(mean.round() as i64)
    };

    let scores: Vec<f64> = snapshot.reviews.iter().map(|r| r.score).collect();
    let score_stats = if scores.is_empty() {
        None
    } else {
        let average = scores.iter().sum::<f64>() / scores.len() as f64;
        let max = scores.iter().cloned().fold(f64::MIN, f64::max);
        let min = scores.iter().cloned().fold(f64::MAX, f64::min);
        Some(ScoreStats { average, max, min })
    };

    ClassStatsResponse {
        class_id: class.id,
        name: class.name.clone(),
        grade: class.grade,
        student_count,
        average_score,
        total_submissions,
        pending_reviews,
        score_stats,
    }
}

#[cfg(test)]
mod tests {
    use crate::models::reviews::requests::RecordReviewRequest;
    use crate::services::test_support::*;
    use crate::services::{ReviewService, StatsService, SubmissionService};

    #[tokio::test]
    async fn test_empty_class_yields_no_data_marker() {
        let storage = storage().await;
        let class = seed_class(&storage).await;

        let stats = StatsService::new(storage.clone());
        let result = stats.class_stats(class.id).await.unwrap();

        assert_eq!(result.student_count, 0);
        assert_eq!(result.total_submissions, 0);
        assert_eq!(result.pending_reviews, 0);
        assert_eq!(result.average_score, None);
        assert!(result.score_stats.is_none());
    }

    #[tokio::test]
    async fn test_class_average_is_mean_of_student_means() {
        let storage = storage().await;
        let class = seed_class(&storage).await;
        let teacher = seed_teacher(&storage).await;
        let a = seed_student(&storage, "王小明", class.id).await;
        let b = seed_student(&storage, "陈小红", class.id).await;
        let assignment = seed_assignment(&storage, teacher.id).await;

        let submissions = SubmissionService::new(storage.clone());
        let reviews = ReviewService::new(storage.clone());
        let stats = StatsService::new(storage.clone());

        for (student_id, score) in [(a.id, 80.0), (b.id, 90.0)] {
            let draft = submissions
                .start_draft(assignment.id, student_id)
                .await
                .unwrap();
            submissions.edit_draft(draft.id, "第一句. 第二句.").await.unwrap();
            submissions.submit(draft.id).await.unwrap();
            reviews
                .record_review(
                    draft.id,
                    teacher.id,
                    &teacher.name,
                    RecordReviewRequest {
                        score,
                        comments: String::new(),
                    },
                )
                .await
                .unwrap();
        }

        let result = stats.class_stats(class.id).await.unwrap();
        assert_eq!(result.student_count, 2);
        assert_eq!(result.average_score, Some(85));
        assert_eq!(result.total_submissions, 2);
        assert_eq!(result.pending_reviews, 0);

        let score_stats = result.score_stats.unwrap();
        assert_eq!(score_stats.max, 90.0);
        assert_eq!(score_stats.min, 80.0);
        assert_eq!(score_stats.average, 85.0);
    }

    #[tokio::test]
    async fn test_pending_reviews_counts_submitted_only() {
        let storage = storage().await;
        let class = seed_class(&storage).await;
        let teacher = seed_teacher(&storage).await;
        let a = seed_student(&storage, "王小明", class.id).await;
        let b = seed_student(&storage, "陈小红", class.id).await;
        let assignment = seed_assignment(&storage, teacher.id).await;

        let submissions = SubmissionService::new(storage.clone());
        let stats = StatsService::new(storage.clone());

        // A 交稿待批，B 停在草稿
        let draft_a = submissions.start_draft(assignment.id, a.id).await.unwrap();
        submissions.edit_draft(draft_a.id, "第一句.").await.unwrap();
        submissions.submit(draft_a.id).await.unwrap();
        submissions.start_draft(assignment.id, b.id).await.unwrap();

        let result = stats.class_stats(class.id).await.unwrap();
        assert_eq!(result.total_submissions, 2);
        assert_eq!(result.pending_reviews, 1);
        assert_eq!(result.average_score, None);
    }

    #[tokio::test]
    async fn test_students_without_reviews_do_not_drag_average() {
        let storage = storage().await;
        let class = seed_class(&storage).await;
        let teacher = seed_teacher(&storage).await;
        let a = seed_student(&storage, "王小明", class.id).await;
        let _b = seed_student(&storage, "陈小红", class.id).await;
        let assignment = seed_assignment(&storage, teacher.id).await;

        let submissions = SubmissionService::new(storage.clone());
        let reviews = ReviewService::new(storage.clone());
        let stats = StatsService::new(storage.clone());

        let draft = submissions.start_draft(assignment.id, a.id).await.unwrap();
        submissions.edit_draft(draft.id, "第一句.").await.unwrap();
        submissions.submit(draft.id).await.unwrap();
        reviews
            .record_review(
                draft.id,
                teacher.id,
                &teacher.name,
                RecordReviewRequest {
                    score: 88.0,
                    comments: String::new(),
                },
            )
            .await
            .unwrap();

        // 无批阅的学生不计入均分分母
        let result = stats.class_stats(class.id).await.unwrap();
        assert_eq!(result.average_score, Some(88));
    }
}
