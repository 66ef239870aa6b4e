//! 记录批阅

use tracing::info;

use super::ReviewService;
use crate::config::AppConfig;
use crate::errors::{Result, SumWriteError};
use crate::models::reviews::{entities::Review, requests::RecordReviewRequest};
use crate::storage::Storage;

/// 记录批阅并把提交推进到 evaluated
///
/// 分数越界属于用户可修正错误，先于任何状态变更拦下；
/// 状态前置条件由存储命令在临界区内裁决。
pub(crate) async fn record_review(
    service: &ReviewService,
    submission_id: i64,
    teacher_id: i64,
    teacher_name: &str,
    req: RecordReviewRequest,
) -> Result<Review> {
    let config = AppConfig::get();
    if !config.score_range().contains(&req.score) {
        return Err(SumWriteError::score_out_of_range(format!(
            "分数 {} 超出范围 [{}, {}]",
            req.score, config.scoring.min_score, config.scoring.max_score
        )));
    }

    let review = service
        .storage()
        .record_review(submission_id, teacher_id, teacher_name, req)
        .await?;

    info!(
        "Submission {} evaluated by teacher {} with score {}",
        submission_id, teacher_id, review.score
    );
    Ok(review)
}
