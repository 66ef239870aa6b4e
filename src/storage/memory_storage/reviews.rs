//! 批阅存储操作

use chrono::Utc;

use super::MemoryStorage;
use crate::errors::{Result, SumWriteError};
use crate::models::reviews::{entities::Review, requests::RecordReviewRequest};
use crate::models::submissions::entities::SubmissionStatus;

impl MemoryStorage {
    /// 记录批阅：submitted → evaluated
    ///
    /// 批阅记录的创建与状态转移在同一临界区内完成，保证
    /// “批阅存在 ⇔ 提交处于 evaluated” 这一不变量。
    pub(crate) async fn record_review_impl(
        &self,
        submission_id: i64,
        teacher_id: i64,
        teacher_name: &str,
        req: RecordReviewRequest,
    ) -> Result<Review> {
        let mut state = self.state.write().await;

        let submission = state
            .submissions
            .get(&submission_id)
            .ok_or_else(|| SumWriteError::not_found(format!("提交不存在: {submission_id}")))?;

        if !submission.status.can_review() {
            return Err(SumWriteError::invalid_state(format!(
                "提交 {submission_id} 处于 {} 状态，不可批阅",
                submission.status
            )));
        }

        let id = state.next_id();
        let review = Review {
            id,
            submission_id,
            teacher_id,
            teacher_name: teacher_name.to_string(),
            score: req.score,
            comments: req.comments,
            reviewed_at: Utc::now(),
        };
        state.reviews.insert(submission_id, review.clone());

        let submission = state
            .submissions
            .get_mut(&submission_id)
            .expect("submission disappeared inside write lock");
        submission.status = SubmissionStatus::Evaluated;

        Ok(review)
    }

    /// 获取提交的批阅记录
    pub(crate) async fn get_review_by_submission_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Review>> {
        let state = self.state.read().await;
        Ok(state.reviews.get(&submission_id).cloned())
    }
}
