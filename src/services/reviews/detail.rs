//! 批阅查询

use super::ReviewService;
use crate::errors::Result;
use crate::models::reviews::entities::Review;
use crate::storage::Storage;

/// 获取提交的批阅记录（未批阅返回空）
pub(crate) async fn get_review(
    service: &ReviewService,
    submission_id: i64,
) -> Result<Option<Review>> {
    service
        .storage()
        .get_review_by_submission_id(submission_id)
        .await
}
