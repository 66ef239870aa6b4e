pub mod detail;
pub mod queue;
pub mod record;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::reviews::{
    entities::Review, requests::RecordReviewRequest, responses::ReviewQueueResponse,
};
use crate::storage::Storage;

/// 批阅服务
pub struct ReviewService {
    storage: Arc<dyn Storage>,
}

impl ReviewService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 记录批阅（教师身份由外部会话层提供）
    pub async fn record_review(
        &self,
        submission_id: i64,
        teacher_id: i64,
        teacher_name: &str,
        req: RecordReviewRequest,
    ) -> Result<Review> {
        record::record_review(self, submission_id, teacher_id, teacher_name, req).await
    }

    /// 获取提交的批阅记录
    pub async fn get_review(&self, submission_id: i64) -> Result<Option<Review>> {
        detail::get_review(self, submission_id).await
    }

    /// 待批阅队列（最早提交的排在最前）
    pub async fn pending_queue(&self) -> Result<ReviewQueueResponse> {
        queue::pending_queue(self).await
    }
}
