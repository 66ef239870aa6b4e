pub mod class;
pub mod student;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::stats::responses::{ClassStatsResponse, StudentSummaryStats};
use crate::storage::Storage;

/// 统计服务
///
/// 只读派生：所有数字都从一致性快照现算，不落任何独立状态。
pub struct StatsService {
    storage: Arc<dyn Storage>,
}

impl StatsService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 学生维度统计
    pub async fn student_stats(&self, student_id: i64) -> Result<StudentSummaryStats> {
        student::get_student_stats(self, student_id).await
    }

    /// 班级维度统计
    pub async fn class_stats(&self, class_id: i64) -> Result<ClassStatsResponse> {
        class::get_class_stats(self, class_id).await
    }
}
