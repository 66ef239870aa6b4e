pub mod complete;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::missions::entities::Mission;
use crate::storage::Storage;

/// 学习任务服务
pub struct MissionService {
    storage: Arc<dyn Storage>,
}

impl MissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 列出学生的学习任务
    pub async fn list_missions(&self, student_id: i64) -> Result<Vec<Mission>> {
        list::list_missions(self, student_id).await
    }

    /// 学生已完成的任务数
    pub async fn completed_count(&self, student_id: i64) -> Result<i64> {
        list::completed_count(self, student_id).await
    }

    /// 完成学习任务（幂等）
    pub async fn complete_mission(&self, mission_id: i64) -> Result<Mission> {
        complete::complete_mission(self, mission_id).await
    }
}
