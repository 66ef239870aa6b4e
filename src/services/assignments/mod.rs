pub mod create;
pub mod detail;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest},
    responses::AssignmentListResponse,
};
use crate::storage::Storage;

/// 写作任务服务
pub struct AssignmentService {
    storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建写作任务
    pub async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, created_by, req).await
    }

    /// 获取任务
    pub async fn get_assignment(&self, assignment_id: i64) -> Result<Assignment> {
        detail::get_assignment(self, assignment_id).await
    }

    /// 列出任务
    pub async fn list_assignments(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        list::list_assignments(self, query).await
    }
}
