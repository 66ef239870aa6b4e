pub mod create;
pub mod detail;
pub mod edit;
pub mod list;
pub mod submit;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::{
    entities::Submission, requests::SubmissionListQuery, responses::SubmissionDetailResponse,
    responses::SubmissionListResponse,
};
use crate::storage::Storage;

/// 提交工作流服务
///
/// 表现层只通过这里发出命令（建稿、改稿、交稿）与读取投影，
/// 不直接改动实体。
pub struct SubmissionService {
    storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建草稿
    pub async fn start_draft(&self, assignment_id: i64, student_id: i64) -> Result<Submission> {
        create::start_draft(self, assignment_id, student_id).await
    }

    /// 改写草稿正文
    pub async fn edit_draft(&self, submission_id: i64, text: &str) -> Result<Submission> {
        edit::edit_draft(self, submission_id, text).await
    }

    /// 交稿
    pub async fn submit(&self, submission_id: i64) -> Result<Submission> {
        submit::submit(self, submission_id).await
    }

    /// 获取提交详情（附批阅结果）
    pub async fn get_submission(&self, submission_id: i64) -> Result<SubmissionDetailResponse> {
        detail::get_submission(self, submission_id).await
    }

    /// 获取学生在某任务下的提交
    pub async fn get_submission_for_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        detail::get_submission_for_student(self, assignment_id, student_id).await
    }

    /// 列出提交
    pub async fn list_submissions(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        list::list_submissions(self, query).await
    }
}
