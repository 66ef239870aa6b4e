//! 提交列表

use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::{
    requests::SubmissionListQuery, responses::SubmissionListResponse,
};
use crate::storage::Storage;

/// 按条件列出提交
pub(crate) async fn list_submissions(
    service: &SubmissionService,
    query: SubmissionListQuery,
) -> Result<SubmissionListResponse> {
    service.storage().list_submissions_with_pagination(query).await
}
