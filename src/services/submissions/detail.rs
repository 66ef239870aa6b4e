//! 提交详情

use super::SubmissionService;
use crate::errors::{Result, SumWriteError};
use crate::models::submissions::{
    entities::Submission, responses::SubmissionDetailResponse,
};
use crate::storage::Storage;

/// 获取提交详情，附带批阅结果（未批阅则为空）
pub(crate) async fn get_submission(
    service: &SubmissionService,
    submission_id: i64,
) -> Result<SubmissionDetailResponse> {
    let submission = service
        .storage()
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| SumWriteError::not_found(format!("提交不存在: {submission_id}")))?;

    let review = service
        .storage()
        .get_review_by_submission_id(submission_id)
        .await?;

    Ok(SubmissionDetailResponse { submission, review })
}

/// 获取学生在某任务下的提交（可能尚未建稿）
pub(crate) async fn get_submission_for_student(
    service: &SubmissionService,
    assignment_id: i64,
    student_id: i64,
) -> Result<Option<Submission>> {
    service
        .storage()
        .get_submission_by_assignment_and_student(assignment_id, student_id)
        .await
}
