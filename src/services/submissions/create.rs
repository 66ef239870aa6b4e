//! 创建草稿

use tracing::info;

use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

/// 为学生在某任务下创建一条空白草稿
///
/// 同一 (student, assignment) 组合重复创建时报冲突，由调用方改走
/// 读取已有提交的路径。
pub(crate) async fn start_draft(
    service: &SubmissionService,
    assignment_id: i64,
    student_id: i64,
) -> Result<Submission> {
    let submission = service
        .storage()
        .create_draft(assignment_id, student_id)
        .await?;

    info!(
        "Draft {} created for student {} on assignment {}",
        submission.id, student_id, assignment_id
    );
    Ok(submission)
}
