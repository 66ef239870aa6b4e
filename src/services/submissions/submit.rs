//! 交稿

use tracing::{info, warn};

use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

/// 交稿：draft → submitted
///
/// 空稿与限制校验失败时状态不变，学生改稿后可重试；
/// 已交稿/已批阅的提交再次交稿按硬错误返回。
pub(crate) async fn submit(service: &SubmissionService, submission_id: i64) -> Result<Submission> {
    match service.storage().submit_submission(submission_id).await {
        Ok(submission) => {
            info!(
                "Submission {} submitted by student {} (assignment {})",
                submission.id, submission.student_id, submission.assignment_id
            );
            Ok(submission)
        }
        Err(err) if err.is_validation() => {
            warn!("Submission {} rejected: {}", submission_id, err.message());
            Err(err)
        }
        Err(err) => Err(err),
    }
}
