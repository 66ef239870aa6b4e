//! 改写草稿

use tracing::debug;

use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

/// 替换草稿正文
///
/// 仅草稿可改；交稿后正文锁定，继续编辑属于调用方状态跟踪失效，
/// 按硬错误返回。
pub(crate) async fn edit_draft(
    service: &SubmissionService,
    submission_id: i64,
    text: &str,
) -> Result<Submission> {
    let submission = service
        .storage()
        .update_draft_text(submission_id, text)
        .await?;

    debug!(
        "Draft {} text updated ({} chars)",
        submission.id,
        submission.summary_text.chars().count()
    );
    Ok(submission)
}
