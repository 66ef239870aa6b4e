//! 任务详情

use super::AssignmentService;
use crate::errors::{Result, SumWriteError};
use crate::models::assignments::entities::Assignment;
use crate::storage::Storage;

/// 获取任务，不存在时报错
pub(crate) async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<Assignment> {
    service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| SumWriteError::not_found(format!("任务不存在: {assignment_id}")))
}
