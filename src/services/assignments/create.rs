//! 创建写作任务

use tracing::info;

use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::storage::Storage;

/// 创建写作任务（创建后不可变）
pub(crate) async fn create_assignment(
    service: &AssignmentService,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let assignment = service.storage().create_assignment(created_by, req).await?;

    info!(
        "Assignment {} \"{}\" created by teacher {}",
        assignment.id, assignment.title, created_by
    );
    Ok(assignment)
}
