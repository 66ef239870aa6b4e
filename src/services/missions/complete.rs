//! 完成学习任务

use tracing::debug;

use super::MissionService;
use crate::errors::Result;
use crate::models::missions::entities::Mission;
use crate::storage::Storage;

/// 把学习任务标记为已完成，重复完成为幂等
pub(crate) async fn complete_mission(
    service: &MissionService,
    mission_id: i64,
) -> Result<Mission> {
    let mission = service.storage().complete_mission(mission_id).await?;

    debug!("Mission {} completed by student {}", mission.id, mission.student_id);
    Ok(mission)
}
