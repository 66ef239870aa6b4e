//! 学习任务列表

use super::MissionService;
use crate::errors::Result;
use crate::models::missions::entities::Mission;
use crate::storage::Storage;

/// 列出学生的学习任务
pub(crate) async fn list_missions(
    service: &MissionService,
    student_id: i64,
) -> Result<Vec<Mission>> {
    service.storage().list_missions_by_student(student_id).await
}

/// 学生已完成的任务数（学生首页进度用）
pub(crate) async fn completed_count(service: &MissionService, student_id: i64) -> Result<i64> {
    let missions = service.storage().list_missions_by_student(student_id).await?;
    Ok(missions.iter().filter(|m| m.completed).count() as i64)
}
