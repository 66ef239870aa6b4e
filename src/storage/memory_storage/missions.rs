//! 学习任务存储操作

use super::MemoryStorage;
use crate::errors::{Result, SumWriteError};
use crate::models::missions::{entities::Mission, requests::CreateMissionRequest};

impl MemoryStorage {
    /// 创建学习任务
    pub(crate) async fn create_mission_impl(&self, req: CreateMissionRequest) -> Result<Mission> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&req.student_id) {
            return Err(SumWriteError::not_found(format!(
                "学生不存在: {}",
                req.student_id
            )));
        }

        let id = state.next_id();
        let mission = Mission {
            id,
            student_id: req.student_id,
            title: req.title,
            description: req.description,
            completed: false,
            due_date: req.due_date,
        };
        state.missions.insert(id, mission.clone());

        Ok(mission)
    }

    /// 列出学生的学习任务（按 ID 升序）
    pub(crate) async fn list_missions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Mission>> {
        let state = self.state.read().await;

        let mut missions: Vec<Mission> = state
            .missions
            .values()
            .filter(|m| m.student_id == student_id)
            .cloned()
            .collect();
        missions.sort_by_key(|m| m.id);

        Ok(missions)
    }

    /// 完成学习任务（重复完成为幂等）
    pub(crate) async fn complete_mission_impl(&self, mission_id: i64) -> Result<Mission> {
        let mut state = self.state.write().await;

        let mission = state
            .missions
            .get_mut(&mission_id)
            .ok_or_else(|| SumWriteError::not_found(format!("学习任务不存在: {mission_id}")))?;

        mission.completed = true;
        Ok(mission.clone())
    }
}
