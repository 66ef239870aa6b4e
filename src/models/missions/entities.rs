use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学习任务（学生侧打卡项）
///
/// 仅有 未完成 → 已完成 一个转移，重复完成视为幂等。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct Mission {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub due_date: Option<DateTime<Utc>>,
}
