use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建学习任务请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct CreateMissionRequest {
    pub student_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
}
