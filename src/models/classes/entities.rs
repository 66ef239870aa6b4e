use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 班级（学生归属通过 User::class_id 表达，人数为派生值）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub grade: i32,
    pub created_at: DateTime<Utc>,
}
