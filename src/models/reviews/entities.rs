use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 教师批阅
///
/// 与提交一一对应；存在批阅当且仅当提交处于 evaluated 状态。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    pub id: i64,
    pub submission_id: i64,
    pub teacher_id: i64,
    pub teacher_name: String, // 冗余存展示名，避免评语脱离签名
    pub score: f64,
    pub comments: String,
    pub reviewed_at: DateTime<Utc>,
}
