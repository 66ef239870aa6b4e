use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

/// 待批阅队列项（按提交时间从早到晚排列）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewQueueItem {
    pub submission_id: i64,
    pub assignment_id: i64,
    pub assignment_title: String,
    pub student_id: i64,
    pub student_name: String,
    pub submitted_at: DateTime<Utc>,
}

/// 待批阅队列响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewQueueResponse {
    pub items: Vec<ReviewQueueItem>,
}
