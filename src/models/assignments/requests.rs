use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建任务请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub source_text: String,
    pub instructions: String,
    pub grade: Option<i32>,
    pub char_limit: Option<i64>,
    pub sentence_limit: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
}

/// 任务列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub grade: Option<i32>,
    pub search: Option<String>, // 按标题模糊匹配
}
