use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 摘要写作任务
///
/// 创建后不可变。`due_date` 仅用于展示，核心不做截止校验。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub source_text: String,   // 供学生阅读的原文
    pub instructions: String,  // 写作要求
    pub grade: Option<i32>,    // 目标年级
    pub char_limit: Option<i64>,     // 摘要字数上限（含空白），未设置则不限制
    pub sentence_limit: Option<i64>, // 摘要句数上限，未设置则不限制
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
