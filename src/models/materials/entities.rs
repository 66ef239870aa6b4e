use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学习资料（只读目录，按年级组织）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct LearningMaterial {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub grade: i32,
    pub topic: String,
    pub order_index: i32, // 同年级内的展示顺序
}
