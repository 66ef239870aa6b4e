use serde::Deserialize;
use ts_rs::TS;

/// 创建学习资料请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct CreateMaterialRequest {
    pub title: String,
    pub description: String,
    pub grade: i32,
    pub topic: String,
    pub order_index: i32,
}
