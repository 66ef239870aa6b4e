use serde::Deserialize;
use ts_rs::TS;

/// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub grade: i32,
}
