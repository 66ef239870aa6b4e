use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

/// 创建用户请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub grade: Option<i32>,
    pub class_id: Option<i64>,
    pub profile_image_url: Option<String>,
}

/// 用户列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub class_id: Option<i64>,
    pub search: Option<String>, // 按姓名模糊匹配
}
