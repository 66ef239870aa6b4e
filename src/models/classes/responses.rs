use serde::Serialize;
use ts_rs::TS;

use super::entities::Class;
use crate::models::users::entities::User;

/// 班级名册响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassRosterResponse {
    pub class: Class,
    pub students: Vec<User>,
}
