use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student, // 学生
    Teacher, // 教师
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Teacher, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, teacher, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 用户（身份由外部会话层提供，核心不做认证）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub grade: Option<i32>,
    pub class_id: Option<i64>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
