//! 班级存储操作

use chrono::Utc;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::models::users::entities::{User, UserRole};

impl MemoryStorage {
    /// 创建班级
    pub(crate) async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let mut state = self.state.write().await;

        let id = state.next_id();
        let class = Class {
            id,
            name: req.name,
            grade: req.grade,
            created_at: Utc::now(),
        };
        state.classes.insert(id, class.clone());

        Ok(class)
    }

    /// 通过 ID 获取班级
    pub(crate) async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let state = self.state.read().await;
        Ok(state.classes.get(&class_id).cloned())
    }

    /// 班级学生名册（按 ID 升序）
    pub(crate) async fn list_class_students_impl(&self, class_id: i64) -> Result<Vec<User>> {
        let state = self.state.read().await;

        let mut students: Vec<User> = state
            .users
            .values()
            .filter(|u| u.role == UserRole::Student && u.class_id == Some(class_id))
            .cloned()
            .collect();
        students.sort_by_key(|u| u.id);

        Ok(students)
    }
}
