//! 用户存储操作

use chrono::Utc;

use super::{MemoryStorage, paginate};
use crate::errors::{Result, SumWriteError};
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UserListQuery},
    responses::UserListResponse,
};

impl MemoryStorage {
    /// 创建用户
    pub(crate) async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let mut state = self.state.write().await;

        // 归属班级必须已存在
        if let Some(class_id) = req.class_id
            && !state.classes.contains_key(&class_id)
        {
            return Err(SumWriteError::not_found(format!("班级不存在: {class_id}")));
        }

        let id = state.next_id();
        let user = User {
            id,
            email: req.email,
            name: req.name,
            role: req.role,
            grade: req.grade,
            class_id: req.class_id,
            profile_image_url: req.profile_image_url,
            created_at: Utc::now(),
        };
        state.users.insert(id, user.clone());

        Ok(user)
    }

    /// 通过 ID 获取用户
    pub(crate) async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    /// 列出用户（按 ID 升序）
    pub(crate) async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let state = self.state.read().await;

        let mut users: Vec<User> = state
            .users
            .values()
            .filter(|u| query.role.is_none_or(|role| u.role == role))
            .filter(|u| {
                query
                    .class_id
                    .is_none_or(|class_id| u.class_id == Some(class_id))
            })
            .filter(|u| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|needle| u.name.contains(needle))
            })
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id);

        let (items, pagination) = paginate(users, query.page, query.size);
        Ok(UserListResponse { items, pagination })
    }

    /// 统计用户总数
    pub(crate) async fn count_users_impl(&self) -> Result<i64> {
        let state = self.state.read().await;
        Ok(state.users.len() as i64)
    }
}
