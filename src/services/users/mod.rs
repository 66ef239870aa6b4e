pub mod create;
pub mod list;

use std::sync::Arc;

use crate::errors::{Result, SumWriteError};
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UserListQuery},
    responses::UserListResponse,
};
use crate::storage::Storage;

/// 用户服务
///
/// 身份与会话属于外部层，这里只管理用户档案数据。
pub struct UserService {
    storage: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建用户
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        create::create_user(self, req).await
    }

    /// 获取用户，不存在时报错
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.storage
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| SumWriteError::not_found(format!("用户不存在: {user_id}")))
    }

    /// 列出用户
    pub async fn list_users(&self, query: UserListQuery) -> Result<UserListResponse> {
        list::list_users(self, query).await
    }
}
