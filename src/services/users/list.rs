//! 用户列表

use super::UserService;
use crate::errors::Result;
use crate::models::users::{requests::UserListQuery, responses::UserListResponse};
use crate::storage::Storage;

/// 按条件列出用户
pub(crate) async fn list_users(
    service: &UserService,
    query: UserListQuery,
) -> Result<UserListResponse> {
    service.storage().list_users_with_pagination(query).await
}

#[cfg(test)]
mod tests {
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::UserListQuery;
    use crate::services::UserService;
    use crate::services::test_support::*;

    #[tokio::test]
    async fn test_list_filters_by_role() {
        let storage = storage().await;
        let class = seed_class(&storage).await;
        seed_teacher(&storage).await;
        seed_student(&storage, "王小明", class.id).await;
        seed_student(&storage, "陈小红", class.id).await;

        let service = UserService::new(storage);
        let students = service
            .list_users(UserListQuery {
                role: Some(UserRole::Student),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(students.items.len(), 2);
        assert!(students.items.iter().all(|u| u.role == UserRole::Student));
    }
}
