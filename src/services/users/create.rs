//! 创建用户

use tracing::info;

use super::UserService;
use crate::errors::Result;
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::storage::Storage;

/// 创建用户档案
pub(crate) async fn create_user(service: &UserService, req: CreateUserRequest) -> Result<User> {
    let user = service.storage().create_user(req).await?;

    info!("User {} \"{}\" created ({})", user.id, user.name, user.role);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use crate::errors::SumWriteError;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::CreateUserRequest;
    use crate::services::UserService;
    use crate::services::test_support::*;

    #[tokio::test]
    async fn test_create_user_rejects_unknown_class() {
        let storage = storage().await;
        let service = UserService::new(storage);

        let err = service
            .create_user(CreateUserRequest {
                email: "kid@example.com".to_string(),
                name: "王小明".to_string(),
                role: UserRole::Student,
                grade: Some(5),
                class_id: Some(404),
                profile_image_url: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SumWriteError::NotFound(_)));
    }
}
