//! 创建班级

use tracing::info;

use super::ClassService;
use crate::errors::Result;
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::storage::Storage;

/// 创建班级
pub(crate) async fn create_class(service: &ClassService, req: CreateClassRequest) -> Result<Class> {
    let class = service.storage().create_class(req).await?;

    info!("Class {} \"{}\" created", class.id, class.name);
    Ok(class)
}
