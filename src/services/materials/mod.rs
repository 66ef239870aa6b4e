pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::materials::entities::LearningMaterial;
use crate::storage::Storage;

/// 学习资料服务（只读目录）
pub struct MaterialService {
    storage: Arc<dyn Storage>,
}

impl MaterialService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 按年级列出学习资料
    pub async fn list_materials(&self, grade: i32) -> Result<Vec<LearningMaterial>> {
        list::list_materials(self, grade).await
    }
}
