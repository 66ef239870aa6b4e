pub mod create;
pub mod roster;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::classes::{
    entities::Class, requests::CreateClassRequest, responses::ClassRosterResponse,
};
use crate::storage::Storage;

/// 班级服务
pub struct ClassService {
    storage: Arc<dyn Storage>,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建班级
    pub async fn create_class(&self, req: CreateClassRequest) -> Result<Class> {
        create::create_class(self, req).await
    }

    /// 班级名册
    pub async fn get_roster(&self, class_id: i64) -> Result<ClassRosterResponse> {
        roster::get_roster(self, class_id).await
    }
}
