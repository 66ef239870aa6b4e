//! 学习资料存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::materials::{entities::LearningMaterial, requests::CreateMaterialRequest};

impl MemoryStorage {
    /// 创建学习资料
    pub(crate) async fn create_material_impl(
        &self,
        req: CreateMaterialRequest,
    ) -> Result<LearningMaterial> {
        let mut state = self.state.write().await;

        let id = state.next_id();
        let material = LearningMaterial {
            id,
            title: req.title,
            description: req.description,
            grade: req.grade,
            topic: req.topic,
            order_index: req.order_index,
        };
        state.materials.insert(id, material.clone());

        Ok(material)
    }

    /// 按年级列出学习资料（按展示顺序）
    pub(crate) async fn list_materials_by_grade_impl(
        &self,
        grade: i32,
    ) -> Result<Vec<LearningMaterial>> {
        let state = self.state.read().await;

        let mut materials: Vec<LearningMaterial> = state
            .materials
            .values()
            .filter(|m| m.grade == grade)
            .cloned()
            .collect();
        materials.sort_by_key(|m| (m.order_index, m.id));

        Ok(materials)
    }
}
