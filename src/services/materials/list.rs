//! 学习资料列表

use super::MaterialService;
use crate::errors::Result;
use crate::models::materials::entities::LearningMaterial;
use crate::storage::Storage;

/// 按年级列出学习资料（按展示顺序）
pub(crate) async fn list_materials(
    service: &MaterialService,
    grade: i32,
) -> Result<Vec<LearningMaterial>> {
    service.storage().list_materials_by_grade(grade).await
}

#[cfg(test)]
mod tests {
    use crate::models::materials::requests::CreateMaterialRequest;
    use crate::services::MaterialService;
    use crate::services::test_support::*;

    #[tokio::test]
    async fn test_list_orders_by_order_index() {
        let storage = storage().await;
        for (title, order_index) in [("进阶技巧", 2), ("基础概念", 1)] {
            storage
                .create_material(CreateMaterialRequest {
                    title: title.to_string(),
                    description: String::new(),
                    grade: 5,
                    topic: "摘要写作".to_string(),
                    order_index,
                })
                .await
                .unwrap();
        }

        let service = MaterialService::new(storage);
        let materials = service.list_materials(5).await.unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].title, "基础概念");
        assert_eq!(materials[1].title, "进阶技巧");

        // 其他年级没有资料
        assert!(service.list_materials(6).await.unwrap().is_empty());
    }
}
