use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::materials::requests::CreateMaterialRequest;
use crate::models::missions::requests::CreateMissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化示例数据
///
/// 存储为空时灌入一个班级、一名教师、三名学生和示例任务，
/// 作为无后端接入时的演示数据集；已有数据则跳过。
async fn seed_demo_data(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Storage already has {} user(s), skipping demo seed", count);
            return;
        }
        Ok(_) => {
            info!("Empty storage, seeding demo dataset...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping demo seed", e);
            return;
        }
    }

    if let Err(e) = seed_demo_data_inner(storage).await {
        warn!("Failed to seed demo dataset: {}", e);
    }
}

async fn seed_demo_data_inner(storage: &Arc<dyn Storage>) -> crate::errors::Result<()> {
    let class = storage
        .create_class(CreateClassRequest {
            name: "五年级1班".to_string(),
            grade: 5,
        })
        .await?;

    let teacher = storage
        .create_user(CreateUserRequest {
            email: "teacher@sumwrite.local".to_string(),
            name: "李老师".to_string(),
            role: UserRole::Teacher,
            grade: None,
            class_id: None,
            profile_image_url: None,
        })
        .await?;

    let mut first_student_id = None;
    for (name, email) in [
        ("王小明", "xiaoming@sumwrite.local"),
        ("陈小红", "xiaohong@sumwrite.local"),
        ("林小华", "xiaohua@sumwrite.local"),
    ] {
        let student = storage
            .create_user(CreateUserRequest {
                email: email.to_string(),
                name: name.to_string(),
                role: UserRole::Student,
                grade: Some(5),
                class_id: Some(class.id),
                profile_image_url: None,
            })
            .await?;
        first_student_id.get_or_insert(student.id);
    }

    storage
        .create_assignment(
            teacher.id,
            CreateAssignmentRequest {
                title: "动物生态摘要练习".to_string(),
                source_text: "大熊猫栖息在中国的山区，主要以竹子为食，每天要花十二到十六个小时进食。\n\n大熊猫有标志性的黑白毛色，体重约一百到一百五十公斤。\n\n目前大熊猫被列为易危物种，栖息地破碎和繁殖率低是主要原因，中国为此设立了多个保护区并开展人工繁育。".to_string(),
                instructions: "阅读上文，用三到四句话概括大熊猫的特点与保护现状。".to_string(),
                grade: Some(5),
                char_limit: Some(150),
                sentence_limit: Some(4),
                due_date: Some(Utc::now() + Duration::days(10)),
            },
        )
        .await?;

    storage
        .create_assignment(
            teacher.id,
            CreateAssignmentRequest {
                title: "太阳系行星概述".to_string(),
                source_text: "太阳系由太阳和围绕它运转的天体组成，共有八颗行星。\n\n地球是距太阳第三近的行星，表面约百分之七十一被海洋覆盖。\n\n体积最大的行星是木星，它是一颗气态巨行星，体积约是地球的一千三百倍。".to_string(),
                instructions: "请用三句话概括太阳系与行星的特点。".to_string(),
                grade: Some(5),
                char_limit: None,
                sentence_limit: Some(3),
                due_date: Some(Utc::now() + Duration::days(16)),
            },
        )
        .await?;

    for (title, description, order_index) in [
        ("摘要写作基础", "了解什么是摘要，摘要和缩写的区别", 1),
        ("抓住关键句", "学习从段落中找出中心句", 2),
        ("用自己的话改写", "练习不照抄原文地复述要点", 3),
    ] {
        storage
            .create_material(CreateMaterialRequest {
                title: title.to_string(),
                description: description.to_string(),
                grade: 5,
                topic: "摘要写作".to_string(),
                order_index,
            })
            .await?;
    }

    if let Some(student_id) = first_student_id {
        for (title, description) in [
            ("提交本周摘要任务", "完成并提交本周的摘要写作任务"),
            ("完成三个学习资料", "学完摘要写作的基础学习资料"),
            ("查看教师批语", "阅读老师的批语并记录改进点"),
        ] {
            storage
                .create_mission(CreateMissionRequest {
                    student_id,
                    title: title.to_string(),
                    description: description.to_string(),
                    due_date: Some(Utc::now() + Duration::days(7)),
                })
                .await?;
        }
    }

    info!("Demo dataset seeded (class {}, teacher {})", class.id, teacher.id);
    Ok(())
}

/// 准备启动上下文：创建存储后端并灌入示例数据
pub async fn prepare_startup() -> StartupContext {
    if cfg!(debug_assertions) {
        crate::storage::register::debug_storage_registry();
        debug!("Debug mode: Storage registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized");

    seed_demo_data(&storage).await;

    StartupContext { storage }
}
