use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    classes::{entities::Class, requests::CreateClassRequest},
    materials::{entities::LearningMaterial, requests::CreateMaterialRequest},
    missions::{entities::Mission, requests::CreateMissionRequest},
    reviews::{entities::Review, requests::RecordReviewRequest},
    stats::entities::CorpusSnapshot,
    submissions::{
        entities::Submission,
        requests::SubmissionListQuery,
        responses::SubmissionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::config::AppConfig;
use crate::errors::{Result, SumWriteError};

pub mod memory_storage;
pub mod register;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 统计用户总数（用于首次启动判断）
    async fn count_users(&self) -> Result<i64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级学生名册
    async fn list_class_students(&self, class_id: i64) -> Result<Vec<User>>;

    /// 任务管理方法
    // 创建写作任务
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取任务
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出任务
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;

    /// 提交管理方法
    ///
    /// 状态机命令（创建草稿、改稿、交稿）在同一次写锁内完成校验与状态
    /// 转移，并发的 submit 与 edit 不会交错。
    // 创建草稿（每个 学生×任务 组合最多一条）
    async fn create_draft(&self, assignment_id: i64, student_id: i64) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取学生在某任务下的提交
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 改写草稿正文（仅草稿状态）
    async fn update_draft_text(&self, submission_id: i64, text: &str) -> Result<Submission>;
    // 交稿：空稿校验 + 限制校验 + draft→submitted 转移
    async fn submit_submission(&self, submission_id: i64) -> Result<Submission>;

    /// 批阅管理方法
    // 记录批阅：submitted→evaluated 转移并创建一对一批阅记录
    async fn record_review(
        &self,
        submission_id: i64,
        teacher_id: i64,
        teacher_name: &str,
        req: RecordReviewRequest,
    ) -> Result<Review>;
    // 获取提交的批阅记录
    async fn get_review_by_submission_id(&self, submission_id: i64) -> Result<Option<Review>>;

    /// 统计快照
    // 在同一次读锁内克隆统计所需的全部集合；class_id 为空时取全量
    async fn corpus_snapshot(&self, class_id: Option<i64>) -> Result<CorpusSnapshot>;

    /// 学习资料管理方法
    async fn create_material(&self, req: CreateMaterialRequest) -> Result<LearningMaterial>;
    async fn list_materials_by_grade(&self, grade: i32) -> Result<Vec<LearningMaterial>>;

    /// 学习任务管理方法
    async fn create_mission(&self, req: CreateMissionRequest) -> Result<Mission>;
    async fn list_missions_by_student(&self, student_id: i64) -> Result<Vec<Mission>>;
    // 完成学习任务（幂等）
    async fn complete_mission(&self, mission_id: i64) -> Result<Mission>;
}

/// 按配置从注册表创建存储后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    create_storage_by_name(&config.storage.storage_type).await
}

/// 按名称从注册表创建存储后端
pub async fn create_storage_by_name(storage_type: &str) -> Result<Arc<dyn Storage>> {
    match register::get_storage_plugin(storage_type) {
        Some(constructor) => {
            let storage = constructor().await?;
            Ok(Arc::from(storage))
        }
        None => Err(SumWriteError::storage_plugin_not_found(format!(
            "存储后端 '{storage_type}' 未注册"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_is_registered() {
        let storage = create_storage_by_name("memory").await;
        assert!(storage.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_backend_fails() {
        let err = create_storage_by_name("postgres").await.err().unwrap();
        assert!(matches!(err, SumWriteError::StoragePluginNotFound(_)));
    }
}
