//! 内存存储实现
//!
//! 单进程内存储层。整份数据由一把 `tokio::sync::RwLock` 保护：
//! 多步不变量校验（交稿、批阅、草稿查重）整体处于一个写临界区内，
//! 统计快照在一个读临界区内克隆，不会读到半程状态。

mod assignments;
mod classes;
mod materials;
mod missions;
mod reviews;
mod stats;
mod submissions;
mod users;

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;

use crate::declare_storage_plugin;
use crate::errors::Result;
use crate::models::PaginationInfo;
use crate::models::{
    assignments::entities::Assignment, classes::entities::Class,
    materials::entities::LearningMaterial, missions::entities::Mission,
    reviews::entities::Review, submissions::entities::Submission, users::entities::User,
};

declare_storage_plugin!("memory", MemoryStorage);

/// 内存存储实现
#[derive(Default)]
pub struct MemoryStorage {
    pub(crate) state: RwLock<StoreState>,
}

/// 存储内部状态
///
/// 批阅与提交一一对应，`reviews` 直接以 submission_id 为键。
#[derive(Default)]
pub(crate) struct StoreState {
    pub users: HashMap<i64, User>,
    pub classes: HashMap<i64, Class>,
    pub assignments: HashMap<i64, Assignment>,
    pub submissions: HashMap<i64, Submission>,
    pub reviews: HashMap<i64, Review>,
    pub materials: HashMap<i64, LearningMaterial>,
    pub missions: HashMap<i64, Mission>,
    next_id: i64,
}

impl StoreState {
    /// 分配全局自增ID
    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建新的内存存储实例
    pub async fn new_async() -> Result<Self> {
        info!("Memory storage initialized");
        Ok(Self::new())
    }
}

/// 对已过滤排序的结果做内存分页
pub(crate) fn paginate<T>(items: Vec<T>, page: Option<i64>, size: Option<i64>) -> (Vec<T>, PaginationInfo) {
    let page = page.unwrap_or(1).max(1);
    let size = size.unwrap_or(10).max(1);
    let total = items.len() as i64;

    let start = ((page - 1) * size) as usize;
    let page_items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(size as usize)
        .collect();

    (page_items, PaginationInfo::new(page, size, total))
}

// Storage trait 实现
use crate::models::{
    assignments::{
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    classes::requests::CreateClassRequest,
    materials::requests::CreateMaterialRequest,
    missions::requests::CreateMissionRequest,
    reviews::requests::RecordReviewRequest,
    stats::entities::CorpusSnapshot,
    submissions::{requests::SubmissionListQuery, responses::SubmissionListResponse},
    users::{
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

#[async_trait::async_trait]
impl super::Storage for MemoryStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn count_users(&self) -> Result<i64> {
        self.count_users_impl().await
    }

    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_class_students(&self, class_id: i64) -> Result<Vec<User>> {
        self.list_class_students_impl(class_id).await
    }

    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn create_draft(&self, assignment_id: i64, student_id: i64) -> Result<Submission> {
        self.create_draft_impl(assignment_id, student_id).await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn update_draft_text(&self, submission_id: i64, text: &str) -> Result<Submission> {
        self.update_draft_text_impl(submission_id, text).await
    }

    async fn submit_submission(&self, submission_id: i64) -> Result<Submission> {
        self.submit_submission_impl(submission_id).await
    }

    async fn record_review(
        &self,
        submission_id: i64,
        teacher_id: i64,
        teacher_name: &str,
        req: RecordReviewRequest,
    ) -> Result<Review> {
        self.record_review_impl(submission_id, teacher_id, teacher_name, req)
            .await
    }

    async fn get_review_by_submission_id(&self, submission_id: i64) -> Result<Option<Review>> {
        self.get_review_by_submission_id_impl(submission_id).await
    }

    async fn corpus_snapshot(&self, class_id: Option<i64>) -> Result<CorpusSnapshot> {
        self.corpus_snapshot_impl(class_id).await
    }

    async fn create_material(&self, req: CreateMaterialRequest) -> Result<LearningMaterial> {
        self.create_material_impl(req).await
    }

    async fn list_materials_by_grade(&self, grade: i32) -> Result<Vec<LearningMaterial>> {
        self.list_materials_by_grade_impl(grade).await
    }

    async fn create_mission(&self, req: CreateMissionRequest) -> Result<Mission> {
        self.create_mission_impl(req).await
    }

    async fn list_missions_by_student(&self, student_id: i64) -> Result<Vec<Mission>> {
        self.list_missions_by_student_impl(student_id).await
    }

    async fn complete_mission(&self, mission_id: i64) -> Result<Mission> {
        self.complete_mission_impl(mission_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::MemoryStorage;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::classes::requests::CreateClassRequest;
    use crate::models::reviews::requests::RecordReviewRequest;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::Storage;

    async fn seed_student(storage: &Arc<dyn Storage>, name: &str, class_id: i64) -> i64 {
        storage
            .create_user(CreateUserRequest {
                email: format!("{name}@example.com"),
                name: name.to_string(),
                role: UserRole::Student,
                grade: Some(5),
                class_id: Some(class_id),
                profile_image_url: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_assignment(storage: &Arc<dyn Storage>, created_by: i64) -> i64 {
        storage
            .create_assignment(
                created_by,
                CreateAssignmentRequest {
                    title: "摘要写作练习".to_string(),
                    source_text: "原文".to_string(),
                    instructions: "概括要点".to_string(),
                    grade: Some(5),
                    char_limit: None,
                    sentence_limit: None,
                    due_date: None,
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_tables() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let class = storage
            .create_class(CreateClassRequest {
                name: "五年级1班".to_string(),
                grade: 5,
            })
            .await
            .unwrap();
        let student_id = seed_student(&storage, "王小明", class.id).await;
        let assignment_id = seed_assignment(&storage, student_id).await;

        let mut ids = vec![class.id, student_id, assignment_id];
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_snapshot_is_scoped_to_class() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let class_a = storage
            .create_class(CreateClassRequest {
                name: "五年级1班".to_string(),
                grade: 5,
            })
            .await
            .unwrap();
        let class_b = storage
            .create_class(CreateClassRequest {
                name: "五年级2班".to_string(),
                grade: 5,
            })
            .await
            .unwrap();

        let in_class = seed_student(&storage, "王小明", class_a.id).await;
        let other = seed_student(&storage, "陈小红", class_b.id).await;
        let assignment_id = seed_assignment(&storage, in_class).await;

        // 两个班各有一条已批阅提交
        for student_id in [in_class, other] {
            let draft = storage
                .create_draft(assignment_id, student_id)
                .await
                .unwrap();
            storage.update_draft_text(draft.id, "第一句.").await.unwrap();
            storage.submit_submission(draft.id).await.unwrap();
            storage
                .record_review(
                    draft.id,
                    in_class,
                    "李老师",
                    RecordReviewRequest {
                        score: 80.0,
                        comments: String::new(),
                    },
                )
                .await
                .unwrap();
        }

        let snapshot = storage.corpus_snapshot(Some(class_a.id)).await.unwrap();
        assert_eq!(snapshot.students.len(), 1);
        assert_eq!(snapshot.students[0].id, in_class);
        assert_eq!(snapshot.submissions.len(), 1);
        assert_eq!(snapshot.reviews.len(), 1);

        let full = storage.corpus_snapshot(None).await.unwrap();
        assert_eq!(full.students.len(), 2);
        assert_eq!(full.submissions.len(), 2);
        assert_eq!(full.reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_paginate_clamps_page_and_size() {
        let (items, info) = super::paginate((1..=5).collect::<Vec<i32>>(), Some(0), Some(0));
        assert_eq!(info.page, 1);
        assert_eq!(info.page_size, 1);
        assert_eq!(items, vec![1]);

        let (items, info) = super::paginate((1..=5).collect::<Vec<i32>>(), Some(3), Some(2));
        assert_eq!(items, vec![5]);
        assert_eq!(info.total, 5);
        assert_eq!(info.total_pages, 3);
    }
}
