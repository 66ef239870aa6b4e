//! 统计快照

use std::collections::HashSet;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::stats::entities::CorpusSnapshot;
use crate::models::users::entities::UserRole;

impl MemoryStorage {
    /// 在同一次读锁内克隆统计所需的全部集合
    ///
    /// `class_id` 给定时只取该班学生及其提交、批阅；为空时取全量。
    pub(crate) async fn corpus_snapshot_impl(
        &self,
        class_id: Option<i64>,
    ) -> Result<CorpusSnapshot> {
        let state = self.state.read().await;

        let mut students: Vec<_> = state
            .users
            .values()
            .filter(|u| u.role == UserRole::Student)
            .filter(|u| class_id.is_none_or(|id| u.class_id == Some(id)))
            .cloned()
            .collect();
        students.sort_by_key(|u| u.id);

        let student_ids: HashSet<i64> = students.iter().map(|u| u.id).collect();

        let mut submissions: Vec<_> = state
            .submissions
            .values()
            .filter(|s| student_ids.contains(&s.student_id))
            .cloned()
            .collect();
        submissions.sort_by_key(|s| s.id);

        let submission_ids: HashSet<i64> = submissions.iter().map(|s| s.id).collect();

        let mut reviews: Vec<_> = state
            .reviews
            .values()
            .filter(|r| submission_ids.contains(&r.submission_id))
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.id);

        Ok(CorpusSnapshot {
            students,
            submissions,
            reviews,
        })
    }
}
