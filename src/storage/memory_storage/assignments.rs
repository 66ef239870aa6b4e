//! 任务存储操作

use chrono::Utc;

use super::{MemoryStorage, paginate};
use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest},
    responses::AssignmentListResponse,
};

impl MemoryStorage {
    /// 创建写作任务
    pub(crate) async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let mut state = self.state.write().await;

        let id = state.next_id();
        let assignment = Assignment {
            id,
            title: req.title,
            source_text: req.source_text,
            instructions: req.instructions,
            grade: req.grade,
            char_limit: req.char_limit,
            sentence_limit: req.sentence_limit,
            due_date: req.due_date,
            created_by,
            created_at: Utc::now(),
        };
        state.assignments.insert(id, assignment.clone());

        Ok(assignment)
    }

    /// 通过 ID 获取任务
    pub(crate) async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let state = self.state.read().await;
        Ok(state.assignments.get(&id).cloned())
    }

    /// 列出任务（新建在前）
    pub(crate) async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let state = self.state.read().await;

        let mut assignments: Vec<Assignment> = state
            .assignments
            .values()
            .filter(|a| query.grade.is_none_or(|grade| a.grade == Some(grade)))
            .filter(|a| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|needle| a.title.contains(needle))
            })
            .cloned()
            .collect();
        assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let (items, pagination) = paginate(assignments, query.page, query.size);
        Ok(AssignmentListResponse { items, pagination })
    }
}
