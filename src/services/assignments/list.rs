//! 任务列表

use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{
    requests::AssignmentListQuery, responses::AssignmentListResponse,
};
use crate::storage::Storage;

/// 按条件列出任务（新建在前）
pub(crate) async fn list_assignments(
    service: &AssignmentService,
    query: AssignmentListQuery,
) -> Result<AssignmentListResponse> {
    service
        .storage()
        .list_assignments_with_pagination(query)
        .await
}

#[cfg(test)]
mod tests {
    use crate::models::assignments::requests::AssignmentListQuery;
    use crate::services::AssignmentService;
    use crate::services::test_support::*;

    #[tokio::test]
    async fn test_list_paginates() {
        let storage = storage().await;
        let teacher = seed_teacher(&storage).await;
        for _ in 0..3 {
            seed_assignment(&storage, teacher.id).await;
        }

        let service = AssignmentService::new(storage);
        let page = service
            .list_assignments(AssignmentListQuery {
                page: Some(1),
                size: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
    }
}
