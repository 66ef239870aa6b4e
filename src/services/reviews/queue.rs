//! 待批阅队列

use super::ReviewService;
use crate::errors::Result;
use crate::models::reviews::responses::{ReviewQueueItem, ReviewQueueResponse};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::SubmissionListQuery;
use crate::storage::Storage;

/// 列出等待批阅的提交，最早提交的排在最前
pub(crate) async fn pending_queue(service: &ReviewService) -> Result<ReviewQueueResponse> {
    let pending = service
        .storage()
        .list_submissions_with_pagination(SubmissionListQuery {
            page: Some(1),
            size: Some(10000), // 队列不分页，取全部
            status: Some(SubmissionStatus::Submitted),
            ..Default::default()
        })
        .await?;

    let mut submissions = pending.items;
    submissions.sort_by_key(|s| (s.submitted_at, s.id));

    let mut items = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let assignment = service
            .storage()
            .get_assignment_by_id(submission.assignment_id)
            .await?;
        let student = service
            .storage()
            .get_user_by_id(submission.student_id)
            .await?;

        // submitted 状态必有提交时刻
        let Some(submitted_at) = submission.submitted_at else {
            continue;
        };

        items.push(ReviewQueueItem {
            submission_id: submission.id,
            assignment_id: submission.assignment_id,
            assignment_title: assignment.map(|a| a.title).unwrap_or_default(),
            student_id: submission.student_id,
            student_name: student.map(|u| u.name).unwrap_or_default(),
            submitted_at,
        });
    }

    Ok(ReviewQueueResponse { items })
}

#[cfg(test)]
mod tests {
    use crate::services::test_support::*;
    use crate::services::{ReviewService, SubmissionService};

    #[tokio::test]
    async fn test_queue_orders_oldest_first() {
        let storage = storage().await;
        let class = seed_class(&storage).await;
        let teacher = seed_teacher(&storage).await;
        let a = seed_student(&storage, "王小明", class.id).await;
        let b = seed_student(&storage, "陈小红", class.id).await;
        let assignment = seed_assignment(&storage, teacher.id).await;

        let submissions = SubmissionService::new(storage.clone());
        let reviews = ReviewService::new(storage.clone());

        let draft_a = submissions.start_draft(assignment.id, a.id).await.unwrap();
        let draft_b = submissions.start_draft(assignment.id, b.id).await.unwrap();
        submissions.edit_draft(draft_a.id, "第一句.").await.unwrap();
        submissions.edit_draft(draft_b.id, "第一句.").await.unwrap();

        // A 先交稿，应排在队首
        submissions.submit(draft_a.id).await.unwrap();
        submissions.submit(draft_b.id).await.unwrap();

        let queue = reviews.pending_queue().await.unwrap();
        assert_eq!(queue.items.len(), 2);
        assert_eq!(queue.items[0].submission_id, draft_a.id);
        assert_eq!(queue.items[0].student_name, "王小明");
        assert_eq!(queue.items[1].submission_id, draft_b.id);
    }

    #[tokio::test]
    async fn test_queue_excludes_drafts_and_evaluated() {
        let storage = storage().await;
        let class = seed_class(&storage).await;
        let teacher = seed_teacher(&storage).await;
        let a = seed_student(&storage, "王小明", class.id).await;
        let assignment = seed_assignment(&storage, teacher.id).await;

        let submissions = SubmissionService::new(storage.clone());
        let reviews = ReviewService::new(storage.clone());

        // 草稿不入队
        let draft = submissions.start_draft(assignment.id, a.id).await.unwrap();
        assert!(reviews.pending_queue().await.unwrap().items.is_empty());

        submissions.edit_draft(draft.id, "第一句.").await.unwrap();
        submissions.submit(draft.id).await.unwrap();
        assert_eq!(reviews.pending_queue().await.unwrap().items.len(), 1);
    }
}
