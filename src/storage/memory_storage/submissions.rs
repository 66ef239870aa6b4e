//! 提交存储操作
//!
//! 状态机命令在单个写临界区内完成全部校验与转移，
//! 同一提交上的并发命令不会交错出丢失更新。

use chrono::Utc;

use super::{MemoryStorage, paginate};
use crate::errors::{Result, SumWriteError};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::SubmissionListQuery,
    responses::SubmissionListResponse,
};
use crate::utils::{check_limits, measure};

impl MemoryStorage {
    /// 创建草稿
    ///
    /// 每个 (student, assignment) 组合最多一条提交，重复创建报冲突。
    pub(crate) async fn create_draft_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Submission> {
        let mut state = self.state.write().await;

        if !state.assignments.contains_key(&assignment_id) {
            return Err(SumWriteError::not_found(format!(
                "任务不存在: {assignment_id}"
            )));
        }
        if !state.users.contains_key(&student_id) {
            return Err(SumWriteError::not_found(format!(
                "学生不存在: {student_id}"
            )));
        }
        let duplicated = state
            .submissions
            .values()
            .any(|s| s.assignment_id == assignment_id && s.student_id == student_id);
        if duplicated {
            return Err(SumWriteError::conflict(format!(
                "学生 {student_id} 在任务 {assignment_id} 下已有提交"
            )));
        }

        let id = state.next_id();
        let submission = Submission {
            id,
            assignment_id,
            student_id,
            summary_text: String::new(),
            status: SubmissionStatus::Draft,
            submitted_at: None,
            created_at: Utc::now(),
        };
        state.submissions.insert(id, submission.clone());

        Ok(submission)
    }

    /// 通过 ID 获取提交
    pub(crate) async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let state = self.state.read().await;
        Ok(state.submissions.get(&id).cloned())
    }

    /// 获取学生在某任务下的提交
    pub(crate) async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let state = self.state.read().await;
        Ok(state
            .submissions
            .values()
            .find(|s| s.assignment_id == assignment_id && s.student_id == student_id)
            .cloned())
    }

    /// 列出提交（新建在前）
    pub(crate) async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let state = self.state.read().await;

        let mut submissions: Vec<Submission> = state
            .submissions
            .values()
            .filter(|s| query.assignment_id.is_none_or(|id| s.assignment_id == id))
            .filter(|s| query.student_id.is_none_or(|id| s.student_id == id))
            .filter(|s| query.status.is_none_or(|status| s.status == status))
            .cloned()
            .collect();
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let (items, pagination) = paginate(submissions, query.page, query.size);
        Ok(SubmissionListResponse { items, pagination })
    }

    /// 改写草稿正文
    ///
    /// 仅草稿可改；提交后正文不可变。
    pub(crate) async fn update_draft_text_impl(
        &self,
        submission_id: i64,
        text: &str,
    ) -> Result<Submission> {
        let mut state = self.state.write().await;

        let submission = state
            .submissions
            .get_mut(&submission_id)
            .ok_or_else(|| SumWriteError::not_found(format!("提交不存在: {submission_id}")))?;

        if !submission.status.can_edit() {
            return Err(SumWriteError::invalid_state(format!(
                "提交 {submission_id} 处于 {} 状态，正文不可编辑",
                submission.status
            )));
        }

        submission.summary_text = text.to_string();
        Ok(submission.clone())
    }

    /// 交稿：draft → submitted
    ///
    /// 空稿校验、限制校验与状态转移在同一临界区内完成；
    /// 校验失败不改变任何状态。
    pub(crate) async fn submit_submission_impl(&self, submission_id: i64) -> Result<Submission> {
        let mut state = self.state.write().await;

        let submission = state
            .submissions
            .get(&submission_id)
            .ok_or_else(|| SumWriteError::not_found(format!("提交不存在: {submission_id}")))?;

        if !submission.status.can_submit() {
            return Err(SumWriteError::invalid_state(format!(
                "提交 {submission_id} 处于 {} 状态，不能重复交稿",
                submission.status
            )));
        }

        if submission.summary_text.trim().is_empty() {
            return Err(SumWriteError::empty_summary("摘要内容为空，不能交稿"));
        }

        let assignment = state
            .assignments
            .get(&submission.assignment_id)
            .ok_or_else(|| {
                SumWriteError::not_found(format!("任务不存在: {}", submission.assignment_id))
            })?;

        let metrics = measure(&submission.summary_text);
        let check = check_limits(assignment.char_limit, assignment.sentence_limit, &metrics);
        if check.is_violation() {
            return Err(SumWriteError::constraint_violation(check.error_message()));
        }

        let submission = state
            .submissions
            .get_mut(&submission_id)
            .expect("submission disappeared inside write lock");
        submission.status = SubmissionStatus::Submitted;
        submission.submitted_at = Some(Utc::now());

        Ok(submission.clone())
    }
}
