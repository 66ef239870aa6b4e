use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;
use crate::models::PaginationInfo;
use crate::models::reviews::entities::Review;

/// 提交详情（附带批阅结果，未批阅则为空）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionDetailResponse {
    pub submission: Submission,
    pub review: Option<Review>,
}

/// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}
