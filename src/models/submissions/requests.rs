use serde::Deserialize;
use ts_rs::TS;

use super::entities::SubmissionStatus;

/// 提交列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}
