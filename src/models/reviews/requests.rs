use serde::Deserialize;
use ts_rs::TS;

/// 批阅请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct RecordReviewRequest {
    pub score: f64,
    pub comments: String,
}
