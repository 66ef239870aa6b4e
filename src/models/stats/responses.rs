use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

/// 学生维度统计
///
/// `average_score` 为该生已批阅提交分数的四舍五入均值；没有任何批阅时为
/// 空，区别于 0 分。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct StudentSummaryStats {
    pub student_id: i64,
    pub name: String,
    pub average_score: Option<i64>,
    pub submission_count: i64, // 各状态提交都计入
    pub last_submission: Option<DateTime<Utc>>, // 非草稿提交的最近提交时刻
    pub score_trend: Vec<f64>, // 按批阅先后排列的得分序列
}

/// 分数统计（班级内全部批阅得分）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct ScoreStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

/// 班级维度统计
///
/// `average_score` 是各学生均分的无权平均（与仪表盘展示口径一致）；
/// 全班无任何批阅时为空。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct ClassStatsResponse {
    pub class_id: i64,
    pub name: String,
    pub grade: i32,
    pub student_count: i64,
    pub average_score: Option<i64>,
    pub total_submissions: i64,
    pub pending_reviews: i64, // submitted 状态、等待批阅的提交数
    pub score_stats: Option<ScoreStats>,
}
