use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub scoring: ScoringConfig,
    pub storage: StorageConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 评分配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub min_score: f64, // 教师评分下限（含）
    pub max_score: f64, // 教师评分上限（含）
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub storage_type: String, // 存储后端名称（从注册表按名称解析）
}
