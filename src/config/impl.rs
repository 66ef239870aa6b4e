use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证无配置文件时也可运行
            .set_default("app.system_name", "SumWrite")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("scoring.min_score", 0.0)?
            .set_default("scoring.max_score", 100.0)?
            .set_default("storage.type", "memory")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("SUMWRITE")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("storage.type", std::env::var("STORAGE_TYPE").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 教师评分的合法区间（闭区间）
    pub fn score_range(&self) -> std::ops::RangeInclusive<f64> {
        self.scoring.min_score..=self.scoring.max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_builtin_defaults() {
        let config = AppConfig::load().expect("load should fall back to defaults");
        assert_eq!(config.scoring.min_score, 0.0);
        assert_eq!(config.scoring.max_score, 100.0);
        assert_eq!(config.storage.storage_type, "memory");
    }

    #[test]
    fn test_score_range() {
        let config = AppConfig::load().unwrap();
        assert!(config.score_range().contains(&0.0));
        assert!(config.score_range().contains(&100.0));
        assert!(!config.score_range().contains(&150.0));
    }
}
