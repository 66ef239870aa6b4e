//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_sumwrite_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SumWriteError {
            $($variant(String),)*
        }

        impl SumWriteError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SumWriteError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SumWriteError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SumWriteError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SumWriteError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SumWriteError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_sumwrite_errors! {
    EmptySummary("E001", "Empty Summary Error"),
    ConstraintViolation("E002", "Constraint Violation Error"),
    ScoreOutOfRange("E003", "Score Out Of Range Error"),
    InvalidState("E004", "Invalid State Error"),
    Conflict("E005", "Conflict Error"),
    NotFound("E006", "Resource Not Found"),
    StorageOperation("E007", "Storage Operation Error"),
    StoragePluginNotFound("E008", "Storage Plugin Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
}

impl SumWriteError {
    /// 是否为用户可修正的校验错误（区别于调用方状态跟踪错误）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SumWriteError::EmptySummary(_)
                | SumWriteError::ConstraintViolation(_)
                | SumWriteError::ScoreOutOfRange(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SumWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SumWriteError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for SumWriteError {
    fn from(err: std::io::Error) -> Self {
        SumWriteError::StorageOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SumWriteError {
    fn from(err: serde_json::Error) -> Self {
        SumWriteError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SumWriteError {
    fn from(err: chrono::ParseError) -> Self {
        SumWriteError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SumWriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SumWriteError::empty_summary("test").code(), "E001");
        assert_eq!(SumWriteError::constraint_violation("test").code(), "E002");
        assert_eq!(SumWriteError::invalid_state("test").code(), "E004");
        assert_eq!(SumWriteError::not_found("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SumWriteError::score_out_of_range("test").error_type(),
            "Score Out Of Range Error"
        );
        assert_eq!(
            SumWriteError::invalid_state("test").error_type(),
            "Invalid State Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SumWriteError::constraint_violation("character limit exceeded");
        assert_eq!(err.message(), "character limit exceeded");
    }

    #[test]
    fn test_is_validation() {
        assert!(SumWriteError::empty_summary("x").is_validation());
        assert!(SumWriteError::score_out_of_range("x").is_validation());
        assert!(!SumWriteError::invalid_state("x").is_validation());
        assert!(!SumWriteError::conflict("x").is_validation());
    }

    #[test]
    fn test_format_simple() {
        let err = SumWriteError::empty_summary("summary text is empty");
        let formatted = err.format_simple();
        assert!(formatted.contains("Empty Summary Error"));
        assert!(formatted.contains("summary text is empty"));
    }
}
