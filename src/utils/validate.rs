use super::text_metrics::TextMetrics;

/// 限制校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitCheck {
    pub char_limit_exceeded: bool,
    pub sentence_limit_exceeded: bool,
}

impl LimitCheck {
    /// 是否存在越限
    pub fn is_violation(&self) -> bool {
        self.char_limit_exceeded || self.sentence_limit_exceeded
    }

    /// 汇总越限描述（用于校验错误信息）
    pub fn error_message(&self) -> String {
        let mut errors = Vec::new();
        if self.char_limit_exceeded {
            errors.push("character limit exceeded");
        }
        if self.sentence_limit_exceeded {
            errors.push("sentence limit exceeded");
        }
        errors.join("; ")
    }
}

/// 校验摘要度量是否超出任务限制
///
/// 未设置的限制不触发越限；等于限制值不算越限。
pub fn check_limits(
    char_limit: Option<i64>,
    sentence_limit: Option<i64>,
    metrics: &TextMetrics,
) -> LimitCheck {
    let char_limit_exceeded =
        char_limit.is_some_and(|limit| metrics.character_count as i64 > limit);
    let sentence_limit_exceeded =
        sentence_limit.is_some_and(|limit| metrics.sentence_count as i64 > limit);

    LimitCheck {
        char_limit_exceeded,
        sentence_limit_exceeded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text_metrics::measure;

    fn metrics(character_count: usize, sentence_count: usize) -> TextMetrics {
        TextMetrics {
            character_count,
            sentence_count,
        }
    }

    #[test]
    fn test_both_limits_exceeded() {
        let check = check_limits(Some(150), Some(4), &metrics(200, 5));
        assert!(check.char_limit_exceeded);
        assert!(check.sentence_limit_exceeded);
        assert!(check.is_violation());
    }

    #[test]
    fn test_unset_limits_never_trigger() {
        let check = check_limits(None, None, &metrics(10_000, 500));
        assert!(!check.char_limit_exceeded);
        assert!(!check.sentence_limit_exceeded);
        assert!(!check.is_violation());
    }

    #[test]
    fn test_exactly_at_limit_is_allowed() {
        let check = check_limits(Some(150), Some(4), &metrics(150, 4));
        assert!(!check.is_violation());
    }

    #[test]
    fn test_only_sentence_limit_exceeded() {
        let text = "A. B. C. D.";
        let check = check_limits(None, Some(3), &measure(text));
        assert!(!check.char_limit_exceeded);
        assert!(check.sentence_limit_exceeded);
        assert_eq!(check.error_message(), "sentence limit exceeded");
    }

    #[test]
    fn test_error_message_joins_rules() {
        let check = check_limits(Some(1), Some(1), &metrics(2, 2));
        assert_eq!(
            check.error_message(),
            "character limit exceeded; sentence limit exceeded"
        );
    }
}
