use once_cell::sync::Lazy;
use regex::Regex;

// 句子以 . ! ? 的连续串收尾，连续终止符只算一次切分
static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence split regex"));

/// 摘要文本度量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub character_count: usize, // 含空白，不做修剪
    pub sentence_count: usize,
}

/// 计算文本度量
///
/// 字符数按作者输入原样统计；句子数为按终止符切分后
/// 非空白片段的数量，结尾的终止符不会产生空片段。
pub fn measure(text: &str) -> TextMetrics {
    let character_count = text.chars().count();
    let sentence_count = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count();

    TextMetrics {
        character_count,
        sentence_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        assert_eq!(measure("Hello.").sentence_count, 1);
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(measure("Hello. World!").sentence_count, 2);
    }

    #[test]
    fn test_empty_text() {
        let metrics = measure("");
        assert_eq!(metrics.character_count, 0);
        assert_eq!(metrics.sentence_count, 0);
    }

    #[test]
    fn test_trailing_terminators_no_phantom_segment() {
        assert_eq!(measure("A. B. C.").sentence_count, 3);
        assert_eq!(measure("Wow!!!").sentence_count, 1);
        assert_eq!(measure("...").sentence_count, 0);
    }

    #[test]
    fn test_whitespace_only_segments_discarded() {
        assert_eq!(measure("A.   . B.").sentence_count, 2);
    }

    #[test]
    fn test_character_count_includes_whitespace() {
        let text = "ab c\nd ";
        assert_eq!(measure(text).character_count, 7);
    }

    #[test]
    fn test_character_count_counts_chars_not_bytes() {
        assert_eq!(measure("판다는 곰과 동물").character_count, 9);
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(measure("What?! Yes. No").sentence_count, 3);
    }
}
