use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
//
// 状态只能单向推进：draft → submitted → evaluated。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Draft,     // 草稿，文本可编辑
    Submitted, // 已提交，等待教师批阅
    Evaluated, // 已批阅，终态
}

impl SubmissionStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SUBMITTED: &'static str = "submitted";
    pub const EVALUATED: &'static str = "evaluated";

    /// 文本是否可编辑（仅草稿）
    pub fn can_edit(&self) -> bool {
        matches!(self, SubmissionStatus::Draft)
    }

    /// 是否可提交（仅草稿）
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Draft)
    }

    /// 是否可批阅（仅已提交）
    pub fn can_review(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }

    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Evaluated)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::DRAFT => Ok(SubmissionStatus::Draft),
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::EVALUATED => Ok(SubmissionStatus::Evaluated),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: draft, submitted, evaluated"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Draft => write!(f, "{}", SubmissionStatus::DRAFT),
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Evaluated => write!(f, "{}", SubmissionStatus::EVALUATED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SubmissionStatus::Draft),
            "submitted" => Ok(SubmissionStatus::Submitted),
            "evaluated" => Ok(SubmissionStatus::Evaluated),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 学生对某任务的提交
///
/// 每个 (student, assignment) 组合最多一条有效提交。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub summary_text: String,
    pub status: SubmissionStatus,
    pub submitted_at: Option<DateTime<Utc>>, // 提交时刻，草稿阶段为空
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_roundtrip() {
        for s in ["draft", "submitted", "evaluated"] {
            assert_eq!(SubmissionStatus::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!(SubmissionStatus::from_str("graded").is_err());
    }

    #[test]
    fn test_only_draft_is_editable() {
        assert!(SubmissionStatus::Draft.can_edit());
        assert!(!SubmissionStatus::Submitted.can_edit());
        assert!(!SubmissionStatus::Evaluated.can_edit());
    }

    #[test]
    fn test_only_submitted_is_reviewable() {
        assert!(!SubmissionStatus::Draft.can_review());
        assert!(SubmissionStatus::Submitted.can_review());
        assert!(!SubmissionStatus::Evaluated.can_review());
    }

    #[test]
    fn test_terminal_state() {
        assert!(SubmissionStatus::Evaluated.is_terminal());
        assert!(!SubmissionStatus::Draft.is_terminal());
    }
}
