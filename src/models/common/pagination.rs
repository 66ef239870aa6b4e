use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    /// 由总条数计算分页信息
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let info = PaginationInfo::new(1, 10, 21);
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn test_empty_total() {
        let info = PaginationInfo::new(1, 10, 0);
        assert_eq!(info.total_pages, 0);
    }
}
