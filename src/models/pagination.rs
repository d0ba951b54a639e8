//! 分页相关的数据结构

use serde::{Deserialize, Serialize};

const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PaginationParams {
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self { page, per_page }
    }

    pub fn get_page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn get_per_page(&self) -> u64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    /// 超大页码不会溢出，偏移量封顶在 i64::MAX（数据库可接受的上限），结果为空页
    pub fn get_offset(&self) -> u64 {
        (self.get_page() - 1)
            .saturating_mul(self.get_per_page())
            .min(i64::MAX as u64)
    }

    pub fn get_limit(&self) -> u64 {
        self.get_per_page()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, params: &PaginationParams, total: u64) -> Self {
        let per_page = params.get_per_page();
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };
        Self {
            items,
            page: params.get_page(),
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params() {
        let params = PaginationParams::new(Some(2), Some(10));
        assert_eq!(params.get_page(), 2);
        assert_eq!(params.get_per_page(), 10);
        assert_eq!(params.get_offset(), 10);
        assert_eq!(params.get_limit(), 10);
    }

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams::new(None, None);
        assert_eq!(params.get_page(), 1);
        assert_eq!(params.get_per_page(), 20);
        assert_eq!(params.get_offset(), 0);
    }

    #[test]
    fn test_pagination_params_clamped() {
        let params = PaginationParams::new(Some(0), Some(1000));
        assert_eq!(params.get_page(), 1);
        assert_eq!(params.get_per_page(), 100);
    }

    #[test]
    fn test_pagination_offset_does_not_overflow() {
        let params = PaginationParams::new(Some(u64::MAX), Some(100));
        assert_eq!(params.get_page(), u64::MAX);
        assert_eq!(params.get_offset(), i64::MAX as u64);
    }

    #[test]
    fn test_paginated_response_total_pages() {
        let params = PaginationParams::new(Some(2), Some(10));
        let page = PaginatedResponse::new(vec![1, 2, 3], &params, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);

        let empty: PaginatedResponse<i32> = PaginatedResponse::new(vec![], &params, 0);
        assert_eq!(empty.total_pages, 1);
    }
}
