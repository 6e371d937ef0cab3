//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Page request shared by every list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: i64,
    pub page_size: i64,
}

impl PaginationParams {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Coerce out-of-range values.
    ///
    /// A page below 1 becomes 1. A page size outside `1..=MAX_PAGE_SIZE`
    /// becomes `DEFAULT_PAGE_SIZE` (it is not clamped to the bound).
    pub fn normalized(self) -> Self {
        let page = if self.page < 1 {
            DEFAULT_PAGE_NUMBER
        } else {
            self.page
        };
        let page_size = if (1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            self.page_size
        } else {
            DEFAULT_PAGE_SIZE
        };

        Self { page, page_size }
    }

    /// Rows to skip; call on normalized params.
    ///
    /// Saturates at `i64::MAX`, the largest offset Postgres accepts.
    pub fn offset(&self) -> u64 {
        let skipped_pages = self.page.saturating_sub(1).max(0);
        skipped_pages.saturating_mul(self.page_size.max(0)) as u64
    }

    /// Rows to fetch; call on normalized params
    pub fn limit(&self) -> u64 {
        self.page_size.max(0) as u64
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Raw `page` / `page_size` query parameters.
///
/// Values are kept as strings so that garbage input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (default 1)
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,
    /// Items per page (default 10, max 100)
    #[param(value_type = Option<i64>, example = 10)]
    pub page_size: Option<String>,
}

impl PageQuery {
    pub fn params(&self) -> PaginationParams {
        PaginationParams::new(
            parse_or(self.page.as_deref(), DEFAULT_PAGE_NUMBER),
            parse_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        )
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
