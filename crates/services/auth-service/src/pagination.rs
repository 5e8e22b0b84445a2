//! Pagination policy for user listings.

use serde::Serialize;

use common::{AppError, AppResult};
use domain::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_NUMBER, MAX_PAGE_LIMIT};

/// A validated page request (1-indexed page, positive limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validate numeric page parameters.
    ///
    /// `limit` is capped at `MAX_PAGE_LIMIT` before the offset is derived.
    pub fn new(page: u64, limit: u64) -> AppResult<Self> {
        if page == 0 {
            return Err(AppError::invalid_input("page must be a positive integer"));
        }
        if limit == 0 {
            return Err(AppError::invalid_input("limit must be a positive integer"));
        }

        let limit = limit.min(MAX_PAGE_LIMIT);
        (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| AppError::invalid_input("page is out of range"))?;

        Ok(Self { page, limit })
    }

    /// Parse raw query values. Absent or blank values take the defaults.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> AppResult<Self> {
        let page = parse_positive("page", page, DEFAULT_PAGE_NUMBER)?;
        let limit = parse_positive("limit", limit, DEFAULT_PAGE_LIMIT)?;
        Self::new(page, limit)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Offset for the directory query
    pub fn offset(&self) -> u64 {
        // Overflow is ruled out in `new`
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: u64) -> AppResult<u64> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| AppError::invalid_input(format!("{} must be a positive integer", name))),
    }
}
