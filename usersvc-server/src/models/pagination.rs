//! Page/limit parsing for list requests

use serde::Deserialize;

use super::ValidationError;

/// Maximum items per page
pub const MAX_LIMIT: u32 = 100;

/// Default items per page
pub const DEFAULT_LIMIT: u32 = 10;

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub limit: u32,
}

impl Pagination {
    /// Create pagination with clamping.
    ///
    /// - Page is clamped to minimum of 1
    /// - Limit is clamped to 1..=100
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Resolve raw query values.
    ///
    /// Only the leading integer of each value is read, so `5.5` is 5 and
    /// `2abc` is 2. Absent values, values with no leading digits, and zero
    /// fall back to the defaults (page 1, limit 10). Negative or
    /// out-of-range numbers are rejected.
    pub fn parse(params: &PaginationParams) -> Result<Self, ValidationError> {
        let page = resolve(params.page.as_deref(), "page", 1)?;
        let limit = resolve(params.limit.as_deref(), "limit", DEFAULT_LIMIT)?;
        Ok(Self::new(page, limit))
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn resolve(raw: Option<&str>, field: &'static str, default: u32) -> Result<u32, ValidationError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return Ok(default);
    }

    let digits = rest[..end].trim_start_matches('0');
    if digits.is_empty() {
        return Ok(default);
    }
    if negative {
        return Err(ValidationError::NotPositiveInteger { field });
    }
    digits
        .parse::<u32>()
        .map_err(|_| ValidationError::NotPositiveInteger { field })
}

/// Query parameters for pagination.
///
/// Kept as strings so that non-numeric input defaults instead of
/// failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn new(page: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            limit: Some(limit.into()),
        }
    }
}
