//! Normalization of raw page/limit inputs into a query window.

/// Page used when the raw input is missing or invalid.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the raw input is missing or invalid.
pub const DEFAULT_LIMIT: i64 = 10;

/// A contiguous slice of the ordered user collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PaginationWindow {
    /// Builds a window from raw query-string values.
    ///
    /// Invalid input is never rejected: a `page` or `limit` that is missing,
    /// non-numeric or below 1 falls back to [`DEFAULT_PAGE`] /
    /// [`DEFAULT_LIMIT`]. `limit` has no upper bound.
    pub fn normalize(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit).unwrap_or(DEFAULT_LIMIT);

        Self {
            page,
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
}
