//! Pagination query parameters.

use serde::Deserialize;

/// Raw `page` / `limit` query parameters.
///
/// Values are kept as strings: anything unparsable is normalized later by
/// [`crate::domain::pagination::PaginationWindow`] instead of failing
/// extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub limit: Option<String>,
}
