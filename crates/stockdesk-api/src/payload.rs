//! Wire types for paginated responses from the content API.
//!
//! Every list endpoint returns the same envelope: a `data` array plus a
//! `meta` object describing the page. Field names are snake_case on the
//! wire and map 1:1 onto these structs.

use serde::{Deserialize, Serialize};

/// Pagination metadata reported by the API.
///
/// Echoed verbatim into the store layer's `PaginationState` — field
/// renaming only, no recomputation, so an API that reports inconsistent
/// totals propagates that inconsistency unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total_count: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

/// Generic envelope returned by all list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedPayload<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
