// ── List query parameters ──
//
// Everything a list endpoint accepts: paging, filtering, search, sort,
// and sparse fieldsets. Stores pass this through untouched; only the
// HTTP client serializes it, so the wire encoding lives here.

use std::collections::BTreeMap;

/// Query parameters for paginated list endpoints.
///
/// Opaque to the store layer: built by callers, forwarded verbatim to
/// the gateway, serialized to query pairs only at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Item offset (alternative to `page`).
    pub offset: Option<u64>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Field filters, serialized as `filter[key]=value`.
    pub filter: BTreeMap<String, String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Sort fields, in order; prefix with `-` for descending.
    pub sort: Vec<String>,
    /// Sparse fieldset: only return these fields.
    pub fields: Vec<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Append a sort field. Call repeatedly for multi-field sorts.
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort.push(field.into());
        self
    }

    /// Append a field to the sparse fieldset.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Serialize to query pairs in the wire encoding the content API
    /// expects: `filter[k]=v` per filter entry, `sort` and `fields`
    /// comma-joined.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(offset) = self.offset {
            pairs.push(("offset".to_owned(), offset.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        for (key, value) in &self.filter {
            pairs.push((format!("filter[{key}]"), value.clone()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search".to_owned(), search.clone()));
        }
        if !self.sort.is_empty() {
            pairs.push(("sort".to_owned(), self.sort.join(",")));
        }
        if !self.fields.is_empty() {
            pairs.push(("fields".to_owned(), self.fields.join(",")));
        }

        pairs
    }
}
