// ── Observable store state ──

use std::sync::Arc;

use stockdesk_api::PageMeta;

use crate::model::EntityId;
use crate::normalize::NormalizedError;

/// The ordered items a store currently holds for its resource type.
///
/// Server-assigned order, never re-ordered client-side; replaced
/// wholesale on every successful fetch. Cheap to clone.
pub type Resource<T> = Arc<[T]>;

/// Page size assumed before the first fetch reports a real one.
pub const DEFAULT_PAGE_LIMIT: u32 = 25;

/// Pagination metadata, echoed from the gateway's last report.
///
/// Every field is copied verbatim from [`PageMeta`] — `page` in
/// particular is what the API reported, not what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total_pages: 0,
        }
    }
}

impl From<&PageMeta> for PaginationState {
    /// Field renaming only, no recomputation: a gateway that reports
    /// inconsistent totals propagates that inconsistency unchanged.
    fn from(meta: &PageMeta) -> Self {
        Self {
            total: meta.total_count,
            page: meta.page,
            limit: meta.limit,
            total_pages: meta.total_pages,
        }
    }
}

/// Full observable state of a [`ResourceStore`](super::ResourceStore).
///
/// Invariants, maintained by the store's fetch bracket:
/// - `loading == true` implies `error == None` (a new fetch clears the
///   prior error before it can be observed);
/// - `error != None` implies `data` is empty (failure discards stale
///   data rather than leaving it stale-but-present).
#[derive(Debug, Clone)]
pub struct StoreState<T> {
    pub data: Resource<T>,
    pub loading: bool,
    pub error: Option<NormalizedError>,
    pub pagination: PaginationState,
    pub selected_id: Option<EntityId>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            data: Vec::new().into(),
            loading: false,
            error: None,
            pagination: PaginationState::default(),
            selected_id: None,
        }
    }
}

/// Snapshot of a [`DependentResourceStore`](super::DependentResourceStore):
/// the base store fields plus the parent slot that scopes its fetches.
#[derive(Debug, Clone)]
pub struct DependentStoreState<T> {
    pub data: Resource<T>,
    pub loading: bool,
    pub error: Option<NormalizedError>,
    pub pagination: PaginationState,
    pub selected_id: Option<EntityId>,
    pub selected_parent_id: Option<EntityId>,
}

impl<T> DependentStoreState<T> {
    pub(crate) fn compose(state: StoreState<T>, selected_parent_id: Option<EntityId>) -> Self {
        Self {
            data: state.data,
            loading: state.loading,
            error: state.error,
            pagination: state.pagination,
            selected_id: state.selected_id,
            selected_parent_id,
        }
    }
}
