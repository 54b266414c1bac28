// ── Dependent resource store ──
//
// Same contract as ResourceStore, plus a parent-id slot that decides
// which gateway operation the next fetch calls. Selection and loading
// stay decoupled: changing the slot never triggers a fetch by itself.

use std::sync::Arc;

use tokio::sync::watch;

use stockdesk_api::{PaginatedPayload, QueryParams};

use super::resource::ResourceStore;
use super::state::{DependentStoreState, StoreState};
use crate::gateway::ScopedPageGateway;
use crate::model::EntityId;
use crate::normalize::FetchError;
use crate::stream::StateStream;

/// A store whose fetch target is scoped by another piece of state it
/// holds: when a parent id is selected, pages come from the
/// parent-scoped gateway operation instead of the unscoped one.
pub struct DependentResourceStore<T, G> {
    store: ResourceStore<T, G>,
    parent: Arc<watch::Sender<Option<EntityId>>>,
}

impl<T, G> Clone for DependentResourceStore<T, G> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            parent: Arc::clone(&self.parent),
        }
    }
}

impl<T, G> DependentResourceStore<T, G>
where
    T: Clone + Send + Sync + 'static,
    G: ScopedPageGateway<T>,
{
    pub fn new(gateway: G) -> Self {
        let (parent, _) = watch::channel(None);
        Self {
            store: ResourceStore::new(gateway),
            parent: Arc::new(parent),
        }
    }

    /// Fetch a page, routed by the parent slot.
    ///
    /// The slot is read exactly once, before the first suspension
    /// point, so a concurrent [`set_selected_parent_id`](Self::set_selected_parent_id)
    /// cannot change which gateway call an in-flight fetch is bound to.
    pub async fn fetch(&self, params: &QueryParams) -> Result<PaginatedPayload<T>, FetchError> {
        let parent = self.parent.borrow().clone();
        match parent {
            Some(parent_id) => {
                self.store
                    .run(self.store.gateway().fetch_page_of(&parent_id, params))
                    .await
            }
            None => self.store.run(self.store.gateway().fetch_page(params)).await,
        }
    }

    /// Select the parent that scopes subsequent fetches. Pure mutation
    /// with no auto-refetch: callers invoke [`fetch`](Self::fetch)
    /// again when they want the new scope applied.
    pub fn set_selected_parent_id(&self, id: Option<EntityId>) {
        self.parent.send_modify(|slot| *slot = id);
    }

    pub fn selected_parent_id(&self) -> Option<EntityId> {
        self.parent.borrow().clone()
    }

    /// Snapshot including the parent slot.
    pub fn dependent_state(&self) -> DependentStoreState<T> {
        DependentStoreState::compose(self.store.state(), self.selected_parent_id())
    }

    // ── Delegations to the underlying store ─────────────────────────

    pub fn set_selected_id(&self, id: Option<EntityId>) {
        self.store.set_selected_id(id);
    }

    pub fn reset_error(&self) {
        self.store.reset_error();
    }

    pub fn state(&self) -> StoreState<T> {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.store.subscribe()
    }

    pub fn stream(&self) -> StateStream<T> {
        self.store.stream()
    }

    #[cfg(test)]
    pub(crate) fn gateway(&self) -> &G {
        self.store.gateway()
    }
}
