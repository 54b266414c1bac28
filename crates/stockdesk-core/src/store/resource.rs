// ── Generic paginated resource store ──
//
// One instance per resource type. Holds its observable state in a
// `watch` channel; `fetch()` brackets the gateway call with the
// loading/error transitions and replaces data wholesale on success.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use stockdesk_api::{PaginatedPayload, QueryParams};

use super::state::{PaginationState, StoreState};
use crate::gateway::PageGateway;
use crate::model::EntityId;
use crate::normalize::{FetchError, normalize};
use crate::stream::StateStream;

/// The generic paginated store.
///
/// Cheaply cloneable: clones share the same state and gateway. Created
/// once per resource type and handed to whoever renders or mutates that
/// resource — there are no module-level store singletons.
pub struct ResourceStore<T, G> {
    inner: Arc<StoreInner<T, G>>,
}

struct StoreInner<T, G> {
    gateway: G,
    state: watch::Sender<StoreState<T>>,
}

impl<T, G> Clone for ResourceStore<T, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, G> ResourceStore<T, G>
where
    T: Clone + Send + Sync + 'static,
    G: PageGateway<T>,
{
    /// Create a store over a gateway, starting empty on page 1.
    pub fn new(gateway: G) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            inner: Arc::new(StoreInner { gateway, state }),
        }
    }

    /// Fetch a page and replace the store's contents with it.
    ///
    /// Returns the gateway's raw successful payload so call sites can
    /// read it immediately without waiting for a re-render. On failure
    /// the store records the normalized error and the *original*
    /// failure is re-signaled here — callers wanting the normalized
    /// message read the store's error field, not the rejection.
    pub async fn fetch(&self, params: &QueryParams) -> Result<PaginatedPayload<T>, FetchError> {
        self.run(self.inner.gateway.fetch_page(params)).await
    }

    /// Shared fetch bracket for the plain and dependent fetch paths.
    ///
    /// In-flight fetches are never cancelled and always apply their
    /// write; concurrent fetches race and the last one to *complete*
    /// wins the final state.
    pub(crate) async fn run<F>(&self, call: F) -> Result<PaginatedPayload<T>, FetchError>
    where
        F: Future<Output = Result<PaginatedPayload<T>, G::Error>>,
    {
        self.inner.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        match call.await {
            Ok(payload) => {
                debug!(
                    items = payload.data.len(),
                    total = payload.meta.total_count,
                    "page applied"
                );
                self.inner.state.send_modify(|s| {
                    s.data = payload.data.clone().into();
                    s.pagination = PaginationState::from(&payload.meta);
                    s.loading = false;
                    s.error = None;
                });
                Ok(payload)
            }
            Err(failure) => {
                let error = normalize(failure);
                warn!(kind = %error.kind(), "page fetch failed: {}", error.message());
                let original = error.original();
                self.inner.state.send_modify(|s| {
                    s.data = Vec::new().into();
                    s.loading = false;
                    s.error = Some(error);
                });
                Err(original)
            }
        }
    }

    /// Select an id. Pure mutation: no side effects and no check that
    /// the id refers to a held item.
    pub fn set_selected_id(&self, id: Option<EntityId>) {
        self.inner.state.send_modify(|s| s.selected_id = id);
    }

    /// Dismiss the recorded error without refetching. Touches nothing
    /// but the error field.
    pub fn reset_error(&self) {
        self.inner.state.send_modify(|s| s.error = None);
    }

    /// Point-in-time snapshot of the store's state.
    pub fn state(&self) -> StoreState<T> {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.inner.state.subscribe()
    }

    /// Subscription handle with snapshot access and a `Stream` adapter.
    pub fn stream(&self) -> StateStream<T> {
        StateStream::new(self.subscribe())
    }

    pub(crate) fn gateway(&self) -> &G {
        &self.inner.gateway
    }
}
