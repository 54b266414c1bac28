// ── Composition root ──

use std::sync::Arc;

use stockdesk_api::{ContentClient, Error};

use crate::auth::AuthSession;
use crate::config::ApiConfig;
use crate::model::{Category, Product, SnapshotEvent, StockSnapshot, Supplier, User, Warehouse};
use crate::remote::{RemoteCollection, ScopedRemoteCollection, SessionGateway};
use crate::store::{DependentResourceStore, ResourceStore};

/// Every store of the admin, constructed over one shared client.
///
/// Explicit dependency passing instead of module-level singletons:
/// whoever needs stores receives a context (or a clone — clones share
/// state), and tests build fresh, isolated contexts per case.
#[derive(Clone)]
pub struct AdminContext {
    pub products: ResourceStore<Product, RemoteCollection>,
    pub categories: ResourceStore<Category, RemoteCollection>,
    pub suppliers: ResourceStore<Supplier, RemoteCollection>,
    pub warehouses: ResourceStore<Warehouse, RemoteCollection>,
    pub users: ResourceStore<User, RemoteCollection>,
    pub snapshot_events: ResourceStore<SnapshotEvent, RemoteCollection>,
    /// Scoped by the snapshot event selected on its parent slot.
    pub stock_snapshots: DependentResourceStore<StockSnapshot, ScopedRemoteCollection>,
    pub session: AuthSession<SessionGateway>,
}

impl AdminContext {
    /// Build the HTTP client from config and wire up every store.
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let client = Arc::new(ContentClient::new(
            config.url.as_str(),
            &config.transport(),
        )?);
        Ok(Self::with_client(client))
    }

    /// Wire up every store over an existing client (tests, custom
    /// transports).
    pub fn with_client(client: Arc<ContentClient>) -> Self {
        Self {
            products: ResourceStore::new(RemoteCollection::new(Arc::clone(&client), "products")),
            categories: ResourceStore::new(RemoteCollection::new(
                Arc::clone(&client),
                "categories",
            )),
            suppliers: ResourceStore::new(RemoteCollection::new(Arc::clone(&client), "suppliers")),
            warehouses: ResourceStore::new(RemoteCollection::new(
                Arc::clone(&client),
                "warehouses",
            )),
            users: ResourceStore::new(RemoteCollection::new(Arc::clone(&client), "users")),
            snapshot_events: ResourceStore::new(RemoteCollection::new(
                Arc::clone(&client),
                "snapshot-events",
            )),
            stock_snapshots: DependentResourceStore::new(ScopedRemoteCollection::new(
                Arc::clone(&client),
                "snapshot-events",
                "stock-snapshots",
            )),
            session: AuthSession::new(SessionGateway::new(client)),
        }
    }
}
