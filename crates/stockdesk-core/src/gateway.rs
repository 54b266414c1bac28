// ── Gateway ports ──
//
// The capabilities a store consumes, kept abstract so tests drive
// stores with scripted gateways and production code binds them to
// `ContentClient` through the adapters in `remote`.

use std::future::Future;

use stockdesk_api::{PaginatedPayload, QueryParams};

use crate::config::AuthCredentials;
use crate::model::EntityId;

/// Capability to fetch one page of a remote collection.
pub trait PageGateway<T>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch a page. `params` pass through unmodified; the gateway owns
    /// their wire encoding.
    fn fetch_page(
        &self,
        params: &QueryParams,
    ) -> impl Future<Output = Result<PaginatedPayload<T>, Self::Error>> + Send;
}

/// Page fetch scoped to a parent entity, for dependent stores.
pub trait ScopedPageGateway<T>: PageGateway<T> {
    fn fetch_page_of(
        &self,
        parent_id: &EntityId,
        params: &QueryParams,
    ) -> impl Future<Output = Result<PaginatedPayload<T>, Self::Error>> + Send;
}

/// Session operations consumed by the auth layer.
pub trait AuthGateway: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Establish a session. Success means subsequent current-user
    /// fetches will return the logged-in user.
    fn login(
        &self,
        credentials: &AuthCredentials,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// End the session. Success means subsequent current-user fetches
    /// will return an empty page.
    fn logout(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
