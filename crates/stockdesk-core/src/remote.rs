// ── ContentClient adapters ──
//
// Bind the HTTP client to the gateway ports. One adapter type serves
// every resource: the collection path is data, not code, which is what
// collapses the old per-entity store duplication into the generic
// store plus these few lines.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use stockdesk_api::{ContentClient, Error, PaginatedPayload, QueryParams};

use crate::config::AuthCredentials;
use crate::gateway::{AuthGateway, PageGateway, ScopedPageGateway};
use crate::model::{EntityId, User};

/// Pages through `GET /v1/{collection}`.
#[derive(Clone)]
pub struct RemoteCollection {
    client: Arc<ContentClient>,
    collection: String,
}

impl RemoteCollection {
    pub fn new(client: Arc<ContentClient>, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
        }
    }
}

impl<T> PageGateway<T> for RemoteCollection
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Error = Error;

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedPayload<T>, Error> {
        self.client.get_paginated(&self.collection, params).await
    }
}

/// Pages through `GET /v1/{child}`, or `GET /v1/{parent}/{id}/{child}`
/// when a parent id is supplied.
#[derive(Clone)]
pub struct ScopedRemoteCollection {
    client: Arc<ContentClient>,
    parent: String,
    child: String,
}

impl ScopedRemoteCollection {
    pub fn new(
        client: Arc<ContentClient>,
        parent: impl Into<String>,
        child: impl Into<String>,
    ) -> Self {
        Self {
            client,
            parent: parent.into(),
            child: child.into(),
        }
    }
}

impl<T> PageGateway<T> for ScopedRemoteCollection
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Error = Error;

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedPayload<T>, Error> {
        self.client.get_paginated(&self.child, params).await
    }
}

impl<T> ScopedPageGateway<T> for ScopedRemoteCollection
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch_page_of(
        &self,
        parent_id: &EntityId,
        params: &QueryParams,
    ) -> Result<PaginatedPayload<T>, Error> {
        self.client
            .get_by_parent(&self.parent, &parent_id.to_string(), &self.child, params)
            .await
    }
}

/// Session auth plus the current-user page (`GET /v1/auth/me`).
#[derive(Clone)]
pub struct SessionGateway {
    client: Arc<ContentClient>,
}

impl SessionGateway {
    pub fn new(client: Arc<ContentClient>) -> Self {
        Self { client }
    }
}

impl PageGateway<User> for SessionGateway {
    type Error = Error;

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedPayload<User>, Error> {
        self.client.current_user_page(params).await
    }
}

impl AuthGateway for SessionGateway {
    type Error = Error;

    async fn login(&self, credentials: &AuthCredentials) -> Result<(), Error> {
        self.client
            .login(&credentials.username, &credentials.password)
            .await
    }

    async fn logout(&self) -> Result<(), Error> {
        self.client.logout().await
    }
}
