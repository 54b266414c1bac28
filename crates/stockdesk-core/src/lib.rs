//! Reactive store layer between `stockdesk-api` and UI consumers.
//!
//! This crate owns the client-side state of the Stockdesk admin: one
//! store per resource type, each tracking list data, loading flag,
//! normalized error, pagination, and selection — plus the session
//! status derived from the current-user store.
//!
//! - **[`ResourceStore`]** — The generic paginated store. One
//!   instance per entity type over a [`PageGateway`]; `fetch()` brackets
//!   the gateway call with loading/error state and replaces data
//!   wholesale on success.
//!
//! - **[`DependentResourceStore`]** — Specialization carrying a
//!   parent-id slot. When the slot is set, `fetch()` calls the
//!   parent-scoped gateway operation instead of the unscoped one
//!   (stock snapshots filtered by a chosen snapshot event).
//!
//! - **[`AuthSession`]** — Read-side projection over the current-user
//!   store producing an [`AuthStatus`], with failure-contained
//!   `authenticate` / `login` / `logout` wrappers.
//!
//! - **[`AdminContext`]** — Explicit composition root: builds every
//!   store over one shared [`ContentClient`](stockdesk_api::ContentClient).
//!   No module-level globals; tests construct their own isolated
//!   contexts and stores.
//!
//! - **Domain model** ([`model`]) — The admin's resource types
//!   (`Product`, `Category`, `StockSnapshot`, etc.) keyed by
//!   [`EntityId`].

pub mod auth;
pub mod config;
pub mod context;
pub mod gateway;
pub mod model;
pub mod normalize;
pub mod remote;
pub mod store;
pub mod stream;

#[cfg(test)]
pub(crate) mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use auth::{AuthSession, AuthStatus};
pub use config::{ApiConfig, AuthCredentials, TlsVerification};
pub use context::AdminContext;
pub use gateway::{AuthGateway, PageGateway, ScopedPageGateway};
pub use normalize::{ErrorKind, FetchError, NormalizedError, normalize};
pub use store::{
    DependentResourceStore, DependentStoreState, PaginationState, Resource, ResourceStore,
    StoreState,
};
pub use stream::StateStream;

// Re-export the wire types that appear in store signatures.
pub use stockdesk_api::{PageMeta, PaginatedPayload, QueryParams};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Category, EntityId, Product, SnapshotEvent, StockSnapshot, Supplier, User, UserRole, Warehouse,
};
