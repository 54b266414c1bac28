// stockdesk-api: Async Rust client for the Stockdesk headless content API

pub mod client;
pub mod error;
pub mod payload;
pub mod query;
pub mod transport;
pub mod validate;

pub use client::ContentClient;
pub use error::Error;
pub use payload::{PageMeta, PaginatedPayload};
pub use query::QueryParams;
pub use transport::{TlsMode, TransportConfig};
pub use validate::{FieldError, Validated};
