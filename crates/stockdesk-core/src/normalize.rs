// ── Failure normalization ──
//
// A fetch failure is delivered twice: the store records the uniform
// NormalizedError for reactive display, and the caller receives the
// original failure for imperative handling. Both views share the same
// underlying value — normalization happens exactly once per failure.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Coarse classification of a fetch failure.
///
/// Produced by [`normalize`]; the store layer records it without ever
/// branching on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Transport-level failure: connection, DNS, TLS, timeout.
    Network,
    /// Structured error reported by the API.
    Api,
    /// Authentication or session failure.
    Auth,
    /// Response body failed shape validation.
    Payload,
    /// Anything the classifier does not recognize.
    Unknown,
}

/// The original gateway failure, re-signaled to `fetch` callers.
///
/// Shares one allocation with the [`NormalizedError`] the store records,
/// so the caller-facing rejection and the store's error field can never
/// describe different failures. Downcast to recover the concrete type:
///
/// ```ignore
/// if let Some(api) = err.downcast_ref::<stockdesk_api::Error>() { ... }
/// ```
#[derive(Debug, Clone)]
pub struct FetchError(Arc<dyn StdError + Send + Sync + 'static>);

impl FetchError {
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref()
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for FetchError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Uniform failure representation recorded in a store's `error` field.
#[derive(Debug, Clone)]
pub struct NormalizedError {
    message: String,
    kind: ErrorKind,
    cause: FetchError,
}

impl NormalizedError {
    /// Human-readable message, taken from the failure's `Display`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The original failure, untouched.
    pub fn cause(&self) -> &FetchError {
        &self.cause
    }

    /// The caller-facing rejection: a cheap handle to the same failure.
    pub(crate) fn original(&self) -> FetchError {
        self.cause.clone()
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Normalize an arbitrary gateway failure into the uniform form.
///
/// Total: every failure yields a message (its `Display`) and a
/// classification, and the input is retained unchanged as the cause.
pub fn normalize<E>(failure: E) -> NormalizedError
where
    E: StdError + Send + Sync + 'static,
{
    let message = failure.to_string();
    let kind = classify(&failure);
    NormalizedError {
        message,
        kind,
        cause: FetchError(Arc::new(failure)),
    }
}

/// Map known gateway errors onto [`ErrorKind`]; everything else is
/// [`ErrorKind::Unknown`].
fn classify(failure: &(dyn StdError + 'static)) -> ErrorKind {
    use stockdesk_api::Error as ApiError;

    match failure.downcast_ref::<ApiError>() {
        Some(ApiError::Transport(_) | ApiError::Tls(_) | ApiError::InvalidUrl(_)) => {
            ErrorKind::Network
        }
        Some(ApiError::Authentication { .. } | ApiError::SessionExpired) => ErrorKind::Auth,
        Some(ApiError::InvalidPayload { .. }) => ErrorKind::Payload,
        Some(ApiError::Api { .. }) => ErrorKind::Api,
        None => ErrorKind::Unknown,
    }
}
