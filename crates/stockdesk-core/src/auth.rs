// ── Session status derivation ──
//
// A read-side projection over the current-user store. The status is
// recomputed from the store on every read — never cached — so it
// cannot desynchronize from the data that backs it. The operation
// wrappers contain all failures: callers get booleans and Options,
// never an Err.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use stockdesk_api::QueryParams;

use crate::config::AuthCredentials;
use crate::gateway::{AuthGateway, PageGateway};
use crate::model::User;
use crate::store::ResourceStore;

/// Session status, derived from the current-user store.
///
/// `NotYetChecked` and `Unknown` are distinct on purpose: the first
/// means no auth check has ever completed, the second means one is in
/// flight right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum AuthStatus {
    /// No auth check has been attempted yet.
    NotYetChecked,
    /// A check is in flight.
    Unknown,
    /// The current-user store holds a user.
    Authenticated,
    /// The last completed check found no session.
    Guest,
}

/// The current-user store plus failure-contained session operations.
///
/// Holds at most one element (the logged-in user). All data flows
/// through the store's fetch path — login and logout refresh the store
/// rather than writing user data into it directly.
pub struct AuthSession<G> {
    store: ResourceStore<User, G>,
    /// Flips to `true` when the first check completes (either way);
    /// distinguishes `NotYetChecked` from `Guest`.
    checked: Arc<watch::Sender<bool>>,
}

impl<G> Clone for AuthSession<G> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            checked: Arc::clone(&self.checked),
        }
    }
}

impl<G> AuthSession<G>
where
    G: PageGateway<User> + AuthGateway,
{
    pub fn new(gateway: G) -> Self {
        let (checked, _) = watch::channel(false);
        Self {
            store: ResourceStore::new(gateway),
            checked: Arc::new(checked),
        }
    }

    /// Derive the current status.
    ///
    /// Total over the store's `(data, loading)` pair and the checked
    /// flag. A present user wins regardless of `loading`, so a
    /// background re-check never flickers an authenticated UI.
    pub fn status(&self) -> AuthStatus {
        let state = self.store.state();
        if !state.data.is_empty() {
            AuthStatus::Authenticated
        } else if state.loading {
            AuthStatus::Unknown
        } else if *self.checked.borrow() {
            AuthStatus::Guest
        } else {
            AuthStatus::NotYetChecked
        }
    }

    /// The logged-in user, if the store holds one.
    pub fn current_user(&self) -> Option<User> {
        self.store.state().data.first().cloned()
    }

    /// Refresh the current-user store and return the user, if any.
    ///
    /// Failures are contained: an auth check must never crash a caller
    /// that only wants to know the status. The store still records the
    /// normalized error for display.
    pub async fn authenticate(&self) -> Option<User> {
        let result = self.store.fetch(&QueryParams::new()).await;
        self.checked.send_modify(|c| *c = true);
        match result {
            Ok(page) => page.data.into_iter().next(),
            Err(error) => {
                warn!(%error, "auth check failed (contained)");
                None
            }
        }
    }

    /// Establish a session. Returns whether the login call succeeded;
    /// on success the current-user store is refreshed in place.
    pub async fn login(&self, credentials: &AuthCredentials) -> bool {
        match self.store.gateway().login(credentials).await {
            Ok(()) => {
                let _ = self.authenticate().await;
                true
            }
            Err(error) => {
                warn!(%error, "login failed (contained)");
                false
            }
        }
    }

    /// End the session. Returns whether the logout call succeeded; on
    /// success the refreshed current-user page comes back empty and
    /// the status derives to [`AuthStatus::Guest`].
    pub async fn logout(&self) -> bool {
        match self.store.gateway().logout().await {
            Ok(()) => {
                let _ = self.authenticate().await;
                true
            }
            Err(error) => {
                warn!(%error, "logout failed (contained)");
                false
            }
        }
    }

    /// The underlying current-user store, for reactive UI bindings.
    pub fn store(&self) -> &ResourceStore<User, G> {
        &self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use stockdesk_api::Error as ApiError;

    use super::*;
    use crate::testing::{ScriptedSession, meta, until, user};

    fn session() -> AuthSession<ScriptedSession> {
        AuthSession::new(ScriptedSession::new())
    }

    fn gateway(session: &AuthSession<ScriptedSession>) -> &ScriptedSession {
        session.store().gateway()
    }

    #[tokio::test]
    async fn initial_status_is_not_yet_checked() {
        let session = session();
        assert_eq!(session.status(), AuthStatus::NotYetChecked);
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn empty_check_derives_guest() {
        let session = session();
        gateway(&session)
            .pages
            .push_page(Vec::new(), meta(0, 1, 1, 0));

        assert!(session.authenticate().await.is_none());
        assert_eq!(session.status(), AuthStatus::Guest);
    }

    #[tokio::test]
    async fn present_user_derives_authenticated() {
        let session = session();
        gateway(&session)
            .pages
            .push_page(vec![user(1, "admin@example.com")], meta(1, 1, 1, 1));

        let found = session.authenticate().await.unwrap();
        assert_eq!(found.email, "admin@example.com");
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert_eq!(session.current_user().unwrap().email, "admin@example.com");
    }

    #[tokio::test]
    async fn inflight_check_derives_unknown() {
        let session = session();
        let release = gateway(&session)
            .pages
            .push_gated_page(Vec::new(), meta(0, 1, 1, 0));

        let task = tokio::spawn({
            let session = session.clone();
            async move { session.authenticate().await }
        });
        until(|| session.store().state().loading).await;

        assert_eq!(session.status(), AuthStatus::Unknown);

        release.send(()).unwrap();
        task.await.unwrap();
        assert_eq!(session.status(), AuthStatus::Guest);
    }

    #[tokio::test]
    async fn authenticated_wins_over_loading() {
        let session = session();
        gateway(&session)
            .pages
            .push_page(vec![user(1, "admin@example.com")], meta(1, 1, 1, 1));
        session.authenticate().await;

        // A background re-check must not flicker the status.
        let release = gateway(&session)
            .pages
            .push_gated_page(vec![user(1, "admin@example.com")], meta(1, 1, 1, 1));
        let task = tokio::spawn({
            let session = session.clone();
            async move { session.authenticate().await }
        });
        until(|| session.store().state().loading).await;

        assert_eq!(session.status(), AuthStatus::Authenticated);

        release.send(()).unwrap();
        task.await.unwrap();
        assert_eq!(session.status(), AuthStatus::Authenticated);
    }

    #[tokio::test]
    async fn failed_check_is_contained_and_derives_guest() {
        let session = session();
        gateway(&session).pages.push_failure(ApiError::Api {
            message: "auth service down".into(),
            code: None,
            status: 503,
        });

        // No Err, no panic — just an empty result.
        assert!(session.authenticate().await.is_none());
        assert_eq!(session.status(), AuthStatus::Guest);
        // The store still recorded the failure for display.
        assert!(session.store().state().error.is_some());
    }

    #[tokio::test]
    async fn login_success_authenticates() {
        let session = session();
        gateway(&session).push_login(Ok(()));
        gateway(&session)
            .pages
            .push_page(vec![user(1, "admin@example.com")], meta(1, 1, 1, 1));

        let credentials = AuthCredentials::new("admin", "secret");
        assert!(session.login(&credentials).await);
        assert_eq!(session.status(), AuthStatus::Authenticated);
    }

    #[tokio::test]
    async fn login_failure_is_contained() {
        let session = session();
        gateway(&session).push_login(Err(ApiError::Authentication {
            message: "bad password".into(),
        }));

        let credentials = AuthCredentials::new("admin", "wrong");
        assert!(!session.login(&credentials).await);
        // No check ran, so the status is still pristine.
        assert_eq!(session.status(), AuthStatus::NotYetChecked);
    }

    #[tokio::test]
    async fn logout_success_derives_guest() {
        let session = session();
        gateway(&session).push_login(Ok(()));
        gateway(&session)
            .pages
            .push_page(vec![user(1, "admin@example.com")], meta(1, 1, 1, 1));
        session.login(&AuthCredentials::new("admin", "secret")).await;

        gateway(&session).push_logout(Ok(()));
        gateway(&session)
            .pages
            .push_page(Vec::new(), meta(0, 1, 1, 0));

        assert!(session.logout().await);
        assert_eq!(session.status(), AuthStatus::Guest);
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn logout_failure_keeps_the_session() {
        let session = session();
        gateway(&session).push_login(Ok(()));
        gateway(&session)
            .pages
            .push_page(vec![user(1, "admin@example.com")], meta(1, 1, 1, 1));
        session.login(&AuthCredentials::new("admin", "secret")).await;

        gateway(&session).push_logout(Err(ApiError::Api {
            message: "gateway timeout".into(),
            code: None,
            status: 504,
        }));

        assert!(!session.logout().await);
        assert_eq!(session.status(), AuthStatus::Authenticated);
    }

    #[tokio::test]
    async fn login_survives_a_failed_refresh() {
        let session = session();
        gateway(&session).push_login(Ok(()));
        gateway(&session).pages.push_failure(ApiError::SessionExpired);

        // The login call itself succeeded; the contained refresh
        // failure leaves the store empty, so the status reads Guest.
        assert!(session.login(&AuthCredentials::new("admin", "secret")).await);
        assert_eq!(session.status(), AuthStatus::Guest);
    }

    #[test]
    fn status_displays_variant_names() {
        assert_eq!(AuthStatus::NotYetChecked.to_string(), "NotYetChecked");
        assert_eq!(AuthStatus::Guest.to_string(), "Guest");
    }
}
