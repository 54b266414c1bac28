// Hand-crafted async HTTP client for the Stockdesk content API (v1).
//
// Base path: /v1/
// Auth: cookie-based session (POST /v1/auth/login sets the cookie).

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::payload::PaginatedPayload;
use crate::query::QueryParams;
use crate::transport::TransportConfig;
use crate::validate::{self, FieldError, Validated};

// ── Error response shape from the content API ────────────────────────

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Stockdesk content API.
///
/// Communicates via JSON REST endpoints under `/v1/`. List endpoints
/// return the paginated envelope, which is shape-checked by
/// [`validate::paginated`] before being handed out. Session auth uses
/// the cookie jar configured on the transport, so [`login`](Self::login)
/// must be called on a client built with
/// [`TransportConfig::with_cookie_jar`].
pub struct ContentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ContentClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages cookies/TLS).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Parse and normalize the base URL so relative joins work:
    /// the path always ends with exactly one `/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Join a relative path (e.g. `"v1/products"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get_json(&self, path: &str, pairs: &[(String, String)]) -> Result<Value, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={pairs:?}");

        let resp = self.http.get(url).query(pairs).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(status, resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::InvalidPayload {
            errors: vec![FieldError::new("$", format!("invalid JSON: {e}"))],
        })
    }

    /// Turn a non-2xx response into a structured error, parsing the
    /// `{"error": {message, code}}` envelope when present.
    async fn api_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::SessionExpired;
        }

        let body = resp.text().await.unwrap_or_default();
        let parsed: Option<ErrorBody> = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .and_then(|e| e.error);

        let (message, code) = match parsed {
            Some(e) => (
                e.message.unwrap_or_else(|| format!("HTTP {status}")),
                e.code,
            ),
            None => (format!("HTTP {status}: {body}"), None),
        };

        Error::Api {
            message,
            code,
            status: status.as_u16(),
        }
    }

    // ── Paginated reads ──────────────────────────────────────────────

    /// Fetch one page of a collection: `GET /v1/{collection}`.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        collection: &str,
        params: &QueryParams,
    ) -> Result<PaginatedPayload<T>, Error> {
        let body = self
            .get_json(&format!("v1/{collection}"), &params.to_pairs())
            .await?;

        match validate::paginated(&body) {
            Validated::Valid(page) => Ok(page),
            Validated::Invalid(errors) => Err(Error::InvalidPayload { errors }),
        }
    }

    /// Fetch one page of a child collection scoped to a parent entity:
    /// `GET /v1/{parent}/{parent_id}/{child}`.
    pub async fn get_by_parent<T: DeserializeOwned>(
        &self,
        parent: &str,
        parent_id: &str,
        child: &str,
        params: &QueryParams,
    ) -> Result<PaginatedPayload<T>, Error> {
        let body = self
            .get_json(
                &format!("v1/{parent}/{parent_id}/{child}"),
                &params.to_pairs(),
            )
            .await?;

        match validate::paginated(&body) {
            Validated::Valid(page) => Ok(page),
            Validated::Invalid(errors) => Err(Error::InvalidPayload { errors }),
        }
    }

    // ── Session auth ─────────────────────────────────────────────────

    /// Authenticate with username/password: `POST /v1/auth/login`.
    ///
    /// On success the session cookie lands in the client's cookie jar
    /// and rides along on all subsequent requests.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.url("v1/auth/login")?;
        debug!("logging in at {url}");

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let resp = self.http.post(url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        debug!("login successful");
        Ok(())
    }

    /// End the current session: `POST /v1/auth/logout`.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.url("v1/auth/logout")?;
        debug!("logging out at {url}");

        let resp = self.http.post(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(status, resp).await);
        }

        debug!("logout complete");
        Ok(())
    }

    /// Fetch the current-user page: `GET /v1/auth/me`.
    ///
    /// Returns the same paginated envelope as every list endpoint,
    /// holding zero or one user depending on whether a session is
    /// active.
    pub async fn current_user_page<T: DeserializeOwned>(
        &self,
        params: &QueryParams,
    ) -> Result<PaginatedPayload<T>, Error> {
        self.get_paginated("auth/me", params).await
    }
}
