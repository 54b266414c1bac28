// ── Runtime connection configuration ──
//
// These types describe *how* to reach the content API. They carry
// credential data and connection tuning, but never touch disk — the
// embedding application builds an `ApiConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use stockdesk_api::{TlsMode, TransportConfig};

/// Username/password pair for session login.
#[derive(Debug, Clone)]
pub struct AuthCredentials {
    pub username: String,
    pub password: SecretString,
}

impl AuthCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// TLS verification strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TlsVerification {
    /// System CA store (strict). Default for hosted APIs.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (staging with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for connecting to one content API instance.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL (e.g. `https://api.example.com`).
    pub url: Url,
    /// Session login credentials.
    pub auth: AuthCredentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(url: Url, auth: AuthCredentials) -> Self {
        Self {
            url,
            auth,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Map onto the api crate's transport config. Always carries a
    /// cookie jar — session auth does not work without one.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };

        TransportConfig {
            tls,
            timeout: self.timeout,
            cookie_jar: None,
        }
        .with_cookie_jar()
    }
}
