// ── Runtime backend configuration ──
//
// These types describe *how* to reach the admin backend. They carry
// credential data and connection tuning, but never touch disk. The CLI
// constructs a `BackendConfig` from profiles and hands it in.

use secrecy::SecretString;
use url::Url;

/// How to authenticate with the admin backend.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// API key sent as `X-API-KEY` on every request.
    ApiKey(SecretString),
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Default for hosted backends.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (staging backends with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single backend.
///
/// Built by the CLI from config profiles -- core never reads config files.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base URL (e.g. `https://admin.example.com`).
    pub url: Url,
    /// Authentication method and credentials.
    pub auth: AuthCredentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
    /// Page size used when walking paginated endpoints.
    pub page_size: usize,
}

impl BackendConfig {
    pub fn new(url: Url, auth: AuthCredentials) -> Self {
        Self {
            url,
            auth,
            tls: TlsVerification::default(),
            timeout: std::time::Duration::from_secs(30),
            page_size: 50,
        }
    }

    /// Build an [`hostly_api::AdminClient`] from this config.
    pub fn build_client(&self) -> Result<hostly_api::AdminClient, crate::error::CoreError> {
        let transport = hostly_api::TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => hostly_api::TlsMode::System,
                TlsVerification::CustomCa(path) => hostly_api::TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => hostly_api::TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        };

        let AuthCredentials::ApiKey(ref key) = self.auth;
        Ok(
            hostly_api::AdminClient::from_api_key(self.url.as_str(), key, &transport)?
                .with_page_size(self.page_size),
        )
    }
}
