//! CLI configuration; thin wrapper around `hostly_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--backend, --api-key, etc.).

use std::time::Duration;

use secrecy::SecretString;

use hostly_core::{AuthCredentials, BackendConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use hostly_config::{
    Config, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into a `BackendConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<BackendConfig, CliError> {
    // 1. Backend URL (flag > env > profile)
    let url_str = global.backend.as_deref().unwrap_or(&profile.backend);
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "backend".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    // 2. API key (CLI flag overrides take priority)
    let api_key = resolve_api_key_with_flag(profile, profile_name, global)?;

    // 3. TLS verification
    let tls = if global.insecure || profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let mut config = BackendConfig::new(url, AuthCredentials::ApiKey(api_key));
    config.tls = tls;
    config.timeout = Duration::from_secs(global.timeout);
    if let Some(page_size) = profile.page_size {
        config.page_size = page_size;
    }
    Ok(config)
}

/// Resolve API key with CLI flag override, then fall through to shared
/// resolution (env var, keyring, plaintext).
fn resolve_api_key_with_flag(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    if let Some(ref key) = global.api_key {
        return Ok(SecretString::from(key.clone()));
    }
    Ok(hostly_config::resolve_api_key(profile, profile_name)?)
}
