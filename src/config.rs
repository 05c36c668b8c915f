//! Client configuration
//!
//! Defaults match the endpoints served by the InvoAI UI backend. The server
//! may override them through `INVOAI_*` environment variables; the browser
//! receives the result through the `load_client_config` server function.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/auth/login";
pub const DEFAULT_VENDOR_ENDPOINT: &str = "/vendor/new-vendor";
pub const DEFAULT_LOGIN_REDIRECT: &str = "/dashboard/index";
pub const DEFAULT_VENDOR_REDIRECT: &str = "/vendor/get-all-vendors";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub login_endpoint: String,
    pub vendor_endpoint: String,
    /// Target after sign-in when the server sends no `url`
    pub login_redirect: String,
    /// Target after vendor creation when the server sends no `url`
    pub vendor_redirect: String,
    /// Fallback redirect delay after the vendor success notice
    pub redirect_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_string(),
            vendor_endpoint: DEFAULT_VENDOR_ENDPOINT.to_string(),
            login_redirect: DEFAULT_LOGIN_REDIRECT.to_string(),
            vendor_redirect: DEFAULT_VENDOR_REDIRECT.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Read overrides from the process environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; blank values are ignored
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(endpoint) = value("INVOAI_LOGIN_ENDPOINT") {
            config.login_endpoint = endpoint;
        }
        if let Some(endpoint) = value("INVOAI_VENDOR_ENDPOINT") {
            config.vendor_endpoint = endpoint;
        }
        if let Some(target) = value("INVOAI_LOGIN_REDIRECT") {
            config.login_redirect = target;
        }
        if let Some(target) = value("INVOAI_VENDOR_REDIRECT") {
            config.vendor_redirect = target;
        }
        if let Some(delay) = value("INVOAI_REDIRECT_DELAY_MS") {
            config.redirect_delay_ms = delay.parse().map_err(|_| {
                AppError::Config(format!(
                    "INVOAI_REDIRECT_DELAY_MS must be a number of milliseconds, got {:?}",
                    delay
                ))
            })?;
        }

        Ok(config)
    }
}
