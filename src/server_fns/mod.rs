//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::config::ClientConfig;

/// Client configuration resolved from the server environment
#[server]
pub async fn load_client_config() -> Result<ClientConfig, ServerFnError> {
    let config = ClientConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::debug!(
        login_endpoint = %config.login_endpoint,
        vendor_endpoint = %config.vendor_endpoint,
        "Serving client configuration"
    );
    Ok(config)
}
