//! InvoAI Console - Main Entry Point
//!
//! Serves the console UI and its server functions. Uses dioxus::serve() for
//! dx serve compatibility.

use invoai_console::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use invoai_console::config::ClientConfig;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting InvoAI Console...");

    match ClientConfig::from_env() {
        Ok(config) => tracing::info!(
            login_endpoint = %config.login_endpoint,
            vendor_endpoint = %config.vendor_endpoint,
            redirect_delay_ms = config.redirect_delay_ms,
            "Client configuration loaded"
        ),
        Err(e) => tracing::error!(
            "Invalid client configuration: {}. Browsers will fall back to defaults.",
            e
        ),
    }

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] InvoAI Console initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
