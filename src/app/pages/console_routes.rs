use dioxus::prelude::*;

use crate::app::layouts::AppShell;
use crate::app::pages::{Dashboard, Login, NewVendor, Section};
use crate::config::ClientConfig;
use crate::server_fns::load_client_config;
use crate::shared::logging;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/auth/login")]
    Login {},

    #[layout(AppShell)]
    #[route("/dashboard/index")]
    Dashboard {},
    #[route("/vendor/new-vendor")]
    NewVendor {},

    // Sections rendered by the backend or not built yet
    #[route("/:..segments")]
    Section { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let mut config = use_context_provider(|| Signal::new(ClientConfig::default()));

    // Defaults stay in place if the server cannot be reached
    use_effect(move || {
        spawn(async move {
            match load_client_config().await {
                Ok(loaded) => config.set(loaded),
                Err(e) => logging::log_config_fallback(&e.to_string()),
            }
        });
    });

    rsx! {
        Router::<Route> {}
    }
}
