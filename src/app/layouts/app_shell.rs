use dioxus::prelude::*;

use crate::app::layouts::{GlobalSidebar, Navbar};
use crate::app::pages::console_routes::Route;
use crate::shared::hooks::{use_view_state, MOBILE_OVERLAY_ID};

/// Layout for every signed-in page: sidebar, navbar and the routed content
#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();
    let mut view = use_view_state(route.to_string());
    use_context_provider(|| view);

    let (collapsed, mobile_open) = {
        let view = view.read();
        (view.is_collapsed(), view.is_mobile_open())
    };
    let shell_class = if collapsed { "c-shell c-shell--collapsed" } else { "c-shell" };
    let overlay_class = if mobile_open { "c-overlay active" } else { "c-overlay" };

    rsx! {
        div { class: "{shell_class}",
            GlobalSidebar {}
            div {
                id: MOBILE_OVERLAY_ID,
                class: "{overlay_class}",
                onclick: move |_| view.write().dismiss_mobile_overlay(),
            }
            div { class: "c-shell__main",
                Navbar {}
                main { class: "c-shell__content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
