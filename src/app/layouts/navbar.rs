use dioxus::prelude::*;

use crate::shared::hooks::{SharedViewState, USER_INFO_TOGGLE_ID, USER_MENU_ID};

pub const LOGOUT_HREF: &str = "/auth/logout";

#[component]
pub fn Navbar() -> Element {
    let mut view = use_context::<SharedViewState>();
    let (collapsed, narrow, user_menu_open) = {
        let view = view.read();
        (view.is_collapsed(), view.is_narrow(), view.is_user_menu_open())
    };

    let toggle_label = if collapsed { "Expand sidebar" } else { "Collapse sidebar" };
    let toggle_icon = if collapsed { "☰" } else { "⟨" };
    let user_menu_class = if user_menu_open { "c-user-menu show" } else { "c-user-menu" };

    rsx! {
        header { class: "c-navbar",
            div { class: "c-navbar__start",
                if narrow {
                    button {
                        r#type: "button",
                        class: "c-navbar__mobile-toggle",
                        aria_label: "Open navigation",
                        onclick: move |_| view.write().open_mobile_sidebar(),
                        "☰"
                    }
                } else {
                    button {
                        id: "toggleSidebar",
                        r#type: "button",
                        class: "c-navbar__toggle",
                        aria_label: "{toggle_label}",
                        onclick: move |_| {
                            view.write().toggle_sidebar_collapse();
                        },
                        "{toggle_icon}"
                    }
                }
                span { class: "c-navbar__title", "InvoAI Console" }
            }
            div { class: "c-navbar__user",
                button {
                    id: USER_INFO_TOGGLE_ID,
                    r#type: "button",
                    class: "c-user-info",
                    aria_haspopup: "menu",
                    aria_expanded: "{user_menu_open}",
                    onclick: move |_| view.write().toggle_user_menu(),
                    span { class: "c-user-info__avatar", "👤" }
                    span { class: "c-user-info__name", "Account" }
                }
                div { id: USER_MENU_ID, class: "{user_menu_class}", role: "menu",
                    a { class: "c-user-menu__item", href: "/users/profile", "Profile" }
                    a { class: "c-user-menu__item", href: LOGOUT_HREF, "Sign out" }
                }
            }
        }
    }
}
