use dioxus::prelude::*;

use crate::domain::models::{MenuEntry, MenuLink, Submenu};
use crate::shared::hooks::{SharedViewState, SIDEBAR_ID};
use crate::shared::view_state::SubmenuToggle;

#[component]
pub fn GlobalSidebar() -> Element {
    let view = use_context::<SharedViewState>();
    let (collapsed, mobile_open) = {
        let view = view.read();
        (!view.shows_expanded(), view.is_mobile_open())
    };

    let mut class = String::from("c-sidebar");
    if collapsed {
        class.push_str(" collapsed");
    }
    if mobile_open {
        class.push_str(" mobile-open");
    }

    rsx! {
        nav { id: SIDEBAR_ID, class: "{class}",
            div { class: "c-sidebar__header",
                span { class: "c-sidebar__logo", "🧾" }
                if !collapsed {
                    h2 { class: "c-sidebar__brand", "InvoAI" }
                }
            }
            ul { class: "c-sidebar__nav",
                MenuEntries { parent: None }
            }
        }
    }
}

/// Entries whose parent is `parent`; submenus recurse into their children
#[component]
fn MenuEntries(parent: Option<String>) -> Element {
    let view = use_context::<SharedViewState>();
    let entries: Vec<MenuEntry> = view
        .read()
        .menu()
        .children(parent.as_deref())
        .cloned()
        .collect();

    rsx! {
        {entries.into_iter().map(|entry| match entry {
            MenuEntry::Link(link) => rsx! {
                MenuLinkItem { key: "{link.href}", link }
            },
            MenuEntry::Submenu(submenu) => rsx! {
                SubmenuItem { key: "{submenu.id}", submenu }
            },
        })}
    }
}

#[component]
fn MenuLinkItem(link: MenuLink) -> Element {
    let view = use_context::<SharedViewState>();
    let (active, collapsed) = {
        let view = view.read();
        (view.is_link_active(&link.href), !view.shows_expanded())
    };
    let class = if active { "menu-link active" } else { "menu-link" };
    let title = if collapsed { link.label.clone() } else { String::new() };

    rsx! {
        li { class: "c-sidebar__item",
            if link.external {
                a { class: "{class}", href: "{link.href}", title: "{title}",
                    span { class: "menu-icon", "{link.icon}" }
                    span { class: "menu-text", "{link.label}" }
                }
            } else {
                Link { class: "{class}", to: link.href.clone(),
                    span { class: "menu-icon", "{link.icon}" }
                    span { class: "menu-text", "{link.label}" }
                }
            }
        }
    }
}

#[component]
fn SubmenuItem(submenu: Submenu) -> Element {
    let mut view = use_context::<SharedViewState>();
    let (open, active, collapsed) = {
        let view = view.read();
        (
            view.is_submenu_open(&submenu.id),
            view.is_menu_active(&submenu.id),
            !view.shows_expanded(),
        )
    };

    let mut class = String::from("has-submenu");
    if open {
        class.push_str(" open");
    }
    if active {
        class.push_str(" active");
    }
    let title = if collapsed { submenu.label.clone() } else { String::new() };
    let arrow = if open { "▾" } else { "▸" };
    let toggle_id = submenu.id.clone();

    rsx! {
        li { id: "{submenu.id}", class: "{class}",
            button {
                r#type: "button",
                class: "menu-link menu-link--toggle",
                title: "{title}",
                aria_expanded: "{open}",
                onclick: move |_| {
                    let mut view = view.write();
                    // Submenus cannot open while collapsed; expand the sidebar instead
                    if view.toggle_submenu(&toggle_id) == SubmenuToggle::Ignored
                        && view.is_collapsed()
                        && !view.is_narrow()
                    {
                        view.toggle_sidebar_collapse();
                    }
                },
                span { class: "menu-icon", "{submenu.icon}" }
                span { class: "menu-text", "{submenu.label}" }
                span { class: "menu-arrow", "{arrow}" }
            }
            if open {
                ul { class: "submenu",
                    MenuEntries { parent: Some(submenu.id.clone()) }
                }
            }
        }
    }
}
