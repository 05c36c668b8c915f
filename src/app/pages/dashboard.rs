use dioxus::prelude::*;

use crate::app::components::EmptyState;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "c-page c-dashboard fade-in visible",
            h1 { class: "c-page__title", "Dashboard" }
            p { class: "c-page__subtitle", "Invoice extraction at a glance" }
            div { class: "c-dashboard__cards",
                div { class: "c-card",
                    h3 { "🏢 Vendors" }
                    p { "Register the suppliers whose invoices you process." }
                    Link { class: "c-button c-button--primary", to: "/vendor/new-vendor", "New vendor" }
                }
                div { class: "c-card",
                    h3 { "🧾 Extraction" }
                    p { "Review extracted fields and the JSON returned to your systems." }
                    Link { class: "c-button c-button--secondary", to: "/extraction/details", "Open extraction" }
                }
            }
        }
    }
}

/// Any other console path
#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "c-page",
            EmptyState {
                icon: "🚧".to_string(),
                title: "Not available here yet".to_string(),
                description: format!("{} is not part of the console yet.", path),
                action_text: Some("Back to dashboard".to_string()),
                action_href: Some("/dashboard/index".to_string()),
            }
        }
    }
}
