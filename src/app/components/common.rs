use dioxus::prelude::*;

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String, id: Option<String>) -> Element {
    rsx! {
        div { id: id, class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    description: String,
    action_text: Option<String>,
    action_href: Option<String>,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
            if let (Some(text), Some(href)) = (action_text, action_href) {
                Link { class: "c-button c-button--primary", to: href, "{text}" }
            }
        }
    }
}
