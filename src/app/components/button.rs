use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Secondary => "c-button--secondary",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    loading: Option<bool>,
    loading_label: Option<String>,
    button_type: Option<String>,
    id: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let loading = loading.unwrap_or(false);
    let disabled = disabled.unwrap_or(false) || loading;
    let button_type = button_type.unwrap_or_else(|| "button".to_string());
    let loading_label = loading_label.unwrap_or_else(|| "Processing...".to_string());

    let variant_class = variant.class();
    let loading_class = if loading { " c-button--loading" } else { "" };

    rsx! {
        button {
            id: id,
            r#type: "{button_type}",
            class: "c-button {variant_class}{loading_class}",
            disabled: disabled,
            aria_busy: "{loading}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "c-button__spinner" }
                span { "{loading_label}" }
            } else {
                {children}
            }
        }
    }
}
