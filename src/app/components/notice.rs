use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "⚠️",
        }
    }

    fn modifier(&self) -> &'static str {
        match self {
            NoticeKind::Success => "c-notice--success",
            NoticeKind::Error => "c-notice--error",
        }
    }
}

/// Modal notice with a single confirm button; Escape also closes it
#[component]
pub fn NoticeDialog(
    kind: NoticeKind,
    title: String,
    message: String,
    confirm_label: Option<String>,
    on_close: EventHandler<()>,
) -> Element {
    let confirm_label = confirm_label.unwrap_or_else(|| "OK".to_string());
    let modifier = kind.modifier();
    let icon = kind.icon();

    rsx! {
        div { class: "c-notice-backdrop",
            div {
                class: "c-notice {modifier}",
                role: "alertdialog",
                aria_modal: "true",
                tabindex: "-1",
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Escape {
                        evt.prevent_default();
                        on_close.call(());
                    }
                },
                div { class: "c-notice__header",
                    span { class: "c-notice__icon", "{icon}" }
                    h3 { class: "c-notice__title", "{title}" }
                }
                p { class: "c-notice__message", "{message}" }
                button {
                    r#type: "button",
                    class: "c-button c-button--primary",
                    autofocus: true,
                    onclick: move |_| on_close.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
