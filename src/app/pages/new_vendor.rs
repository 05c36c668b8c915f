use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, NoticeDialog, NoticeKind};
use crate::config::ClientConfig;
use crate::domain::models::{validate_vendor_name, vendor_payload, FieldState};
use crate::shared::forms::{FormSpec, RedirectPlan, SubmitOutcome};
use crate::shared::hooks::{navigate_to, schedule_fallback_redirect, use_form_submission};

/// Success notice waiting for the user to confirm the redirect
#[derive(Clone, Debug, PartialEq)]
struct PendingRedirect {
    message: String,
    target: String,
}

#[component]
pub fn NewVendor() -> Element {
    let config = use_context::<Signal<ClientConfig>>();
    let submission = use_form_submission();
    let is_submitting = submission.is_submitting;

    let mut vendor_name = use_signal(String::new);
    let mut name_state = use_signal(FieldState::default);
    let mut pending_redirect = use_signal(|| None::<PendingRedirect>);
    let mut error_notice = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let raw = vendor_name();
        let validated = validate_vendor_name(&raw);
        name_state.set(FieldState::from_result(&validated));

        let Ok(payload) = vendor_payload(&raw) else {
            return;
        };
        let spec = FormSpec::vendor(&config.read());
        let submission = submission.clone();

        spawn(async move {
            match submission.submit(spec, payload).await {
                SubmitOutcome::Redirect(plan) => {
                    if let Some(pending) = follow_redirect(plan) {
                        pending_redirect.set(Some(pending));
                    }
                }
                SubmitOutcome::Rejected { message } => error_notice.set(Some(message)),
                SubmitOutcome::Suppressed => {}
            }
        });
    };

    let name_class = name_state.read().css_class();
    let name_message = name_state.read().message().to_string();

    rsx! {
        section { class: "c-page fade-in visible",
            h1 { class: "c-page__title", "New vendor" }
            form { id: "newVendorForm", class: "c-form", novalidate: true, onsubmit: on_submit,
                div { class: "c-field",
                    label { r#for: "vendorName", "Vendor name" }
                    input {
                        id: "vendorName",
                        name: "vendor_name",
                        class: "form-control {name_class}",
                        placeholder: "Acme Supplies Ltd.",
                        value: "{vendor_name}",
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            name_state.set(FieldState::from_result(&validate_vendor_name(&value)));
                            vendor_name.set(value);
                        },
                    }
                    span { id: "vendorNameError", class: "c-field__error", "{name_message}" }
                }
                div { class: "c-form__actions",
                    Button {
                        id: "submitBtn".to_string(),
                        button_type: "submit".to_string(),
                        loading: is_submitting(),
                        "Create vendor"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: is_submitting(),
                        onclick: move |_| {
                            vendor_name.set(String::new());
                            name_state.set(FieldState::Pristine);
                        },
                        "Reset"
                    }
                }
            }

            if let Some(PendingRedirect { message, target }) = pending_redirect() {
                NoticeDialog {
                    kind: NoticeKind::Success,
                    title: "Success".to_string(),
                    message,
                    confirm_label: "Continue".to_string(),
                    on_close: move |_| navigate_to(&target),
                }
            }

            if let Some(message) = error_notice() {
                NoticeDialog {
                    kind: NoticeKind::Error,
                    title: "Error".to_string(),
                    message,
                    on_close: move |_| error_notice.set(None),
                }
            }
        }
    }
}

/// Redirect immediately, or show the notice and arm the fallback timer
fn follow_redirect(plan: RedirectPlan) -> Option<PendingRedirect> {
    let Some(message) = plan.notice else {
        navigate_to(&plan.target);
        return None;
    };
    if let Some(delay) = plan.fallback_after {
        schedule_fallback_redirect(plan.target.clone(), delay);
    }
    Some(PendingRedirect {
        message,
        target: plan.target,
    })
}
