use dioxus::prelude::*;

use crate::app::components::{Button, ErrorMessage};
use crate::config::ClientConfig;
use crate::domain::models::{FieldState, LoginCredentials};
use crate::shared::forms::{FormSpec, SubmitOutcome};
use crate::shared::hooks::{navigate_to, use_form_submission};

#[component]
pub fn Login() -> Element {
    let config = use_context::<Signal<ClientConfig>>();
    let submission = use_form_submission();
    let is_submitting = submission.is_submitting;

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut username_state = use_signal(FieldState::default);
    let mut password_state = use_signal(FieldState::default);
    let mut login_error = use_signal(|| None::<String>);

    let credentials = move || LoginCredentials {
        username: username(),
        password: password(),
        remember_me: remember_me(),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = credentials();
        username_state.set(FieldState::from_result(&credentials.validate_username()));
        password_state.set(FieldState::from_result(&credentials.validate_password()));

        let payload = match credentials.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                if let Some(first) = errors.first() {
                    focus_field(first.field_id());
                }
                return;
            }
        };
        let spec = FormSpec::login(&config.read());
        let submission = submission.clone();
        login_error.set(None);

        spawn(async move {
            match submission.submit(spec, payload).await {
                SubmitOutcome::Redirect(plan) => navigate_to(&plan.target),
                SubmitOutcome::Rejected { message } => login_error.set(Some(message)),
                SubmitOutcome::Suppressed => {}
            }
        });
    };

    let username_class = username_state.read().css_class();
    let username_message = username_state.read().message().to_string();
    let password_class = password_state.read().css_class();
    let password_message = password_state.read().message().to_string();

    rsx! {
        div { class: "c-login fade-in visible",
            form { class: "c-login__card", novalidate: true, onsubmit: on_submit,
                div { class: "c-login__header",
                    span { class: "c-login__logo", "🧾" }
                    h1 { "InvoAI" }
                    p { "Sign in to continue" }
                }

                div { class: "c-field",
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        name: "username",
                        class: "form-control {username_class}",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |evt: FormEvent| {
                            username.set(evt.value());
                            if username_state.peek().is_invalid() {
                                username_state.set(FieldState::from_result(&credentials().validate_username()));
                            }
                        },
                    }
                    span { class: "c-field__error", "{username_message}" }
                }

                div { class: "c-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        name: "password",
                        r#type: "password",
                        class: "form-control {password_class}",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| {
                            password.set(evt.value());
                            if password_state.peek().is_invalid() {
                                password_state.set(FieldState::from_result(&credentials().validate_password()));
                            }
                        },
                    }
                    span { class: "c-field__error", "{password_message}" }
                }

                label { class: "c-checkbox",
                    input {
                        id: "rememberMe",
                        name: "rememberMe",
                        r#type: "checkbox",
                        checked: remember_me(),
                        onchange: move |evt: FormEvent| remember_me.set(evt.checked()),
                    }
                    span { "Remember me" }
                }

                if let Some(message) = login_error() {
                    ErrorMessage { id: "login-error".to_string(), message }
                }

                Button {
                    button_type: "submit".to_string(),
                    loading: is_submitting(),
                    loading_label: "Signing in...".to_string(),
                    "Sign in"
                }
            }
        }
    }
}

fn focus_field(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}
