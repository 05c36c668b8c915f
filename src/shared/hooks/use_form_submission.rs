use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::models::FormPayload;
use crate::shared::forms::{FormSpec, FormSubmitter, SubmitOutcome};
use crate::shared::services::PlatformTransport;

/// Submission state shared between a form and its submit handler
#[derive(Clone)]
pub struct FormSubmission {
    submitter: Rc<FormSubmitter<PlatformTransport>>,
    pub is_submitting: Signal<bool>,
}

impl FormSubmission {
    pub async fn submit(&self, spec: FormSpec, payload: FormPayload) -> SubmitOutcome {
        let mut is_submitting = self.is_submitting;
        is_submitting.set(true);

        let outcome = self.submitter.submit(&spec, payload).await;

        // A suppressed call leaves the pending one in charge of the flag
        if outcome != SubmitOutcome::Suppressed {
            is_submitting.set(self.submitter.is_in_flight());
        }
        outcome
    }

    pub fn is_in_flight(&self) -> bool {
        self.submitter.is_in_flight()
    }
}

/// One submitter per form. While a submission is pending, leaving the page
/// asks for confirmation.
pub fn use_form_submission() -> FormSubmission {
    let submitter = use_hook(|| Rc::new(FormSubmitter::new(PlatformTransport::default())));
    let is_submitting = use_signal(|| false);

    let guard = submitter.guard().clone();
    use_hook(move || unload_warning::install(guard));

    FormSubmission {
        submitter,
        is_submitting,
    }
}

/// Full page navigation, so server-side routes are reachable too
pub fn navigate_to(target: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(target) {
                    tracing::error!(url = %target, "Navigation failed: {:?}", e);
                }
            }
            None => tracing::error!(url = %target, "Navigation failed: no window"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(url = %target, "Navigation requested outside the browser");
}

/// Navigate to `target` after `delay` unless the page is already gone
pub fn schedule_fallback_redirect(target: String, delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            navigate_to(&target);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(url = %target, ?delay, "Fallback redirect skipped outside the browser");
}

#[cfg(target_arch = "wasm32")]
mod unload_warning {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::shared::forms::{SubmissionGuard, UNLOAD_WARNING};

    /// Registered `beforeunload` listener, removed when the form unmounts
    pub struct UnloadWarning {
        window: web_sys::Window,
        listener: Closure<dyn FnMut(web_sys::BeforeUnloadEvent)>,
    }

    impl Drop for UnloadWarning {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "beforeunload",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }

    pub fn install(guard: SubmissionGuard) -> Option<Rc<UnloadWarning>> {
        let window = web_sys::window()?;
        let listener = Closure::wrap(Box::new(move |event: web_sys::BeforeUnloadEvent| {
            if guard.is_in_flight() {
                event.prevent_default();
                event.set_return_value(UNLOAD_WARNING);
            }
        }) as Box<dyn FnMut(web_sys::BeforeUnloadEvent)>);

        if let Err(e) = window
            .add_event_listener_with_callback("beforeunload", listener.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to register unload warning: {:?}", e);
            return None;
        }
        Some(Rc::new(UnloadWarning { window, listener }))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod unload_warning {
    use crate::shared::forms::SubmissionGuard;

    pub fn install(_guard: SubmissionGuard) {}
}
