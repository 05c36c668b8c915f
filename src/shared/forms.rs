//! Form submission: in-flight guard, single POST, response interpretation
//!
//! Validation happens before [`FormSubmitter::submit`] is called; an invalid
//! form never reaches the transport.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::domain::models::{ApiResponse, FormPayload};
use crate::shared::errors::TransportError;
use crate::shared::logging;
use crate::shared::services::FormTransport;

/// Shown by `beforeunload` while a submission is pending
pub const UNLOAD_WARNING: &str = "You have unsaved changes. Are you sure you want to leave?";

/// Per-form parameters of the submission contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub endpoint: String,
    /// Used when a successful response has no `url`
    pub default_redirect: String,
    /// `isSuccess: false` without a message
    pub rejection_message: String,
    /// Network/server error without a structured message, or malformed body
    pub failure_message: String,
    /// Success notice shown before redirecting; `None` redirects immediately
    pub success_notice: Option<SuccessNoticeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNoticeSpec {
    pub default_message: String,
    /// Redirect fires after this delay even if the notice never closes
    pub fallback_after: Duration,
}

impl FormSpec {
    pub fn login(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.login_endpoint.clone(),
            default_redirect: config.login_redirect.clone(),
            rejection_message: "Invalid username or password".to_string(),
            failure_message: "Login failed: Unknown error".to_string(),
            success_notice: None,
        }
    }

    pub fn vendor(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.vendor_endpoint.clone(),
            default_redirect: config.vendor_redirect.clone(),
            rejection_message: "Failed to create vendor".to_string(),
            failure_message: "An error occurred while creating the vendor".to_string(),
            success_notice: Some(SuccessNoticeSpec {
                default_message: "Vendor created successfully".to_string(),
                fallback_after: Duration::from_millis(config.redirect_delay_ms),
            }),
        }
    }
}

/// Where to go after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPlan {
    pub target: String,
    pub notice: Option<String>,
    pub fallback_after: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission of this form is still pending
    Suppressed,
    Redirect(RedirectPlan),
    Rejected { message: String },
}

/// Prevents duplicate submissions from repeated clicks.
///
/// Refuses new submissions while one is pending; it cannot cancel the pending
/// one.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    in_flight: Rc<Cell<bool>>,
}

impl SubmissionGuard {
    pub fn try_begin(&self) -> Option<SubmissionTicket> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(SubmissionTicket {
            in_flight: Rc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

/// Releases the guard when dropped, whatever the outcome
#[derive(Debug)]
pub struct SubmissionTicket {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

pub struct FormSubmitter<T> {
    transport: T,
    guard: SubmissionGuard,
}

impl<T: FormTransport> FormSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            guard: SubmissionGuard::default(),
        }
    }

    pub fn guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    pub fn is_in_flight(&self) -> bool {
        self.guard.is_in_flight()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit(&self, spec: &FormSpec, payload: FormPayload) -> SubmitOutcome {
        let Some(_ticket) = self.guard.try_begin() else {
            logging::log_submission_suppressed(&spec.endpoint);
            return SubmitOutcome::Suppressed;
        };

        let submission_id = uuid::Uuid::new_v4().to_string();
        logging::log_submission_start(&submission_id, &spec.endpoint);

        let result = self.transport.post(&spec.endpoint, &payload).await;
        if let Err(e) = &result {
            logging::log_submission_error(&submission_id, &spec.endpoint, &e.to_string());
        }

        let outcome = interpret_response(spec, result);
        logging::log_submission_result(
            &submission_id,
            &spec.endpoint,
            matches!(outcome, SubmitOutcome::Redirect(_)),
        );
        outcome
    }
}

/// Map a transport result onto the form contract. Never panics on bad input:
/// anything that is not a well-formed success becomes `Rejected`.
pub fn interpret_response(spec: &FormSpec, result: Result<String, TransportError>) -> SubmitOutcome {
    match result {
        Ok(body) => match serde_json::from_str::<ApiResponse>(&body) {
            Ok(response) if response.is_success => SubmitOutcome::Redirect(redirect_plan(spec, &response)),
            Ok(response) => SubmitOutcome::Rejected {
                message: response
                    .message()
                    .unwrap_or(spec.rejection_message.as_str())
                    .to_string(),
            },
            Err(e) => {
                tracing::warn!(endpoint = %spec.endpoint, error = %e, "Malformed response body");
                SubmitOutcome::Rejected {
                    message: spec.failure_message.clone(),
                }
            }
        },
        Err(TransportError::Http { body, .. }) => {
            let message = serde_json::from_str::<ApiResponse>(&body)
                .ok()
                .and_then(|response| response.message().map(str::to_string))
                .unwrap_or_else(|| spec.failure_message.clone());
            SubmitOutcome::Rejected { message }
        }
        Err(_) => SubmitOutcome::Rejected {
            message: spec.failure_message.clone(),
        },
    }
}

fn redirect_plan(spec: &FormSpec, response: &ApiResponse) -> RedirectPlan {
    let target = response
        .url()
        .unwrap_or(spec.default_redirect.as_str())
        .to_string();
    match &spec.success_notice {
        Some(notice) => RedirectPlan {
            target,
            notice: Some(
                response
                    .message()
                    .unwrap_or(notice.default_message.as_str())
                    .to_string(),
            ),
            fallback_after: Some(notice.fallback_after),
        },
        None => RedirectPlan {
            target,
            notice: None,
            fallback_after: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::vendor_payload;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::pin::pin;

    /// Answers every call with a fixed result
    struct FixedTransport {
        result: Result<String, TransportError>,
        calls: Cell<usize>,
    }

    impl FixedTransport {
        fn ok(body: &str) -> Self {
            Self {
                result: Ok(body.to_string()),
                calls: Cell::new(0),
            }
        }

        fn err(error: TransportError) -> Self {
            Self {
                result: Err(error),
                calls: Cell::new(0),
            }
        }
    }

    impl FormTransport for FixedTransport {
        async fn post(&self, _endpoint: &str, _payload: &FormPayload) -> Result<String, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Holds the first response until the test releases it
    struct GatedTransport {
        gate: RefCell<Option<oneshot::Receiver<String>>>,
        calls: Cell<usize>,
    }

    impl FormTransport for GatedTransport {
        async fn post(&self, _endpoint: &str, _payload: &FormPayload) -> Result<String, TransportError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx
                    .await
                    .map_err(|_| TransportError::Network("cancelled".to_string())),
                None => Ok(r#"{"isSuccess": true}"#.to_string()),
            }
        }
    }

    fn vendor_spec() -> FormSpec {
        FormSpec::vendor(&ClientConfig::default())
    }

    fn submit_vendor(transport: FixedTransport) -> (SubmitOutcome, usize) {
        let submitter = FormSubmitter::new(transport);
        let payload = vendor_payload("Acme").unwrap();
        let outcome = block_on(submitter.submit(&vendor_spec(), payload));
        (outcome, submitter.transport().calls.get())
    }

    #[test]
    fn test_second_submission_is_suppressed_while_in_flight() {
        let (tx, rx) = oneshot::channel();
        let submitter = FormSubmitter::new(GatedTransport {
            gate: RefCell::new(Some(rx)),
            calls: Cell::new(0),
        });
        let spec = vendor_spec();

        block_on(async {
            let mut first = pin!(submitter.submit(&spec, vendor_payload("Acme").unwrap()));
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(submitter.is_in_flight());

            let second = submitter.submit(&spec, vendor_payload("Acme").unwrap()).await;
            assert_eq!(second, SubmitOutcome::Suppressed);
            assert_eq!(submitter.transport().calls.get(), 1);

            tx.send(r#"{"isSuccess": true, "url": "/vendor/42"}"#.to_string())
                .unwrap();
            let outcome = first.await;
            assert!(matches!(outcome, SubmitOutcome::Redirect(ref plan) if plan.target == "/vendor/42"));
        });

        assert!(!submitter.is_in_flight());
        assert_eq!(submitter.transport().calls.get(), 1);
    }

    #[test]
    fn test_guard_released_after_failure_allows_retry() {
        let submitter = FormSubmitter::new(FixedTransport::err(TransportError::Network(
            "offline".to_string(),
        )));
        let spec = vendor_spec();
        for _ in 0..2 {
            let outcome = block_on(submitter.submit(&spec, vendor_payload("Acme").unwrap()));
            assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
        }
        assert_eq!(submitter.transport().calls.get(), 2);
    }

    #[test]
    fn test_success_redirects_to_server_url() {
        let (outcome, calls) = submit_vendor(FixedTransport::ok(
            r#"{"isSuccess": true, "url": "/vendor/get-all-vendors", "message": "Vendor added"}"#,
        ));
        assert_eq!(calls, 1);
        assert_eq!(
            outcome,
            SubmitOutcome::Redirect(RedirectPlan {
                target: "/vendor/get-all-vendors".to_string(),
                notice: Some("Vendor added".to_string()),
                fallback_after: Some(Duration::from_millis(5000)),
            })
        );
    }

    #[test]
    fn test_success_without_url_uses_default_target() {
        let (outcome, _) = submit_vendor(FixedTransport::ok(r#"{"isSuccess": true}"#));
        let SubmitOutcome::Redirect(plan) = outcome else {
            panic!("expected redirect, got {:?}", outcome);
        };
        assert_eq!(plan.target, "/vendor/get-all-vendors");
        assert_eq!(plan.notice.as_deref(), Some("Vendor created successfully"));
    }

    #[test]
    fn test_login_success_redirects_immediately() {
        let spec = FormSpec::login(&ClientConfig::default());
        let outcome = interpret_response(&spec, Ok(r#"{"isSuccess": true}"#.to_string()));
        assert_eq!(
            outcome,
            SubmitOutcome::Redirect(RedirectPlan {
                target: "/dashboard/index".to_string(),
                notice: None,
                fallback_after: None,
            })
        );
    }

    #[test]
    fn test_failure_shows_server_message() {
        let (outcome, _) = submit_vendor(FixedTransport::ok(
            r#"{"isSuccess": false, "message": "Vendor already exists"}"#,
        ));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Vendor already exists".to_string()
            }
        );
    }

    #[test]
    fn test_failure_without_message_uses_rejection_text() {
        let (outcome, _) = submit_vendor(FixedTransport::ok(r#"{"isSuccess": false}"#));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Failed to create vendor".to_string()
            }
        );
    }

    #[test]
    fn test_http_error_prefers_structured_message() {
        let spec = FormSpec::login(&ClientConfig::default());
        let outcome = interpret_response(
            &spec,
            Err(TransportError::Http {
                status: 401,
                body: r#"{"isSuccess": false, "message": "Invalid password"}"#.to_string(),
            }),
        );
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Invalid password".to_string()
            }
        );

        let outcome = interpret_response(
            &spec,
            Err(TransportError::Http {
                status: 502,
                body: "<html>Bad gateway</html>".to_string(),
            }),
        );
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Login failed: Unknown error".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_success_body_is_a_failure() {
        let (outcome, _) = submit_vendor(FixedTransport::ok("not json"));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "An error occurred while creating the vendor".to_string()
            }
        );
    }

    #[test]
    fn test_guard_ticket_releases_on_drop() {
        let guard = SubmissionGuard::default();
        let ticket = guard.try_begin().unwrap();
        assert!(guard.try_begin().is_none());
        drop(ticket);
        assert!(!guard.is_in_flight());
        assert!(guard.try_begin().is_some());
    }
}
