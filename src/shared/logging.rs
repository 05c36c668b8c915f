//! Structured logging for the console
//!
//! Provides consistent, contextual logging across the client.
//! Every event carries an `operation` field so console output can be filtered.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    StateRestore,
    StatePersist,
    Viewport,
    Navigation,
    Submission,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::StateRestore => "state_restore",
            LogOperation::StatePersist => "state_persist",
            LogOperation::Viewport => "viewport",
            LogOperation::Navigation => "navigation",
            LogOperation::Submission => "submission",
            LogOperation::Config => "config",
        }
    }
}

/// Log a stored value that could not be used
pub fn log_state_restore_fallback(key: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::StateRestore.as_str(),
        key = key,
        error = error,
        "Ignoring stored sidebar state, using defaults"
    );
}

/// Log the restored sidebar state
pub fn log_state_restored(collapsed: bool, open_count: usize, dropped: usize) {
    tracing::debug!(
        operation = LogOperation::StateRestore.as_str(),
        collapsed = collapsed,
        open_menus = open_count,
        dropped_menus = dropped,
        "Sidebar state restored"
    );
}

/// Log a dropped write
pub fn log_persist_failure(key: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::StatePersist.as_str(),
        key = key,
        error = error,
        "Failed to persist sidebar state"
    );
}

/// Log a breakpoint-forced collapse
pub fn log_viewport_collapse(width: u32, breakpoint: u32) {
    tracing::debug!(
        operation = LogOperation::Viewport.as_str(),
        width = width,
        breakpoint = breakpoint,
        "Narrow viewport, forcing collapsed sidebar"
    );
}

/// Log the active selection computed for a path
pub fn log_active_selection(path: &str, links: usize, menus: usize) {
    tracing::trace!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        active_links = links,
        active_menus = menus,
        "Active menu selection computed"
    );
}

/// Log a submission leaving the browser
pub fn log_submission_start(submission_id: &str, endpoint: &str) {
    tracing::info!(
        operation = LogOperation::Submission.as_str(),
        submission_id = submission_id,
        endpoint = endpoint,
        "Submitting form"
    );
}

/// Log a click swallowed by the in-flight guard
pub fn log_submission_suppressed(endpoint: &str) {
    tracing::debug!(
        operation = LogOperation::Submission.as_str(),
        endpoint = endpoint,
        "Submission already in flight, ignoring"
    );
}

/// Log the outcome of a submission
pub fn log_submission_result(submission_id: &str, endpoint: &str, success: bool) {
    if success {
        tracing::info!(
            operation = LogOperation::Submission.as_str(),
            submission_id = submission_id,
            endpoint = endpoint,
            "Form accepted"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::Submission.as_str(),
            submission_id = submission_id,
            endpoint = endpoint,
            "Form rejected"
        );
    }
}

/// Log a transport or decoding failure
pub fn log_submission_error(submission_id: &str, endpoint: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Submission.as_str(),
        submission_id = submission_id,
        endpoint = endpoint,
        error = error,
        "Form submission failed"
    );
}

/// Log client configuration fallback
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Using default client configuration"
    );
}
