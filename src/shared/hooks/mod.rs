// Custom Dioxus hooks
pub mod use_form_submission;
pub mod use_view_state;

pub use use_form_submission::{
    navigate_to, schedule_fallback_redirect, use_form_submission, FormSubmission,
};
pub use use_view_state::{
    use_view_state, SharedViewState, MOBILE_OVERLAY_ID, SIDEBAR_ID, USER_INFO_TOGGLE_ID,
    USER_MENU_ID,
};
