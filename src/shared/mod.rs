pub mod errors;
pub mod forms;
pub mod logging;
pub mod services;
pub mod storage;
pub mod view_state;

// Dioxus hooks binding browser events to the shared state
pub mod hooks;
