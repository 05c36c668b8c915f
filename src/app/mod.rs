pub mod components;
pub mod layouts;
pub mod pages;

pub use pages::console_routes::{App, Route};
