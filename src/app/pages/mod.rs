pub mod console_routes;
pub mod dashboard;
pub mod login;
pub mod new_vendor;

pub use dashboard::{Dashboard, Section};
pub use login::Login;
pub use new_vendor::NewVendor;
