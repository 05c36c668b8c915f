// Shared services
pub mod form_transport;

pub use form_transport::{FormTransport, PlatformTransport};
