pub mod button;
pub mod common;
pub mod notice;

pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorMessage};
pub use notice::{NoticeDialog, NoticeKind};
