pub mod app_shell;
pub mod global_sidebar;
pub mod navbar;

pub use app_shell::AppShell;
pub use global_sidebar::GlobalSidebar;
pub use navbar::Navbar;
