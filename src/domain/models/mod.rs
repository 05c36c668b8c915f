// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod forms;
pub mod navigation;
pub mod sidebar;

pub use forms::{
    validate_vendor_name, vendor_payload, ApiResponse, BodyEncoding, FieldState, FormPayload,
    LoginCredentials, LoginFieldError, VendorNameError,
};
pub use navigation::{ActiveMenuSelection, MenuEntry, MenuLink, MenuTree, Submenu};
pub use sidebar::{parse_collapsed_flag, parse_menu_states, SidebarState, StoredMenuStates};
