//! Sidebar view state synchronised with a persisted store
//!
//! One [`ViewStateSync`] is created per page. It owns the collapse flag, the
//! open submenus and the transient overlay/user-menu flags; browser events
//! are forwarded to its handler methods by the layout components.

use std::collections::BTreeSet;

use crate::domain::models::{
    parse_collapsed_flag, parse_menu_states, ActiveMenuSelection, MenuTree, SidebarState,
    StoredMenuStates,
};
use crate::shared::errors::StorageError;
use crate::shared::logging;
use crate::shared::storage::KeyValueStore;

/// Widths at or below this are treated as mobile (logical pixels)
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";
pub const MENU_STATES_KEY: &str = "menuStates";

/// Result of a submenu click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuToggle {
    Opened,
    Closed,
    /// Sidebar collapsed or unknown id; the click should behave as a plain link
    Ignored,
}

/// Where a document-level click landed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionTarget {
    pub inside_sidebar: bool,
    /// Inside the user-menu toggle or the user menu itself
    pub inside_user_menu: bool,
}

pub struct ViewStateSync<S> {
    store: S,
    menu: MenuTree,
    state: SidebarState,
    active: ActiveMenuSelection,
    user_menu_open: bool,
    mobile_open: bool,
    viewport_width: Option<u32>,
    initialized: bool,
}

impl<S: KeyValueStore> ViewStateSync<S> {
    pub fn new(store: S, menu: MenuTree) -> Self {
        Self {
            store,
            menu,
            state: SidebarState::default(),
            active: ActiveMenuSelection::default(),
            user_menu_open: false,
            mobile_open: false,
            viewport_width: None,
            initialized: false,
        }
    }

    /// Restore persisted state and mark the entry for `path` active.
    /// Never fails: unreadable values fall back to defaults.
    pub fn initialize(&mut self, path: &str) {
        let mut state = self.load_state();
        let dropped = state.retain_known(self.menu.submenu_ids());
        if state.collapsed {
            state.open_menu_ids.clear();
        }
        logging::log_state_restored(state.collapsed, state.open_menu_ids.len(), dropped);

        self.state = state;
        self.initialized = true;
        self.set_current_path(path);
    }

    /// Recompute the active selection after in-app navigation.
    /// Ancestors of the active link are expanded unless the sidebar is
    /// collapsed, closing their same-level siblings; this is not written to
    /// the store. Navigating also slides the mobile sidebar away.
    pub fn set_current_path(&mut self, path: &str) {
        self.close_mobile_sidebar();
        self.active = self.menu.active_selection(path);
        logging::log_active_selection(
            path,
            self.active.link_hrefs.len(),
            self.active.menu_ids.len(),
        );
        if self.state.collapsed {
            return;
        }
        for id in &self.active.menu_ids {
            for sibling in self.menu.sibling_submenu_ids(id) {
                self.state.open_menu_ids.remove(&sibling);
            }
            self.state.open_menu_ids.insert(id.clone());
        }
    }

    /// Returns the new collapsed value
    pub fn toggle_sidebar_collapse(&mut self) -> bool {
        if self.state.collapsed {
            self.state.collapsed = false;
        } else {
            self.state.collapse();
        }
        self.user_menu_open = false;
        self.persist();
        self.state.collapsed
    }

    /// On a narrow viewport the slid-in mobile sidebar renders expanded, so
    /// its submenus toggle too. Those toggles sit on top of a collapse that is
    /// never persisted and stay in memory.
    pub fn toggle_submenu(&mut self, id: &str) -> SubmenuToggle {
        if !self.shows_expanded() {
            return SubmenuToggle::Ignored;
        }
        if !self.menu.contains_submenu(id) {
            tracing::debug!(menu_id = id, "Toggle for unknown submenu ignored");
            return SubmenuToggle::Ignored;
        }

        let toggle = if self.state.open_menu_ids.remove(id) {
            SubmenuToggle::Closed
        } else {
            for sibling in self.menu.sibling_submenu_ids(id) {
                self.state.open_menu_ids.remove(&sibling);
            }
            self.state.open_menu_ids.insert(id.to_string());
            SubmenuToggle::Opened
        };
        if !self.state.collapsed {
            self.persist();
        }
        toggle
    }

    /// Called at startup and on every resize
    pub fn handle_viewport_change(&mut self, width: u32) {
        self.viewport_width = Some(width);
        if width > MOBILE_BREAKPOINT {
            self.close_mobile_sidebar();
            return;
        }
        if !self.state.collapsed {
            logging::log_viewport_collapse(width, MOBILE_BREAKPOINT);
        }
        self.state.collapse();
        self.mobile_open = false;
    }

    /// Whether `handle_outside_interaction(target)` would change anything
    pub fn closes_on_interaction(&self, target: InteractionTarget) -> bool {
        (self.user_menu_open && !target.inside_user_menu)
            || (self.is_narrow() && !self.state.open_menu_ids.is_empty() && !target.inside_sidebar)
    }

    pub fn handle_outside_interaction(&mut self, target: InteractionTarget) {
        if !target.inside_user_menu {
            self.user_menu_open = false;
        }
        if !target.inside_sidebar && self.is_narrow() {
            self.state.open_menu_ids.clear();
        }
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn open_mobile_sidebar(&mut self) {
        self.mobile_open = true;
    }

    /// Overlay click: hide the mobile sidebar, the overlay and the user menu
    pub fn dismiss_mobile_overlay(&mut self) {
        self.close_mobile_sidebar();
        self.user_menu_open = false;
    }

    /// Submenus opened in the mobile sidebar do not outlive it
    fn close_mobile_sidebar(&mut self) {
        self.mobile_open = false;
        if self.state.collapsed {
            self.state.open_menu_ids.clear();
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.collapsed
    }

    pub fn is_submenu_open(&self, id: &str) -> bool {
        self.state.open_menu_ids.contains(id)
    }

    pub fn open_menu_ids(&self) -> &BTreeSet<String> {
        &self.state.open_menu_ids
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        self.active.link_hrefs.contains(href)
    }

    pub fn is_menu_active(&self, id: &str) -> bool {
        self.active.menu_ids.contains(id)
    }

    pub fn active_selection(&self) -> &ActiveMenuSelection {
        &self.active
    }

    pub fn is_user_menu_open(&self) -> bool {
        self.user_menu_open
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width
            .is_some_and(|width| width <= MOBILE_BREAKPOINT)
    }

    /// Mobile sidebar slid in over the page
    pub fn is_mobile_overlay(&self) -> bool {
        self.mobile_open && self.is_narrow()
    }

    /// Whether labels and submenus are rendered
    pub fn shows_expanded(&self) -> bool {
        !self.state.collapsed || self.is_mobile_overlay()
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_state(&self) -> SidebarState {
        let collapsed = match self.read_collapsed() {
            Ok(collapsed) => collapsed,
            Err(e) => {
                logging::log_state_restore_fallback(SIDEBAR_COLLAPSED_KEY, &e.to_string());
                false
            }
        };
        let open_menu_ids = match self.read_menu_states() {
            Ok(open) => open,
            Err(e) => {
                logging::log_state_restore_fallback(MENU_STATES_KEY, &e.to_string());
                BTreeSet::new()
            }
        };
        SidebarState {
            collapsed,
            open_menu_ids,
        }
    }

    fn read_collapsed(&self) -> Result<bool, StorageError> {
        let Some(raw) = self.store.get(SIDEBAR_COLLAPSED_KEY)? else {
            return Ok(false);
        };
        parse_collapsed_flag(&raw).ok_or_else(|| StorageError::Decode {
            key: SIDEBAR_COLLAPSED_KEY.to_string(),
            reason: format!("expected true/false, got {:?}", raw),
        })
    }

    fn read_menu_states(&self) -> Result<BTreeSet<String>, StorageError> {
        let Some(raw) = self.store.get(MENU_STATES_KEY)? else {
            return Ok(BTreeSet::new());
        };
        parse_menu_states(&raw).map_err(|e| StorageError::Decode {
            key: MENU_STATES_KEY.to_string(),
            reason: e.to_string(),
        })
    }

    /// Write-through; failures are logged and dropped
    fn persist(&mut self) {
        let collapsed = self.state.collapsed.to_string();
        if let Err(e) = self.store.set(SIDEBAR_COLLAPSED_KEY, &collapsed) {
            logging::log_persist_failure(SIDEBAR_COLLAPSED_KEY, &e.to_string());
        }

        let stored = StoredMenuStates::from_open(&self.state.open_menu_ids, self.menu.submenu_ids());
        let result = serde_json::to_string(&stored)
            .map_err(|e| StorageError::Write {
                key: MENU_STATES_KEY.to_string(),
                reason: e.to_string(),
            })
            .and_then(|json| self.store.set(MENU_STATES_KEY, &json));
        if let Err(e) = result {
            logging::log_persist_failure(MENU_STATES_KEY, &e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn sync_with(entries: &[(&str, &str)]) -> ViewStateSync<MemoryStore> {
        ViewStateSync::new(
            MemoryStore::with_entries(entries.iter().copied()),
            MenuTree::console(),
        )
    }

    fn stored(sync: &ViewStateSync<MemoryStore>, key: &str) -> Option<String> {
        sync.store().get(key).unwrap()
    }

    fn stored_open(sync: &ViewStateSync<MemoryStore>) -> BTreeSet<String> {
        stored(sync, MENU_STATES_KEY)
            .map(|raw| parse_menu_states(&raw).unwrap())
            .unwrap_or_default()
    }

    #[test]
    fn test_initialize_defaults_on_empty_store() {
        let mut sync = sync_with(&[]);
        sync.initialize("/dashboard/index");
        assert!(!sync.is_collapsed());
        assert!(sync.open_menu_ids().is_empty());
        assert!(sync.is_link_active("/dashboard/index"));
        assert!(sync.is_initialized());
    }

    #[test]
    fn test_initialize_collapsed_never_renders_open_submenus() {
        let mut sync = sync_with(&[
            (SIDEBAR_COLLAPSED_KEY, "true"),
            (MENU_STATES_KEY, r#"{"vendorMenu": true, "accountMenu": true}"#),
        ]);
        sync.initialize("/vendor/new-vendor");
        assert!(sync.is_collapsed());
        assert!(sync.open_menu_ids().is_empty());
        // still highlighted, just not expanded
        assert!(sync.is_menu_active("vendorMenu"));
        assert!(sync.is_link_active("/vendor/new-vendor"));
    }

    #[test]
    fn test_initialize_survives_corrupted_json() {
        let mut sync = sync_with(&[
            (SIDEBAR_COLLAPSED_KEY, "maybe"),
            (MENU_STATES_KEY, "{\"vendorMenu\": tr"),
        ]);
        sync.initialize("/nowhere");
        assert_eq!(sync.state(), &SidebarState::default());
        assert!(sync.active_selection().is_empty());
    }

    #[test]
    fn test_initialize_drops_stale_ids() {
        let mut sync = sync_with(&[(MENU_STATES_KEY, r#"["vendorMenu", "reportsMenu"]"#)]);
        sync.initialize("/dashboard/index");
        assert_eq!(
            sync.open_menu_ids().iter().collect::<Vec<_>>(),
            vec!["vendorMenu"]
        );
    }

    #[test]
    fn test_initialize_expands_ancestors_without_persisting() {
        let mut sync = sync_with(&[]);
        sync.initialize("/extraction/json");
        assert!(sync.is_submenu_open("extractionMenu"));
        assert!(sync.is_submenu_open("extractionOutputMenu"));
        assert!(sync.store().is_empty());
    }

    #[test]
    fn test_toggle_collapse_twice_restores_value_and_clears_menus() {
        let mut sync = sync_with(&[(MENU_STATES_KEY, r#"{"vendorMenu": true}"#)]);
        sync.initialize("/dashboard/index");
        assert!(sync.is_submenu_open("vendorMenu"));

        assert!(sync.toggle_sidebar_collapse());
        assert!(sync.open_menu_ids().is_empty());
        assert_eq!(stored(&sync, SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));
        assert!(stored_open(&sync).is_empty());

        assert!(!sync.toggle_sidebar_collapse());
        assert!(sync.open_menu_ids().is_empty());
        assert_eq!(stored(&sync, SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_collapse_closes_user_menu() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.toggle_user_menu();
        assert!(sync.is_user_menu_open());
        sync.toggle_sidebar_collapse();
        assert!(!sync.is_user_menu_open());
    }

    #[test]
    fn test_toggle_submenu_while_collapsed_is_noop() {
        let mut sync = sync_with(&[(SIDEBAR_COLLAPSED_KEY, "true")]);
        sync.initialize("/");
        let before = sync.state().clone();

        assert_eq!(sync.toggle_submenu("vendorMenu"), SubmenuToggle::Ignored);
        assert_eq!(sync.state(), &before);
        assert_eq!(stored(&sync, MENU_STATES_KEY), None);
        assert_eq!(stored(&sync, SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_opening_submenu_closes_same_level_sibling() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        assert_eq!(sync.toggle_submenu("vendorMenu"), SubmenuToggle::Opened);
        assert_eq!(sync.toggle_submenu("accountMenu"), SubmenuToggle::Opened);

        let open: Vec<_> = sync.open_menu_ids().iter().cloned().collect();
        assert_eq!(open, vec!["accountMenu"]);
        assert_eq!(stored_open(&sync), BTreeSet::from(["accountMenu".to_string()]));
    }

    #[test]
    fn test_opening_nested_submenu_keeps_parent_open() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.toggle_submenu("extractionMenu");
        sync.toggle_submenu("extractionOutputMenu");
        assert!(sync.is_submenu_open("extractionMenu"));
        assert!(sync.is_submenu_open("extractionOutputMenu"));
    }

    #[test]
    fn test_toggle_submenu_closes_open_menu() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.toggle_submenu("vendorMenu");
        assert_eq!(sync.toggle_submenu("vendorMenu"), SubmenuToggle::Closed);
        assert!(sync.open_menu_ids().is_empty());
        assert!(stored_open(&sync).is_empty());
    }

    #[test]
    fn test_toggle_unknown_submenu_is_ignored() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        assert_eq!(sync.toggle_submenu("ghostMenu"), SubmenuToggle::Ignored);
        assert!(sync.store().is_empty());
    }

    #[test]
    fn test_narrow_viewport_always_collapses() {
        for collapsed in ["true", "false"] {
            let mut sync = sync_with(&[(SIDEBAR_COLLAPSED_KEY, collapsed)]);
            sync.initialize("/vendor/new-vendor");
            sync.open_mobile_sidebar();
            sync.handle_viewport_change(MOBILE_BREAKPOINT);
            assert!(sync.is_collapsed());
            assert!(sync.open_menu_ids().is_empty());
            assert!(!sync.is_mobile_open());
        }
    }

    #[test]
    fn test_wide_viewport_leaves_state_untouched() {
        for (raw, expected) in [("true", true), ("false", false)] {
            let mut sync = sync_with(&[(SIDEBAR_COLLAPSED_KEY, raw)]);
            sync.initialize("/");
            sync.handle_viewport_change(MOBILE_BREAKPOINT + 1);
            assert_eq!(sync.is_collapsed(), expected);
            assert!(!sync.is_narrow());
        }
    }

    #[test]
    fn test_viewport_collapse_is_not_persisted() {
        let mut sync = sync_with(&[(SIDEBAR_COLLAPSED_KEY, "false")]);
        sync.initialize("/");
        sync.handle_viewport_change(320);
        assert_eq!(stored(&sync, SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_outside_interaction_closes_user_menu() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.toggle_user_menu();

        sync.handle_outside_interaction(InteractionTarget {
            inside_sidebar: false,
            inside_user_menu: true,
        });
        assert!(sync.is_user_menu_open());

        sync.handle_outside_interaction(InteractionTarget::default());
        assert!(!sync.is_user_menu_open());
    }

    #[test]
    fn test_outside_interaction_closes_submenus_only_on_narrow_viewport() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.handle_viewport_change(1024);
        sync.toggle_submenu("vendorMenu");
        sync.handle_outside_interaction(InteractionTarget::default());
        assert!(sync.is_submenu_open("vendorMenu"));

        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.handle_viewport_change(600);
        sync.open_mobile_sidebar();
        sync.toggle_submenu("vendorMenu");
        sync.handle_outside_interaction(InteractionTarget {
            inside_sidebar: true,
            inside_user_menu: false,
        });
        assert!(sync.is_submenu_open("vendorMenu"));
        assert!(sync.closes_on_interaction(InteractionTarget::default()));
        sync.handle_outside_interaction(InteractionTarget::default());
        assert!(sync.open_menu_ids().is_empty());
        assert!(sync.store().is_empty());
        assert!(!sync.closes_on_interaction(InteractionTarget::default()));
    }

    #[test]
    fn test_mobile_sidebar_submenus_toggle_in_memory() {
        let mut sync = sync_with(&[(SIDEBAR_COLLAPSED_KEY, "false")]);
        sync.initialize("/dashboard/index");
        sync.handle_viewport_change(600);
        assert!(sync.is_collapsed());
        assert_eq!(sync.toggle_submenu("vendorMenu"), SubmenuToggle::Ignored);

        sync.open_mobile_sidebar();
        assert!(sync.shows_expanded());
        assert_eq!(sync.toggle_submenu("vendorMenu"), SubmenuToggle::Opened);
        assert!(sync.is_submenu_open("vendorMenu"));
        assert_eq!(sync.toggle_submenu("accountMenu"), SubmenuToggle::Opened);
        assert!(!sync.is_submenu_open("vendorMenu"));

        // the forced collapse underneath is never written
        assert_eq!(stored(&sync, SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
        assert_eq!(stored(&sync, MENU_STATES_KEY), None);

        sync.dismiss_mobile_overlay();
        assert!(!sync.shows_expanded());
        assert!(sync.open_menu_ids().is_empty());
    }

    #[test]
    fn test_navigation_closes_mobile_sidebar() {
        let mut sync = sync_with(&[]);
        sync.initialize("/dashboard/index");
        sync.handle_viewport_change(600);
        sync.open_mobile_sidebar();
        sync.toggle_submenu("vendorMenu");

        sync.set_current_path("/vendor/new-vendor");
        assert!(!sync.is_mobile_open());
        assert!(sync.open_menu_ids().is_empty());
        assert!(sync.is_menu_active("vendorMenu"));
    }

    #[test]
    fn test_widening_viewport_closes_mobile_sidebar() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.handle_viewport_change(600);
        sync.open_mobile_sidebar();
        sync.toggle_submenu("extractionMenu");

        sync.handle_viewport_change(1280);
        assert!(!sync.is_mobile_open());
        assert!(sync.is_collapsed());
        assert!(sync.open_menu_ids().is_empty());
    }

    #[test]
    fn test_dismiss_overlay() {
        let mut sync = sync_with(&[]);
        sync.initialize("/");
        sync.open_mobile_sidebar();
        sync.toggle_user_menu();
        sync.dismiss_mobile_overlay();
        assert!(!sync.is_mobile_open());
        assert!(!sync.is_user_menu_open());
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut sync = ViewStateSync::new(MemoryStore::new().read_only(), MenuTree::console());
        sync.initialize("/");
        assert_eq!(sync.toggle_submenu("vendorMenu"), SubmenuToggle::Opened);
        assert!(sync.is_submenu_open("vendorMenu"));
        assert!(sync.toggle_sidebar_collapse());
        assert!(sync.is_collapsed());
    }

    #[test]
    fn test_set_current_path_moves_active_link() {
        let mut sync = sync_with(&[]);
        sync.initialize("/dashboard/index");
        sync.set_current_path("/vendor/get-all-vendors");
        assert!(!sync.is_link_active("/dashboard/index"));
        assert!(sync.is_link_active("/vendor/get-all-vendors"));
        assert!(sync.is_submenu_open("vendorMenu"));
    }

    #[test]
    fn test_set_current_path_keeps_one_open_menu_per_level() {
        let mut sync = sync_with(&[]);
        sync.initialize("/dashboard/index");
        sync.toggle_submenu("accountMenu");

        sync.set_current_path("/extraction/json");
        let open: Vec<_> = sync.open_menu_ids().iter().cloned().collect();
        assert_eq!(open, vec!["extractionMenu", "extractionOutputMenu"]);

        sync.toggle_submenu("extractionOutputMenu");
        assert_eq!(
            stored_open(&sync),
            BTreeSet::from(["extractionMenu".to_string()])
        );
    }
}
