use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Persisted sidebar preferences.
///
/// `collapsed == true` implies `open_menu_ids` is empty: collapsing closes
/// every submenu so none is left open without a visible parent. The slid-in
/// mobile sidebar is the one exception; its submenus live in memory until it
/// closes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub collapsed: bool,
    pub open_menu_ids: BTreeSet<String>,
}

impl SidebarState {
    pub fn collapse(&mut self) {
        self.collapsed = true;
        self.open_menu_ids.clear();
    }

    /// Drop ids that no longer correspond to a rendered submenu
    pub fn retain_known<'a>(&mut self, known: impl IntoIterator<Item = &'a str>) -> usize {
        let known: BTreeSet<&str> = known.into_iter().collect();
        let before = self.open_menu_ids.len();
        self.open_menu_ids.retain(|id| known.contains(id.as_str()));
        before - self.open_menu_ids.len()
    }
}

/// Stored shape of the submenu states.
///
/// Pages write `{"menuId": true, ...}`; a plain list of open ids is accepted
/// as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredMenuStates {
    Flags(BTreeMap<String, bool>),
    Open(Vec<String>),
}

impl StoredMenuStates {
    pub fn open_ids(self) -> BTreeSet<String> {
        match self {
            StoredMenuStates::Flags(flags) => flags
                .into_iter()
                .filter_map(|(id, open)| open.then_some(id))
                .collect(),
            StoredMenuStates::Open(ids) => ids.into_iter().collect(),
        }
    }

    /// One flag per known submenu
    pub fn from_open<'a>(
        open: &BTreeSet<String>,
        known: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        StoredMenuStates::Flags(
            known
                .into_iter()
                .map(|id| (id.to_string(), open.contains(id)))
                .collect(),
        )
    }
}

/// `"true"` / `"false"`; anything else is malformed
pub fn parse_collapsed_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn parse_menu_states(raw: &str) -> serde_json::Result<BTreeSet<String>> {
    serde_json::from_str::<StoredMenuStates>(raw).map(StoredMenuStates::open_ids)
}
