use std::collections::BTreeSet;

/// A link rendered in the sidebar (`.menu-link`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub href: String,
    pub label: String,
    pub icon: &'static str,
    /// Submenu that contains this link, `None` for top-level links
    pub parent: Option<String>,
    /// Full page navigation handled by the server (e.g. sign out)
    pub external: bool,
}

/// A collapsible submenu container (`.has-submenu` / `.account-menu`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    pub id: String,
    pub label: String,
    pub icon: &'static str,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Link(MenuLink),
    Submenu(Submenu),
}

impl MenuEntry {
    pub fn parent(&self) -> Option<&str> {
        match self {
            MenuEntry::Link(link) => link.parent.as_deref(),
            MenuEntry::Submenu(submenu) => submenu.parent.as_deref(),
        }
    }
}

/// Menu entry matching the current location plus its ancestor submenus.
/// Derived on every load, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveMenuSelection {
    pub link_hrefs: BTreeSet<String>,
    pub menu_ids: BTreeSet<String>,
}

impl ActiveMenuSelection {
    pub fn is_empty(&self) -> bool {
        self.link_hrefs.is_empty()
    }
}

/// The sidebar's menu structure, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// Navigation of the InvoAI console
    pub fn console() -> Self {
        Self::new(vec![
            link("/dashboard/index", "Dashboard", "🏠", None),
            submenu("vendorMenu", "Vendors", "🏢", None),
            link("/vendor/new-vendor", "New vendor", "➕", Some("vendorMenu")),
            link("/vendor/get-all-vendors", "All vendors", "📋", Some("vendorMenu")),
            submenu("extractionMenu", "Extraction", "🧾", None),
            link("/extraction/details", "Extraction details", "🔎", Some("extractionMenu")),
            submenu("extractionOutputMenu", "Outputs", "📦", Some("extractionMenu")),
            link("/extraction/json", "Extracted JSON", "🗂️", Some("extractionOutputMenu")),
            link("/extraction/return-json", "Return JSON", "↩️", Some("extractionOutputMenu")),
            submenu("accountMenu", "Account", "👤", None),
            link("/users/profile", "Profile", "🪪", Some("accountMenu")),
            MenuEntry::Link(MenuLink {
                href: "/auth/logout".to_string(),
                label: "Sign out".to_string(),
                icon: "🚪",
                parent: Some("accountMenu".to_string()),
                external: true,
            }),
        ])
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Entries directly under `parent` (`None` = top level), in render order
    pub fn children<'a>(&'a self, parent: Option<&'a str>) -> impl Iterator<Item = &'a MenuEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.parent() == parent)
    }

    pub fn submenus(&self) -> impl Iterator<Item = &Submenu> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Submenu(submenu) => Some(submenu),
            MenuEntry::Link(_) => None,
        })
    }

    pub fn links(&self) -> impl Iterator<Item = &MenuLink> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Link(link) => Some(link),
            MenuEntry::Submenu(_) => None,
        })
    }

    pub fn submenu(&self, id: &str) -> Option<&Submenu> {
        self.submenus().find(|submenu| submenu.id == id)
    }

    pub fn contains_submenu(&self, id: &str) -> bool {
        self.submenu(id).is_some()
    }

    pub fn submenu_ids(&self) -> impl Iterator<Item = &str> {
        self.submenus().map(|submenu| submenu.id.as_str())
    }

    /// Other submenus sharing `id`'s parent
    pub fn sibling_submenu_ids(&self, id: &str) -> Vec<String> {
        let Some(target) = self.submenu(id) else {
            return Vec::new();
        };
        self.submenus()
            .filter(|submenu| submenu.id != id && submenu.parent == target.parent)
            .map(|submenu| submenu.id.clone())
            .collect()
    }

    /// Walks parent links upwards, nearest first. Stops on unknown ids and cycles.
    pub fn ancestors(&self, parent: Option<&str>) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = parent;
        while let Some(id) = current {
            if chain.iter().any(|seen: &String| seen == id) {
                break;
            }
            let Some(submenu) = self.submenu(id) else {
                break;
            };
            chain.push(submenu.id.clone());
            current = submenu.parent.as_deref();
        }
        chain
    }

    /// Exact string comparison of `path` with each link's href: no trailing
    /// slash normalization, no query stripping.
    pub fn active_selection(&self, path: &str) -> ActiveMenuSelection {
        let mut selection = ActiveMenuSelection::default();
        for link in self.links().filter(|link| link.href == path) {
            selection.link_hrefs.insert(link.href.clone());
            selection
                .menu_ids
                .extend(self.ancestors(link.parent.as_deref()));
        }
        selection
    }
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::console()
    }
}

fn link(href: &str, label: &str, icon: &'static str, parent: Option<&str>) -> MenuEntry {
    MenuEntry::Link(MenuLink {
        href: href.to_string(),
        label: label.to_string(),
        icon,
        parent: parent.map(str::to_string),
        external: false,
    })
}

fn submenu(id: &str, label: &str, icon: &'static str, parent: Option<&str>) -> MenuEntry {
    MenuEntry::Submenu(Submenu {
        id: id.to_string(),
        label: label.to_string(),
        icon,
        parent: parent.map(str::to_string),
    })
}
