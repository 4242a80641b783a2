//! Role registry - the single source of truth for per-role navigation.
//!
//! Every sidebar/header entry and every valid `?tab=` key comes from the
//! tables below. Unknown or missing roles resolve to [`DEFAULT_ROLE`].

use contracts::system::roles::Role;

/// Role assumed when there is no session or the stored role is not recognised.
pub const DEFAULT_ROLE: Role = Role::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub tab_key: Option<&'static str>,
    pub icon: &'static str,
}

impl NavigationEntry {
    const fn tab(
        label: &'static str,
        route: &'static str,
        key: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            label,
            route,
            tab_key: Some(key),
            icon,
        }
    }

    /// Link target; tab entries embed their key as a query parameter.
    pub fn href(&self) -> String {
        match self.tab_key {
            Some(key) => format!("{}?tab={}", self.route, key),
            None => self.route.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleNavigation {
    pub role: Role,
    /// Path of the role's tabbed page.
    pub route: &'static str,
    pub default_tab: &'static str,
    pub entries: &'static [NavigationEntry],
}

impl RoleNavigation {
    /// Returns the registry's own key when `key` is valid for this role.
    pub fn valid_tab(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .filter_map(|e| e.tab_key)
            .find(|k| *k == key)
    }

    pub fn tab_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter_map(|e| e.tab_key)
    }

    pub fn label_for(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.tab_key == Some(key))
            .map(|e| e.label)
    }
}

static STUDENT: RoleNavigation = RoleNavigation {
    role: Role::Student,
    route: "/student",
    default_tab: "request",
    entries: &[
        NavigationEntry::tab("Request", "/student", "request", "dashboard"),
        NavigationEntry::tab("Component & Equipment", "/student", "explore", "inventory"),
        NavigationEntry::tab("Reports", "/student", "reports", "report"),
    ],
};

static LECTURER: RoleNavigation = RoleNavigation {
    role: Role::Lecturer,
    route: "/lecturer",
    default_tab: "request",
    entries: &[
        NavigationEntry::tab("Request", "/lecturer", "request", "dashboard"),
        NavigationEntry::tab("Inventory", "/lecturer", "inventory", "inventory"),
        NavigationEntry::tab("Maintenance", "/lecturer", "maintenance", "build"),
        NavigationEntry::tab("Reports", "/lecturer", "reports", "report"),
    ],
};

static ARA: RoleNavigation = RoleNavigation {
    role: Role::Ara,
    route: "/ara",
    default_tab: "request",
    entries: &[
        NavigationEntry::tab("Component & Equipment Request", "/ara", "request", "dashboard"),
        NavigationEntry::tab("Inventory", "/ara", "inventory", "inventory"),
        NavigationEntry::tab("Maintenance", "/ara", "maintenance", "build"),
        NavigationEntry::tab("Reports", "/ara", "reports", "report"),
    ],
};

static SARA: RoleNavigation = RoleNavigation {
    role: Role::Sara,
    route: "/sara",
    default_tab: "request",
    entries: &[
        NavigationEntry::tab("Component & Equipment Request", "/sara", "request", "dashboard"),
        NavigationEntry::tab("Inventory", "/sara", "inventory", "inventory"),
        NavigationEntry::tab("Maintenance", "/sara", "maintenance", "build"),
        NavigationEntry::tab("Reports", "/sara", "reports", "report"),
    ],
};

static DEPARTMENT_HEAD: RoleNavigation = RoleNavigation {
    role: Role::DepartmentHead,
    route: "/HOD",
    default_tab: "requests",
    entries: &[
        NavigationEntry::tab("Request Approval", "/HOD", "requests", "dashboard"),
        NavigationEntry::tab("Inventory", "/HOD", "inventory", "inventory"),
        NavigationEntry::tab("Maintenance", "/HOD", "maintenance", "build"),
        NavigationEntry::tab("Reports", "/HOD", "reports", "report"),
    ],
};

static STORE_MANAGER: RoleNavigation = RoleNavigation {
    role: Role::StoreManager,
    route: "/store-manager",
    default_tab: "inventory",
    entries: &[
        NavigationEntry::tab("Inventory Management", "/store-manager", "inventory", "inventory"),
        NavigationEntry::tab("Approved Requests", "/store-manager", "approved", "dashboard"),
        NavigationEntry::tab("ARA/Lecturer Requests", "/store-manager", "ara", "dashboard"),
        NavigationEntry::tab("Maintenance", "/store-manager", "maintenance", "build"),
        NavigationEntry::tab("Reports", "/store-manager", "reports", "report"),
    ],
};

static ALL: [&RoleNavigation; 6] = [
    &STUDENT,
    &LECTURER,
    &ARA,
    &SARA,
    &DEPARTMENT_HEAD,
    &STORE_MANAGER,
];

pub fn resolve_role(role: Option<Role>) -> Role {
    role.unwrap_or(DEFAULT_ROLE)
}

pub fn navigation_for(role: Option<Role>) -> &'static RoleNavigation {
    match resolve_role(role) {
        Role::Student => &STUDENT,
        Role::Lecturer => &LECTURER,
        Role::Ara => &ARA,
        Role::Sara => &SARA,
        Role::DepartmentHead => &DEPARTMENT_HEAD,
        Role::StoreManager => &STORE_MANAGER,
    }
}

pub fn entries_for(role: Option<Role>) -> &'static [NavigationEntry] {
    navigation_for(role).entries
}

pub fn default_tab(role: Option<Role>) -> &'static str {
    navigation_for(role).default_tab
}

pub fn valid_tab(role: Role, key: &str) -> Option<&'static str> {
    navigation_for(Some(role)).valid_tab(key)
}

pub fn base_route(role: Role) -> &'static str {
    navigation_for(Some(role)).route
}

/// Role whose tabbed page lives at `path`. Paths are case-sensitive (`/HOD`).
pub fn role_for_route(path: &str) -> Option<Role> {
    ALL.iter().find(|nav| nav.route == path).map(|nav| nav.role)
}

/// Where a freshly logged-in user lands. Unknown roles go to the home page.
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(role) => base_route(role),
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_non_empty_stable_entries() {
        for role in Role::ALL {
            let first = entries_for(Some(role));
            assert!(!first.is_empty(), "{:?} has no entries", role);
            assert_eq!(first, entries_for(Some(role)));
        }
    }

    #[test]
    fn missing_role_falls_back_to_student() {
        assert_eq!(entries_for(None), entries_for(Some(Role::Student)));
        assert_eq!(default_tab(None), "request");
    }

    #[test]
    fn default_tab_is_first_entry_and_entries_stay_on_role_route() {
        for role in Role::ALL {
            let nav = navigation_for(Some(role));
            assert_eq!(nav.entries[0].tab_key, Some(nav.default_tab));
            assert!(nav.entries.iter().all(|e| e.route == nav.route));
            assert_eq!(role_for_route(nav.route), Some(role));
        }
    }

    #[test]
    fn store_manager_has_its_own_vocabulary() {
        let keys: Vec<_> = navigation_for(Some(Role::StoreManager)).tab_keys().collect();
        assert_eq!(keys, vec!["inventory", "approved", "ara", "maintenance", "reports"]);
        assert_eq!(valid_tab(Role::StoreManager, "approved"), Some("approved"));
        assert_eq!(valid_tab(Role::Ara, "approved"), None);
        assert_eq!(valid_tab(Role::Student, "inventory"), None);
    }

    #[test]
    fn hrefs_embed_tab_key() {
        let nav = navigation_for(Some(Role::DepartmentHead));
        assert_eq!(nav.entries[0].href(), "/HOD?tab=requests");
        assert_eq!(nav.label_for("reports"), Some("Reports"));
        let home = NavigationEntry {
            label: "Home",
            route: "/",
            tab_key: None,
            icon: "home",
        };
        assert_eq!(home.href(), "/");
    }

    #[test]
    fn routes_are_case_sensitive() {
        assert_eq!(role_for_route("/HOD"), Some(Role::DepartmentHead));
        assert_eq!(role_for_route("/hod"), None);
        assert_eq!(role_for_route("/"), None);
    }

    #[test]
    fn landing_routes() {
        assert_eq!(landing_route(Some(Role::StoreManager)), "/store-manager");
        assert_eq!(landing_route(None), "/");
    }
}
