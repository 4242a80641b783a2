//! View model for the sidebar and header navigation.

use contracts::system::roles::Role;

use super::location::Location;
use super::registry::{entries_for, NavigationEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub icon: &'static str,
    pub active: bool,
    /// False in collapsed mode; the item stays clickable.
    pub show_label: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationPresenter {
    entries: &'static [NavigationEntry],
    collapsed: bool,
}

impl NavigationPresenter {
    pub fn for_role(role: Option<Role>) -> Self {
        Self::with_entries(entries_for(role))
    }

    pub fn with_entries(entries: &'static [NavigationEntry]) -> Self {
        Self {
            entries,
            collapsed: false,
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Index of the entry to highlight. Tab entries need both the route and
    /// the active tab to match; tab-less entries match on the path alone. The
    /// first match wins so at most one entry is ever active.
    pub fn active_index(&self, path: &str, active_tab: Option<&str>) -> Option<usize> {
        self.entries.iter().position(|entry| {
            if entry.route != path {
                return false;
            }
            match entry.tab_key {
                Some(key) => active_tab == Some(key),
                None => true,
            }
        })
    }

    pub fn present(&self, path: &str, active_tab: Option<&str>) -> Vec<NavItem> {
        let active = self.active_index(path, active_tab);
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| NavItem {
                label: entry.label,
                href: entry.href(),
                icon: entry.icon,
                active: active == Some(i),
                show_label: !self.collapsed,
            })
            .collect()
    }

    /// Convenience for callers that only hold the URL.
    pub fn present_location(&self, location: &Location) -> Vec<NavItem> {
        self.present(&location.path, location.tab())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::history::{History, MemoryHistory};
    use crate::navigation::tab_sync::TabSynchronizer;
    use crate::system::auth::context::{Session, SessionState};
    use contracts::system::auth::UserInfo;

    fn active_labels(items: &[NavItem]) -> Vec<&'static str> {
        items.iter().filter(|i| i.active).map(|i| i.label).collect()
    }

    #[test]
    fn store_manager_scenario_keeps_exactly_one_active_entry() {
        let mut history = MemoryHistory::new("/store-manager?tab=approved");
        let mut sync = TabSynchronizer::new(Role::StoreManager);
        sync.initialize(&mut history);
        let presenter = NavigationPresenter::for_role(Some(Role::StoreManager));

        let items = presenter.present(&history.location().path, sync.active());
        assert_eq!(active_labels(&items), vec!["Approved Requests"]);

        sync.select("maintenance", &mut history);
        assert_eq!(history.location().to_href(), "/store-manager?tab=maintenance");
        let items = presenter.present_location(&history.location());
        assert_eq!(active_labels(&items), vec!["Maintenance"]);
    }

    #[test]
    fn collapsed_hides_labels_but_keeps_targets_and_highlight() {
        let presenter = NavigationPresenter::for_role(Some(Role::Ara)).collapsed(true);
        let items = presenter.present("/ara", Some("inventory"));
        assert!(items.iter().all(|i| !i.show_label));
        assert_eq!(items[1].href, "/ara?tab=inventory");
        assert!(items[1].active);
    }

    #[test]
    fn tab_match_requires_the_entry_route() {
        let presenter = NavigationPresenter::for_role(Some(Role::Student));
        assert_eq!(presenter.active_index("/store-manager", Some("reports")), None);
        assert_eq!(presenter.active_index("/student", Some("reports")), Some(2));
    }

    #[test]
    fn tab_keys_match_case_sensitively() {
        let presenter = NavigationPresenter::for_role(Some(Role::Student));
        assert_eq!(presenter.active_index("/student", Some("REPORTS")), None);
        let items = presenter.present("/student", Some("Reports"));
        assert!(items.iter().all(|i| !i.active));
    }

    #[test]
    fn tab_less_entries_match_on_path() {
        static ENTRIES: [NavigationEntry; 2] = [
            NavigationEntry {
                label: "Home",
                route: "/",
                tab_key: None,
                icon: "home",
            },
            NavigationEntry {
                label: "Reports",
                route: "/student",
                tab_key: Some("reports"),
                icon: "report",
            },
        ];
        let presenter = NavigationPresenter::with_entries(&ENTRIES);
        assert_eq!(presenter.active_index("/", None), Some(0));
        assert_eq!(presenter.active_index("/", Some("reports")), Some(0));
        assert_eq!(presenter.active_index("/student", Some("reports")), Some(1));
        assert_eq!(presenter.active_index("/register", None), None);
    }

    #[test]
    fn logout_resets_navigation_to_default_set() {
        let mut state = SessionState::default();
        state.login(Session {
            token: "t".into(),
            user: UserInfo {
                id: "7".into(),
                username: "ara1".into(),
                name: None,
                email: None,
                role: "ARA".into(),
            },
        });
        let location = Location::parse("/ara?tab=inventory");

        let before = NavigationPresenter::for_role(Some(state.current_role()))
            .present_location(&location);
        assert_eq!(before[0].label, "Component & Equipment Request");
        assert_eq!(active_labels(&before), vec!["Inventory"]);

        state.logout();
        let after = NavigationPresenter::for_role(Some(state.current_role()))
            .present_location(&location);
        assert_eq!(
            after.iter().map(|i| i.label).collect::<Vec<_>>(),
            vec!["Request", "Component & Equipment", "Reports"]
        );
        assert!(after.iter().all(|i| i.href.starts_with("/student")));
    }
}
