//! Keeps a tabbed page's active tab and the URL `tab` parameter in step.
//!
//! Three triggers feed the synchronizer:
//! - initial load ([`TabSynchronizer::initialize`])
//! - a tab click ([`TabSynchronizer::select`]), state first, then the URL
//! - back/forward or a deep link ([`TabSynchronizer::on_location_change`])
//!
//! Load and external navigation share [`TabSynchronizer::reconcile`]. URL
//! rewrites always use replace semantics so tab switches never add history
//! entries.

use contracts::system::roles::Role;

use super::history::History;
use super::location::Location;
use super::registry::{navigation_for, RoleNavigation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    Uninitialized,
    Resolved { role: Role, tab: &'static str },
}

/// Outcome of one synchronization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub tab: &'static str,
    /// Active tab differs from the one held before this step.
    pub changed: bool,
    /// Href written with replace semantics, when the URL had to be corrected.
    pub rewritten: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct TabSynchronizer {
    nav: &'static RoleNavigation,
    active: Option<&'static str>,
}

impl TabSynchronizer {
    pub fn new(role: Role) -> Self {
        Self {
            nav: navigation_for(Some(role)),
            active: None,
        }
    }

    pub fn role(&self) -> Role {
        self.nav.role
    }

    /// Path of the page this synchronizer belongs to.
    pub fn route(&self) -> &'static str {
        self.nav.route
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn state(&self) -> TabState {
        match self.active {
            None => TabState::Uninitialized,
            Some(tab) => TabState::Resolved {
                role: self.nav.role,
                tab,
            },
        }
    }

    /// Valid key for this role, or the role's default for anything else.
    pub fn resolve(&self, requested: Option<&str>) -> &'static str {
        requested
            .and_then(|key| self.nav.valid_tab(key))
            .unwrap_or(self.nav.default_tab)
    }

    pub fn initialize(&mut self, history: &mut impl History) -> Option<Reconciliation> {
        self.reconcile(history)
    }

    pub fn on_location_change(&mut self, history: &mut impl History) -> Option<Reconciliation> {
        self.reconcile(history)
    }

    /// Aligns state with the URL and, if the URL holds a missing or invalid
    /// key, corrects the URL to the resolved tab.
    ///
    /// Returns `None` when the location is not this page (the page is on its
    /// way out and must not touch another page's URL).
    pub fn reconcile(&mut self, history: &mut impl History) -> Option<Reconciliation> {
        let location = history.location();
        if location.path != self.nav.route {
            return None;
        }

        let tab = self.resolve(location.tab());
        let changed = self.active != Some(tab);
        self.active = Some(tab);

        let rewritten = Self::rewrite_if_needed(&location, tab, history);
        if let Some(href) = &rewritten {
            log::debug!(
                "tab '{}' not valid for {}, corrected to {}",
                location.tab().unwrap_or_default(),
                self.nav.role,
                href
            );
        }

        Some(Reconciliation {
            tab,
            changed,
            rewritten,
        })
    }

    /// User picked a tab. Unknown keys are ignored and leave state untouched.
    pub fn select(&mut self, key: &str, history: &mut impl History) -> Option<Reconciliation> {
        let Some(tab) = self.nav.valid_tab(key) else {
            log::warn!("ignoring tab '{}' for role {}", key, self.nav.role);
            return None;
        };

        let changed = self.active != Some(tab);
        self.active = Some(tab);

        let location = history.location();
        let base = if location.path == self.nav.route {
            location
        } else {
            Location {
                path: self.nav.route.to_string(),
                ..Location::default()
            }
        };
        let rewritten = Self::rewrite_if_needed(&base, tab, history);

        Some(Reconciliation {
            tab,
            changed,
            rewritten,
        })
    }

    fn rewrite_if_needed(
        location: &Location,
        tab: &'static str,
        history: &mut impl History,
    ) -> Option<String> {
        if location.tab() == Some(tab) && history.location() == *location {
            return None;
        }
        let href = location.with_tab(tab).to_href();
        history.replace(&href);
        Some(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::history::MemoryHistory;

    #[test]
    fn starts_uninitialized() {
        let sync = TabSynchronizer::new(Role::Student);
        assert_eq!(sync.state(), TabState::Uninitialized);
        assert_eq!(sync.active(), None);
    }

    #[test]
    fn valid_deep_link_is_adopted_for_every_role_and_tab() {
        for role in Role::ALL {
            let nav = navigation_for(Some(role));
            for key in nav.tab_keys() {
                let href = format!("{}?tab={}", nav.route, key);
                let mut history = MemoryHistory::new(&href);
                let mut sync = TabSynchronizer::new(role);
                let outcome = sync.initialize(&mut history).unwrap();
                assert_eq!(outcome.tab, key);
                assert_eq!(outcome.rewritten, None);
                assert_eq!(sync.state(), TabState::Resolved { role, tab: key });
                assert_eq!(history.location().to_href(), href);
            }
        }
    }

    #[test]
    fn invalid_tab_falls_back_and_url_is_corrected() {
        let mut history = MemoryHistory::new("/ara?tab=approved");
        let mut sync = TabSynchronizer::new(Role::Ara);
        let outcome = sync.initialize(&mut history).unwrap();
        assert_eq!(outcome.tab, "request");
        assert_eq!(outcome.rewritten.as_deref(), Some("/ara?tab=request"));
        assert_eq!(history.location().tab(), Some("request"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn missing_tab_is_written_into_url() {
        let mut history = MemoryHistory::new("/HOD");
        let mut sync = TabSynchronizer::new(Role::DepartmentHead);
        let outcome = sync.initialize(&mut history).unwrap();
        assert_eq!(outcome.tab, "requests");
        assert_eq!(history.location().to_href(), "/HOD?tab=requests");
    }

    #[test]
    fn select_updates_state_then_replaces_url() {
        let mut history = MemoryHistory::new("/student?tab=request");
        let mut sync = TabSynchronizer::new(Role::Student);
        sync.initialize(&mut history);

        let outcome = sync.select("reports", &mut history).unwrap();
        assert!(outcome.changed);
        assert_eq!(sync.active(), Some("reports"));
        assert_eq!(history.location().to_href(), "/student?tab=reports");
        assert_eq!(history.len(), 1);

        let again = sync.select("reports", &mut history).unwrap();
        assert!(!again.changed);
        assert_eq!(again.rewritten, None);
    }

    #[test]
    fn select_ignores_foreign_keys() {
        let mut history = MemoryHistory::new("/student?tab=explore");
        let mut sync = TabSynchronizer::new(Role::Student);
        sync.initialize(&mut history);
        assert_eq!(sync.select("maintenance", &mut history), None);
        assert_eq!(sync.active(), Some("explore"));
        assert_eq!(history.location().tab(), Some("explore"));
    }

    #[test]
    fn back_and_forward_are_reconciled() {
        let mut history = MemoryHistory::new("/lecturer?tab=request");
        let mut sync = TabSynchronizer::new(Role::Lecturer);
        sync.initialize(&mut history);

        // A link elsewhere in the page pushes a new entry for the same route.
        history.push("/lecturer?tab=maintenance");
        let outcome = sync.on_location_change(&mut history).unwrap();
        assert!(outcome.changed);
        assert_eq!(sync.active(), Some("maintenance"));

        history.back();
        let outcome = sync.on_location_change(&mut history).unwrap();
        assert_eq!(outcome.tab, "request");
        assert_eq!(outcome.rewritten, None);
    }

    #[test]
    fn other_pages_are_left_alone() {
        let mut history = MemoryHistory::new("/store-manager?tab=approved");
        let mut sync = TabSynchronizer::new(Role::StoreManager);
        sync.initialize(&mut history);

        history.push("/login");
        assert_eq!(sync.on_location_change(&mut history), None);
        assert_eq!(history.location().to_href(), "/login");
        assert_eq!(sync.active(), Some("approved"));
    }

    #[test]
    fn tab_switches_do_not_grow_history() {
        let mut history = MemoryHistory::new("/");
        history.push("/store-manager");
        let mut sync = TabSynchronizer::new(Role::StoreManager);
        sync.initialize(&mut history);
        sync.select("approved", &mut history);
        sync.select("ara", &mut history);
        sync.select("maintenance", &mut history);

        assert_eq!(history.location().to_href(), "/store-manager?tab=maintenance");
        let previous = history.back().unwrap();
        assert_eq!(previous.path, "/");
        assert!(!history.can_go_back());
    }
}
