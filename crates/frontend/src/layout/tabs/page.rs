//! RolePage: the one tabbed page shell shared by every role route.
//!
//! Owns the page's [`TabSynchronizer`] and [`FetchGuard`]. The URL is read on
//! mount and on every location change; tab clicks go through
//! [`TabSynchronizer::select`]. Only the content pane re-renders on a switch.

use contracts::system::roles::Role;
use leptos::logging::log;
use leptos::prelude::*;

use super::registry::render_tab_content;
use crate::layout::global_context::AppGlobalContext;
use crate::navigation::history::History;
use crate::navigation::registry::navigation_for;
use crate::navigation::tab_sync::{Reconciliation, TabSynchronizer};
use crate::shared::fetch_guard::FetchGuard;
use crate::system::auth::guard::RequireAuth;

/// The tab to render after one synchronization step, if it changed. A change
/// supersedes every fetch started for the outgoing tab.
pub fn settle(outcome: Option<Reconciliation>, guard: &FetchGuard) -> Option<&'static str> {
    let outcome = outcome?;
    if !outcome.changed {
        return None;
    }
    guard.supersede();
    Some(outcome.tab)
}

pub fn open_page(
    sync: &mut TabSynchronizer,
    guard: &FetchGuard,
    history: &mut impl History,
) -> Option<&'static str> {
    settle(sync.initialize(history), guard)
}

pub fn follow_location(
    sync: &mut TabSynchronizer,
    guard: &FetchGuard,
    history: &mut impl History,
) -> Option<&'static str> {
    settle(sync.on_location_change(history), guard)
}

pub fn select_tab(
    sync: &mut TabSynchronizer,
    guard: &FetchGuard,
    key: &str,
    history: &mut impl History,
) -> Option<&'static str> {
    settle(sync.select(key, history), guard)
}

#[component]
pub fn RolePage(role: Role) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let sync = StoredValue::new(TabSynchronizer::new(role));
    let active = RwSignal::new(None::<&'static str>);
    let page_guard = FetchGuard::new();
    provide_context(page_guard.clone());
    let guard = StoredValue::new(page_guard.clone());

    let mut history = ctx;
    let mut initial = sync.get_value();
    if let Some(tab) = open_page(&mut initial, &page_guard, &mut history) {
        active.set(Some(tab));
    }
    sync.set_value(initial);

    Effect::new(move |_| {
        ctx.location.track();
        let mut history = ctx;
        let mut current = sync.get_value();
        let tab = guard.with_value(|g| follow_location(&mut current, g, &mut history));
        sync.set_value(current);
        if let Some(tab) = tab {
            active.set(Some(tab));
        }
    });

    let select = move |key: &'static str| {
        let mut history = ctx;
        let mut current = sync.get_value();
        let tab = guard.with_value(|g| select_tab(&mut current, g, key, &mut history));
        sync.set_value(current);
        if let Some(tab) = tab {
            active.set(Some(tab));
        }
    };

    log!("RolePage mounted for {}", role);
    on_cleanup(move || {
        page_guard.supersede();
        log!("RolePage unmounted for {}", role);
    });

    let entries = navigation_for(Some(role)).entries;

    view! {
        <RequireAuth>
            <div class="role-page" data-role=role.as_str()>
                <h1 class="role-page__title">{format!("{} Dashboard", role.display_name())}</h1>
                <div class="tabs" role="tablist">
                    {entries.iter().filter_map(|entry| {
                        let key = entry.tab_key?;
                        Some(view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || active.get() == Some(key)
                                role="tab"
                                aria-selected=move || (active.get() == Some(key)).to_string()
                                on:click=move |_| select(key)
                            >
                                {entry.label}
                            </button>
                        })
                    }).collect_view()}
                </div>
                <div class="tabs__content">
                    {move || active.get().map(|tab| render_tab_content(role, tab))}
                </div>
            </div>
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::history::MemoryHistory;

    fn opened(href: &str) -> (TabSynchronizer, FetchGuard, MemoryHistory) {
        let mut history = MemoryHistory::new(href);
        let mut sync = TabSynchronizer::new(Role::StoreManager);
        let guard = FetchGuard::new();
        assert!(open_page(&mut sync, &guard, &mut history).is_some());
        (sync, guard, history)
    }

    #[test]
    fn clicking_another_tab_retires_the_pending_fetch() {
        let (mut sync, guard, mut history) = opened("/store-manager?tab=inventory");
        let pane = guard.scoped();
        let pending = pane.next_ticket();

        assert_eq!(select_tab(&mut sync, &guard, "approved", &mut history), Some("approved"));
        assert!(!pending.is_current());
        assert!(guard.scoped().ticket().is_current());
        assert_eq!(history.location().to_href(), "/store-manager?tab=approved");
    }

    #[test]
    fn reselecting_the_active_tab_keeps_its_fetch() {
        let (mut sync, guard, mut history) = opened("/store-manager?tab=inventory");
        let pending = guard.scoped().next_ticket();

        assert_eq!(select_tab(&mut sync, &guard, "inventory", &mut history), None);
        assert_eq!(select_tab(&mut sync, &guard, "nope", &mut history), None);
        assert!(pending.is_current());
    }

    #[test]
    fn url_echo_of_a_selection_does_not_supersede_again() {
        let (mut sync, guard, mut history) = opened("/store-manager?tab=inventory");
        select_tab(&mut sync, &guard, "maintenance", &mut history);
        let pending = guard.scoped().next_ticket();

        assert_eq!(follow_location(&mut sync, &guard, &mut history), None);
        assert!(pending.is_current());
    }

    #[test]
    fn back_navigation_switches_tab_and_retires_fetches() {
        let (mut sync, guard, mut history) = opened("/store-manager?tab=inventory");
        history.push("/store-manager?tab=ara");
        assert_eq!(follow_location(&mut sync, &guard, &mut history), Some("ara"));
        let pending = guard.scoped().next_ticket();

        history.back();
        assert_eq!(follow_location(&mut sync, &guard, &mut history), Some("inventory"));
        assert!(!pending.is_current());
    }
}
