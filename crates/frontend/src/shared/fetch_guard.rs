//! Supersession of tab-scoped fetches.
//!
//! A pane takes a [`FetchTicket`] before it starts a request and only applies
//! the response while the ticket is still current. The role page owns the
//! outer guard and calls [`FetchGuard::supersede`] on every tab switch, which
//! invalidates every outstanding ticket of every pane. Each pane works on a
//! [`FetchGuard::scoped`] child: [`FetchGuard::next_ticket`] retires the
//! pane's own earlier requests, and disposing the pane retires all of them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
    outer: Option<Arc<AtomicU64>>,
}

#[derive(Debug, Clone)]
struct Stamp {
    counter: Arc<AtomicU64>,
    generation: u64,
}

impl Stamp {
    fn of(counter: &Arc<AtomicU64>) -> Self {
        Self {
            counter: Arc::clone(counter),
            generation: counter.load(Ordering::Relaxed),
        }
    }

    fn holds(&self) -> bool {
        self.counter.load(Ordering::Relaxed) == self.generation
    }
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    own: Stamp,
    outer: Option<Stamp>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A child guard: superseded together with `self`, and on its own.
    pub fn scoped(&self) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            outer: Some(Arc::clone(&self.generation)),
        }
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            own: Stamp::of(&self.generation),
            outer: self.outer.as_ref().map(Stamp::of),
        }
    }

    /// Supersedes every earlier ticket of this guard, then hands out a new one.
    pub fn next_ticket(&self) -> FetchTicket {
        self.supersede();
        self.ticket()
    }

    pub fn supersede(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

/// A pane-scoped guard under the enclosing role page's guard (or a private
/// one outside a page). Its tickets go stale once the calling owner is
/// cleaned up, so completions never reach disposed signals.
pub fn use_fetch_guard() -> StoredValue<FetchGuard> {
    let guard = use_context::<FetchGuard>().unwrap_or_default().scoped();
    let retired = guard.clone();
    on_cleanup(move || retired.supersede());
    StoredValue::new(guard)
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.own.holds() && self.outer.as_ref().map_or(true, Stamp::holds)
    }

    /// Runs `apply` only for a current ticket; returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_current() {
            apply();
            true
        } else {
            log::debug!("discarding superseded fetch (generation {})", self.own.generation);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_result_for_previous_tab_is_discarded() {
        let guard = FetchGuard::new();
        let mut shown: Vec<&str> = Vec::new();

        // Tab A starts loading, then the user switches to B before it lands.
        let ticket_a = guard.ticket();
        guard.supersede();
        let ticket_b = guard.ticket();

        assert!(ticket_b.apply(|| shown.push("B")));
        assert!(!ticket_a.apply(|| shown.push("A")));
        assert_eq!(shown, vec!["B"]);
    }

    #[test]
    fn tickets_stay_current_without_a_switch() {
        let guard = FetchGuard::new();
        let first = guard.ticket();
        let second = guard.clone().ticket();
        assert!(first.is_current());
        assert!(second.is_current());
        guard.supersede();
        assert!(!first.is_current());
        assert!(!second.is_current());
    }

    #[test]
    fn newer_load_in_a_pane_supersedes_the_older_one() {
        let pane = FetchGuard::new().scoped();
        let first = pane.next_ticket();
        let second = pane.next_ticket();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn page_switch_retires_every_pane_ticket() {
        let page = FetchGuard::new();
        let list = page.scoped();
        let options = page.scoped();
        let a = list.next_ticket();
        let b = options.next_ticket();

        // Sibling scopes do not retire each other.
        assert!(a.is_current());
        assert!(b.is_current());

        page.supersede();
        assert!(!a.is_current());
        assert!(!b.is_current());
        assert!(list.ticket().is_current());
    }

    #[test]
    fn completion_after_pane_disposal_is_dropped() {
        let root = Owner::new();
        let pane = root.child();
        let (ticket, items) = pane.with(|| {
            let guard = use_fetch_guard();
            let items = RwSignal::new(0usize);
            (guard.with_value(FetchGuard::ticket), items)
        });
        assert!(ticket.is_current());

        pane.cleanup();

        assert!(!ticket.is_current());
        let ran = ticket.apply(|| items.set(1));
        assert!(!ran);
    }

    #[test]
    fn pane_guard_follows_the_provided_page_guard() {
        let root = Owner::new();
        let page = FetchGuard::new();
        let ticket = root.with(|| {
            provide_context(page.clone());
            use_fetch_guard().with_value(FetchGuard::ticket)
        });
        assert!(ticket.is_current());
        page.supersede();
        assert!(!ticket.is_current());
    }
}
