use leptos::prelude::*;

use crate::navigation::history::{BrowserHistory, History, HistoryMode};
use crate::navigation::location::Location;

/// App-wide UI state: the current URL as a signal plus sidebar collapse.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub location: RwSignal<Location>,
    /// Local, non-persisted.
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(BrowserHistory.location()),
            sidebar_collapsed: RwSignal::new(false),
        }
    }

    /// Follows back/forward. Runs once when the app mounts.
    pub fn init_router_integration(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let location = BrowserHistory.location();
            leptos::logging::log!("popstate: {}", location.to_href());
            this.set_location(location);
        });
    }

    /// Client-side navigation; same-path moves replace, path changes push.
    pub fn navigate(&self, href: &str) {
        let target = Location::parse(href);
        let mode = self
            .location
            .with_untracked(|current| HistoryMode::for_transition(current, &target));
        leptos::logging::log!("navigate: {} ({:?})", href, mode);
        let mut this = *self;
        this.go(href, mode);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|val| *val = !*val);
    }

    fn set_location(&self, location: Location) {
        if self.location.with_untracked(|current| *current != location) {
            self.location.set(location);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Browser history that also keeps [`AppGlobalContext::location`] current,
/// so every URL write is observed by the views.
impl History for AppGlobalContext {
    fn location(&self) -> Location {
        self.location.get_untracked()
    }

    fn push(&mut self, href: &str) {
        BrowserHistory.push(href);
        self.set_location(Location::parse(href));
    }

    fn replace(&mut self, href: &str) {
        BrowserHistory.replace(href);
        self.set_location(Location::parse(href));
    }
}
