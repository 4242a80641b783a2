//! Session history port.
//!
//! Navigation code talks to [`History`] instead of `window.history` so that
//! back-button behaviour can be checked without a browser.

use super::location::Location;
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New back-button entry.
    Push,
    /// Rewrite the current entry in place.
    Replace,
}

impl HistoryMode {
    /// Moving between tabs of the page already shown replaces the entry;
    /// anything that changes the path pushes a new one.
    pub fn for_transition(current: &Location, target: &Location) -> Self {
        if current.path == target.path {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        }
    }
}

pub trait History {
    fn location(&self) -> Location;
    fn push(&mut self, href: &str);
    fn replace(&mut self, href: &str);

    fn go(&mut self, href: &str, mode: HistoryMode) {
        match mode {
            HistoryMode::Push => self.push(href),
            HistoryMode::Replace => self.replace(href),
        }
    }
}

/// `window.history` / `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn location(&self) -> Location {
        let Some(location) = window().map(|w| w.location()) else {
            return Location::default();
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Location::from_parts(&path, &search)
    }

    fn push(&mut self, href: &str) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
            {
                log::error!("push_state failed for {}: {:?}", href, e);
            }
        }
    }

    fn replace(&mut self, href: &str) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
            {
                log::error!("replace_state failed for {}: {:?}", href, e);
            }
        }
    }
}

/// In-memory history stack with back/forward.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Moves one entry back and returns the location now shown.
    pub fn back(&mut self) -> Option<Location> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.location())
    }

    pub fn forward(&mut self) -> Option<Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.location())
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        Location::parse(&self.entries[self.index])
    }

    fn push(&mut self, href: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(href.to_string());
        self.index += 1;
    }

    fn replace(&mut self, href: &str) {
        self.entries[self.index] = href.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_replaces_other_path_pushes() {
        let here = Location::parse("/student?tab=request");
        assert_eq!(
            HistoryMode::for_transition(&here, &Location::parse("/student?tab=reports")),
            HistoryMode::Replace
        );
        assert_eq!(
            HistoryMode::for_transition(&here, &Location::parse("/login")),
            HistoryMode::Push
        );
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut h = MemoryHistory::new("/");
        h.push("/login");
        h.push("/student");
        assert_eq!(h.back().map(|l| l.path), Some("/login".to_string()));
        h.push("/register");
        assert_eq!(h.len(), 3);
        assert_eq!(h.forward(), None);
        assert_eq!(h.back().map(|l| l.path), Some("/login".to_string()));
    }

    #[test]
    fn replace_does_not_grow() {
        let mut h = MemoryHistory::new("/ara?tab=request");
        h.go("/ara?tab=inventory", HistoryMode::Replace);
        assert_eq!(h.len(), 1);
        assert!(!h.can_go_back());
        assert_eq!(h.location().tab(), Some("inventory"));
    }
}
