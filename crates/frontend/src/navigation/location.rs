//! Parsed browser location: path plus query parameters.

use std::collections::BTreeMap;

/// Query key that mirrors the active tab of a tabbed page.
pub const TAB_PARAM: &str = "tab";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Location {
    /// Builds a location from `window.location.pathname` and `.search`.
    pub fn from_parts(pathname: &str, search: &str) -> Self {
        let path = if pathname.is_empty() { "/" } else { pathname };
        let query: BTreeMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        Self {
            path: path.to_string(),
            query,
        }
    }

    /// Parses an in-app href such as `/ara?tab=inventory`.
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((path, search)) => Self::from_parts(path, search),
            None => Self::from_parts(without_fragment, ""),
        }
    }

    pub fn tab(&self) -> Option<&str> {
        self.query.get(TAB_PARAM).map(String::as_str)
    }

    /// Same path and other parameters, `tab` replaced.
    pub fn with_tab(&self, tab: &str) -> Self {
        let mut next = self.clone();
        next.query.insert(TAB_PARAM.to_string(), tab.to_string());
        next
    }

    pub fn search(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        let qs = serde_qs::to_string(&self.query).unwrap_or_default();
        format!("?{}", qs)
    }

    pub fn to_href(&self) -> String {
        format!("{}{}", self.path, self.search())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_tab() {
        let loc = Location::parse("/store-manager?tab=approved");
        assert_eq!(loc.path, "/store-manager");
        assert_eq!(loc.tab(), Some("approved"));
    }

    #[test]
    fn empty_inputs_default_to_root_without_query() {
        let loc = Location::from_parts("", "");
        assert_eq!(loc.path, "/");
        assert_eq!(loc.tab(), None);
        assert_eq!(loc.to_href(), "/");
    }

    #[test]
    fn with_tab_keeps_other_parameters() {
        let loc = Location::parse("/ara?search=led&tab=request#top");
        let next = loc.with_tab("inventory");
        assert_eq!(next.tab(), Some("inventory"));
        assert_eq!(next.query.get("search").map(String::as_str), Some("led"));
        assert_eq!(next.to_href(), "/ara?search=led&tab=inventory");
    }
}
