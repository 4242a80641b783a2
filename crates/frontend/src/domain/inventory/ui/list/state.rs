use std::collections::BTreeSet;

use contracts::domain::inventory::{InventoryItem, InventoryQuery};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct InventoryListState {
    pub items: Vec<InventoryItem>,
    pub search_query: String,
    pub model_filter: Option<String>,
    pub place_filter: Option<String>,
    pub condition_filter: Option<String>,
    /// 0-indexed; the backend counts from 1.
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for InventoryListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            model_filter: None,
            place_filter: None,
            condition_filter: None,
            page: 0,
            page_size: 10,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl InventoryListState {
    pub fn query(&self, kind: Option<&str>) -> InventoryQuery {
        let search = self.search_query.trim();
        InventoryQuery {
            search: (!search.is_empty()).then(|| search.to_string()),
            model: self.model_filter.clone(),
            place: self.place_filter.clone(),
            condition: self.condition_filter.clone(),
            kind: kind.map(str::to_string),
            page: Some(self.page as u32 + 1),
            limit: Some(self.page_size as u32),
        }
    }

    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.model_filter = None;
        self.place_filter = None;
        self.condition_filter = None;
        self.page = 0;
    }
}

pub fn create_state() -> RwSignal<InventoryListState> {
    RwSignal::new(InventoryListState::default())
}

pub fn recalc_pagination(state: &mut InventoryListState) {
    let total_pages = if state.total_count == 0 {
        1
    } else {
        state.total_count.div_ceil(state.page_size.max(1))
    };
    state.total_pages = total_pages;
    if state.page >= total_pages {
        state.page = total_pages.saturating_sub(1);
    }
}

/// Choices for the filter selects, taken from the rows already loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub models: Vec<String>,
    pub places: Vec<String>,
    pub conditions: Vec<String>,
}

pub fn filter_options(items: &[InventoryItem]) -> FilterOptions {
    fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
        values
            .filter(|v| !v.trim().is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    FilterOptions {
        models: distinct(items.iter().map(|i| i.model.clone())),
        places: distinct(items.iter().map(|i| i.location.display())),
        conditions: distinct(items.iter().map(|i| i.condition.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::inventory::ItemLocation;

    fn item(model: &str, place: &str, condition: &str) -> InventoryItem {
        InventoryItem {
            id: model.to_string(),
            name: "Part".into(),
            model: model.into(),
            total: 5,
            available: 3,
            kind: "component".into(),
            condition: condition.into(),
            location: ItemLocation::Text(place.into()),
            description: String::new(),
            last_maintenance: None,
            image_url: None,
        }
    }

    #[test]
    fn pagination_is_recalculated_and_page_clamped() {
        let mut state = InventoryListState::default();
        recalc_pagination(&mut state);
        assert_eq!(state.total_pages, 1);

        state.total_count = 25;
        state.page = 7;
        recalc_pagination(&mut state);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.page, 2);

        state.total_count = 20;
        recalc_pagination(&mut state);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn query_uses_one_based_pages_and_skips_blank_search() {
        let mut state = InventoryListState {
            search_query: "   ".into(),
            page: 1,
            page_size: 20,
            ..InventoryListState::default()
        };
        let q = state.query(Some("component"));
        assert_eq!(q.search, None);
        assert_eq!(q.page, Some(2));
        assert_eq!(q.limit, Some(20));
        assert_eq!(q.kind.as_deref(), Some("component"));

        state.search_query = " relay ".into();
        state.condition_filter = Some("Good".into());
        let q = state.query(None);
        assert_eq!(q.search.as_deref(), Some("relay"));
        assert_eq!(q.condition.as_deref(), Some("Good"));

        state.reset_filters();
        assert_eq!(state.query(None).condition, None);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn filter_options_are_distinct_sorted_and_non_blank() {
        let items = vec![
            item("R-100", "Shelf B", "Good"),
            item("BB-101", "Shelf A", "Good"),
            item("R-100", "", "Damaged"),
        ];
        let options = filter_options(&items);
        assert_eq!(options.models, vec!["BB-101", "R-100"]);
        assert_eq!(options.places, vec!["Shelf A", "Shelf B"]);
        assert_eq!(options.conditions, vec!["Damaged", "Good"]);
    }
}
