use contracts::domain::inventory::InventoryItem;
use leptos::prelude::*;
use thaw::*;

/// Items whose name or model contains `search`, ignoring case.
pub fn filter_items(items: &[InventoryItem], search: &str) -> Vec<InventoryItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.model.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Whether the card for `id` is among `selected`.
pub fn selection_flag(selected: Signal<Vec<String>>, id: String) -> Signal<bool> {
    Signal::derive(move || selected.with(|s| s.contains(&id)))
}

/// Card grid of components with a local search box. Cards are clickable
/// only when `on_select` is given; `selected` holds the ids to highlight.
#[component]
pub fn ComponentGrid(
    #[prop(into)] items: Signal<Vec<InventoryItem>>,
    #[prop(into, default = Signal::stored(Vec::new()))] selected: Signal<Vec<String>>,
    #[prop(optional)] on_select: Option<Callback<InventoryItem>>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let visible = Memo::new(move |_| items.with(|all| filter_items(all, &search.get())));

    view! {
        <div class="component-grid">
            <div class="component-grid__search">
                <Input value=search placeholder=placeholder.unwrap_or("Search component or model...") />
            </div>
            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=|| view! { <div class="empty-state">"No components found."</div> }
            >
                <div class="component-grid__cards">
                    <For
                        each=move || visible.get()
                        key=|item| item.id.clone()
                        children=move |item: InventoryItem| {
                            let is_selected = selection_flag(selected, item.id.clone());
                            let image = item.image_url.clone().unwrap_or_else(|| "/images/placeholder.png".to_string());
                            let clickable = on_select.is_some();
                            let name = item.name.clone();
                            let model = item.model.clone();
                            let available = item.available;
                            let for_click = item;
                            view! {
                                <div
                                    class="component-card"
                                    class:component-card--selected=move || is_selected.get()
                                    class:component-card--clickable=clickable
                                    on:click=move |_| {
                                        if let Some(cb) = on_select {
                                            cb.run(for_click.clone());
                                        }
                                    }
                                >
                                    <img class="component-card__image" src=image alt=name.clone() />
                                    <div class="component-card__name">{name}</div>
                                    <Badge>{model}</Badge>
                                    <div class="component-card__stock">
                                        <b>"Available: "</b>{available}
                                    </div>
                                    <Show when=move || is_selected.get()>
                                        <span class="component-card__check" title="Selected">"✓"</span>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::inventory::ItemLocation;

    fn item(id: &str, name: &str, model: &str) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            name: name.into(),
            model: model.into(),
            total: 5,
            available: 5,
            kind: "component".into(),
            condition: "New".into(),
            location: ItemLocation::default(),
            description: String::new(),
            last_maintenance: None,
            image_url: None,
        }
    }

    #[test]
    fn search_matches_name_or_model_case_insensitively() {
        let items = vec![item("1", "Resistor", "R-100"), item("2", "Breadboard", "BB-101")];
        assert_eq!(filter_items(&items, "").len(), 2);
        assert_eq!(filter_items(&items, "  resis ")[0].id, "1");
        assert_eq!(filter_items(&items, "bb-")[0].id, "2");
        assert!(filter_items(&items, "relay").is_empty());
    }

    #[test]
    fn selection_flag_tracks_the_selected_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let selected = RwSignal::new(vec!["2".to_string()]);
            let flag = selection_flag(selected.into(), "1".to_string());
            let highlight = flag;
            assert!(!flag.get_untracked());

            selected.update(|s| s.push("1".to_string()));
            assert!(flag.get_untracked());
            assert!(highlight.get_untracked());

            selected.update(|s| s.clear());
            assert!(!highlight.get_untracked());
        });
    }
}
