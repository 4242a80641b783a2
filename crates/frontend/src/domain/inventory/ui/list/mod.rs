mod state;

pub use state::{filter_options, recalc_pagination, FilterOptions, InventoryListState};

use contracts::domain::inventory::{InventoryItem, NewInventoryItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::item_form::ItemForm;
use crate::domain::inventory::api;
use crate::shared::api_utils::require_token;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;
use state::create_state;

/// Which dialog is open over the table.
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    None,
    New,
    Existing(InventoryItem),
}

/// Inventory table with server-side filters and pagination. `can_edit`
/// enables adding and editing items.
#[component]
pub fn InventoryList(#[prop(optional)] can_edit: bool) -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let save_guard = use_fetch_guard();
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let options = RwSignal::new(FilterOptions::default());

    let editing = RwSignal::new(Editing::None);
    let dialog_open = RwSignal::new(false);
    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal::<Option<String>>(None);

    let load_data = move || {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let query = state.with_untracked(|s| s.query(None));
        let ticket = guard.with_value(FetchGuard::next_ticket);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_inventory(&token, &query).await;
            ticket.apply(|| {
                match result {
                    Ok(page) => {
                        options.update(|o| {
                            let fresh = filter_options(&page.items);
                            merge_options(o, fresh);
                        });
                        state.update(|s| {
                            s.items = page.items;
                            s.total_count = page.total as usize;
                            s.is_loaded = true;
                            recalc_pagination(s);
                        });
                    }
                    Err(e) => {
                        log::error!("inventory load failed: {}", e);
                        state.update(|s| s.items.clear());
                        set_error.set(Some(format!("Failed to load inventory: {}", e)));
                    }
                }
                set_loading.set(false);
            });
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());
    let model_signal = RwSignal::new(String::new());
    let place_signal = RwSignal::new(String::new());
    let condition_signal = RwSignal::new(String::new());

    let apply_filters = move || {
        let non_empty = |v: String| (!v.is_empty()).then_some(v);
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.model_filter = non_empty(model_signal.get_untracked());
            s.place_filter = non_empty(place_signal.get_untracked());
            s.condition_filter = non_empty(condition_signal.get_untracked());
            s.page = 0;
        });
        load_data();
    };

    let reset_filters = move || {
        search_signal.set(String::new());
        model_signal.set(String::new());
        place_signal.set(String::new());
        condition_signal.set(String::new());
        state.update(|s| s.reset_filters());
        load_data();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        load_data();
    };

    let open_dialog = move |target: Editing| {
        set_save_error.set(None);
        editing.set(target);
        dialog_open.set(true);
    };

    let close_dialog = move || {
        dialog_open.set(false);
        editing.set(Editing::None);
    };

    let save_item = move |item: NewInventoryItem| {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_save_error.set(Some(e));
                return;
            }
        };
        let target = editing.get_untracked();
        set_saving.set(true);
        let ticket = save_guard.with_value(FetchGuard::ticket);
        spawn_local(async move {
            let result = match &target {
                Editing::Existing(existing) => api::update_item(&token, &existing.id, &item).await,
                _ => api::create_item(&token, &item).await,
            };
            ticket.apply(|| {
                set_saving.set(false);
                match result {
                    Ok(()) => {
                        leptos::logging::log!("saved inventory item '{}'", item.name);
                        close_dialog();
                        if target == Editing::New {
                            state.update(|s| s.page = 0);
                        }
                        load_data();
                    }
                    Err(e) => set_save_error.set(Some(e)),
                }
            });
        });
    };

    view! {
        <PageFrame page_id="inventory--list" category=PAGE_CAT_LIST>
            <PageHeader title=if can_edit { "Inventory Management" } else { "Inventory" }>
                <Badge>{move || state.get().total_count.to_string()}</Badge>
                {can_edit.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_dialog(Editing::New)>
                        {icon("plus")}
                        " Add Item"
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_signal placeholder="Search by item name or model number" />
                            </div>
                            <Select value=model_signal>
                                <option value="">"All Categories"</option>
                                {move || options.get().models.into_iter()
                                    .map(|m| view! { <option value=m.clone()>{m.clone()}</option> })
                                    .collect_view()}
                            </Select>
                            <Select value=place_signal>
                                <option value="">"All Locations"</option>
                                {move || options.get().places.into_iter()
                                    .map(|p| view! { <option value=p.clone()>{p.clone()}</option> })
                                    .collect_view()}
                            </Select>
                            <Select value=condition_signal>
                                <option value="">"All Conditions"</option>
                                {move || options.get().conditions.into_iter()
                                    .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                    .collect_view()}
                            </Select>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                                "Search"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_filters()>
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Item Name"</TableHeaderCell>
                                <TableHeaderCell>"Model Number"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Location"</TableHeaderCell>
                                <TableHeaderCell>"Condition"</TableHeaderCell>
                                <TableHeaderCell>"Last Maintenance"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                {can_edit.then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.clone()
                                children=move |item: InventoryItem| {
                                    let stock = format!("{} / {}", item.available, item.total);
                                    let last = item.last_maintenance.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                                    let in_stock = item.is_available();
                                    let location = item.location.display();
                                    let name = item.name.clone();
                                    let model = item.model.clone();
                                    let kind = item.kind.clone();
                                    let condition = item.condition.clone();
                                    let description = item.description.clone();
                                    let for_edit = item;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{model}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{kind}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=if in_stock { "badge badge--success" } else { "badge badge--error" }>{stock}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{location}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{condition}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{last}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                                            {can_edit.then(|| view! {
                                                <TableCell>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_dialog(Editing::Existing(for_edit.clone()))
                                                    >
                                                        "Edit"
                                                    </Button>
                                                </TableCell>
                                            })}
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="empty-state">"No items found."</div>
                    </Show>
                </div>
            </div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || match editing.get() {
                                Editing::Existing(_) => "Edit Inventory Item",
                                _ => "Add New Inventory Item",
                            }}
                        </DialogTitle>
                        <DialogContent>
                            {move || {
                                let (initial, label) = match editing.get() {
                                    Editing::None => return None,
                                    Editing::New => (NewInventoryItem::default(), "Add Item"),
                                    Editing::Existing(item) => (NewInventoryItem::from(&item), "Save"),
                                };
                                Some(view! {
                                    <ItemForm
                                        initial=initial
                                        submit_label=label
                                        on_submit=Callback::new(save_item)
                                        on_cancel=Callback::new(move |_| close_dialog())
                                        busy=saving
                                        error=save_error
                                    />
                                })
                            }}
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

/// Keeps options seen on earlier pages so a filter never hides its own value.
fn merge_options(current: &mut FilterOptions, fresh: FilterOptions) {
    fn merge(into: &mut Vec<String>, from: Vec<String>) {
        for value in from {
            if !into.contains(&value) {
                into.push(value);
            }
        }
        into.sort();
    }
    merge(&mut current.models, fresh.models);
    merge(&mut current.places, fresh.places);
    merge(&mut current.conditions, fresh.conditions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_accumulate_across_pages() {
        let mut current = FilterOptions {
            models: vec!["R-100".into()],
            places: vec![],
            conditions: vec!["Good".into()],
        };
        merge_options(
            &mut current,
            FilterOptions {
                models: vec!["BB-101".into(), "R-100".into()],
                places: vec!["Lab 1".into()],
                conditions: vec![],
            },
        );
        assert_eq!(current.models, vec!["BB-101", "R-100"]);
        assert_eq!(current.places, vec!["Lab 1"]);
        assert_eq!(current.conditions, vec!["Good"]);
    }
}
