use contracts::domain::inventory::{InventoryItem, InventoryQuery};
use contracts::domain::requests::{clamp_quantity, ComponentLine, NewEquipmentRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api as inventory_api;
use crate::domain::inventory::ui::grid::ComponentGrid;
use crate::domain::requests::api;
use crate::shared::api_utils::require_token;
use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::today_iso;
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedComponent {
    pub id: String,
    pub name: String,
    pub model: String,
    pub available: i64,
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl From<&InventoryItem> for SelectedComponent {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            model: item.model.clone(),
            available: item.available,
            image_url: item.image_url.clone(),
            quantity: 1,
        }
    }
}

/// Components picked from the grid, in pick order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection(Vec<SelectedComponent>);

impl Selection {
    /// Adds the item with quantity 1, or removes it when already picked.
    pub fn toggle(&mut self, item: &InventoryItem) {
        if let Some(pos) = self.0.iter().position(|c| c.id == item.id) {
            self.0.remove(pos);
        } else {
            self.0.push(SelectedComponent::from(item));
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|c| c.id != id);
    }

    pub fn set_quantity(&mut self, id: &str, requested: i64) {
        if let Some(c) = self.0.iter_mut().find(|c| c.id == id) {
            c.quantity = clamp_quantity(requested, c.available);
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.0.iter().map(|c| c.id.clone()).collect()
    }

    pub fn items(&self) -> &[SelectedComponent] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lines(&self) -> Vec<ComponentLine> {
        self.0
            .iter()
            .map(|c| ComponentLine {
                id: c.id.clone(),
                name: c.name.clone(),
                model: c.model.clone(),
                quantity: c.quantity,
            })
            .collect()
    }
}

#[derive(Clone, Copy)]
struct RequestFields {
    student_name: RwSignal<String>,
    student_id: RwSignal<String>,
    department: RwSignal<String>,
    course_code: RwSignal<String>,
    course_name: RwSignal<String>,
    instructor: RwSignal<String>,
    reason: RwSignal<String>,
    pickup_date: RwSignal<String>,
}

impl RequestFields {
    fn new() -> Self {
        Self {
            student_name: RwSignal::new(String::new()),
            student_id: RwSignal::new(String::new()),
            department: RwSignal::new(String::new()),
            course_code: RwSignal::new(String::new()),
            course_name: RwSignal::new(String::new()),
            instructor: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
            pickup_date: RwSignal::new(String::new()),
        }
    }

    fn collect(&self, selection: &Selection) -> NewEquipmentRequest {
        NewEquipmentRequest {
            student_name: self.student_name.get_untracked(),
            student_id: self.student_id.get_untracked(),
            department: self.department.get_untracked(),
            course_code: self.course_code.get_untracked(),
            course_name: self.course_name.get_untracked(),
            instructor: self.instructor.get_untracked(),
            reason: self.reason.get_untracked(),
            pickup_date: self.pickup_date.get_untracked(),
            components: selection.lines(),
        }
    }
}

/// Student component request: pick components, fill in course details,
/// submit to the department head.
#[component]
pub fn StudentRequestForm() -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let actions = use_fetch_guard();
    let components = RwSignal::new(Vec::<InventoryItem>::new());
    let selection = RwSignal::new(Selection::default());
    let fields = RequestFields::new();
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    Effect::new(move |_| {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_load_error.set(Some(e));
                set_loading.set(false);
                return;
            }
        };
        let ticket = guard.with_value(FetchGuard::next_ticket);
        let query = InventoryQuery {
            kind: Some("component".to_string()),
            ..InventoryQuery::default()
        };
        spawn_local(async move {
            let result = inventory_api::fetch_inventory(&token, &query).await;
            ticket.apply(|| {
                match result {
                    Ok(page) => components.set(page.items),
                    Err(e) => {
                        log::error!("component list failed: {}", e);
                        set_load_error.set(Some("Failed to load component list.".to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    });

    let on_select = Callback::new(move |item: InventoryItem| {
        selection.update(|s| s.toggle(&item));
    });

    let submit = move |_| {
        let body = selection.with_untracked(|s| fields.collect(s));
        if let Err(e) = body.validate() {
            log::warn!("request form rejected: {}", e);
            set_submit_error.set(Some(e));
            return;
        }
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_submit_error.set(Some(e));
                return;
            }
        };
        set_submit_error.set(None);
        set_submitting.set(true);
        let ticket = actions.with_value(FetchGuard::ticket);
        spawn_local(async move {
            let result = api::submit_request(&token, &body).await;
            if let Err(e) = &result {
                log::error!("submit request failed: {}", e);
            }
            ticket.apply(|| {
                match result {
                    Ok(()) => {
                        let count = body.components.len();
                        leptos::logging::log!("request submitted with {} component(s)", count);
                        set_submitted.set(true);
                    }
                    Err(_) => {
                        let message = "Failed to submit request. Please try again.";
                        set_submit_error.set(Some(message.to_string()));
                    }
                }
                set_submitting.set(false);
            });
        });
    };

    let can_submit = move || {
        !selection.with(|s| s.is_empty())
            && !fields.student_name.get().trim().is_empty()
            && !fields.department.get().trim().is_empty()
            && !fields.pickup_date.get().is_empty()
            && !submitting.get()
    };

    let text_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}" *"</span>
                <Input value=value />
            </label>
        }
    };

    view! {
        <PageFrame page_id="request--form" category=PAGE_CAT_FORM>
            <h2 class="page__title">"Student Request Portal"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                {move || {
                    if let Some(e) = load_error.get() {
                        return view! { <div class="alert alert--error">{e}</div> }.into_any();
                    }
                    if submitted.get() {
                        return view! {
                            <div class="alert alert--success">"Your request has been submitted!"</div>
                        }.into_any();
                    }
                    view! {
                        <div class="request-form">
                            <h3>"1. Browse Components"</h3>
                            <ComponentGrid
                                items=components
                                selected=Signal::derive(move || selection.with(|s| s.ids()))
                                on_select=on_select
                            />
                            <Show when=move || selection.with(|s| s.is_empty())>
                                <div class="alert alert--warning">"Please select at least one component."</div>
                            </Show>

                            <h3>"2. Student Information"</h3>
                            <div class="form-grid">
                                {text_field("Student Name", fields.student_name)}
                                {text_field("Student ID", fields.student_id)}
                                {text_field("Department", fields.department)}
                                {text_field("Course Code", fields.course_code)}
                                {text_field("Course Name", fields.course_name)}
                                {text_field("Instructor", fields.instructor)}
                            </div>

                            <h3>"3. Request Details"</h3>
                            <Show
                                when=move || !selection.with(|s| s.is_empty())
                                fallback=|| view! { <div class="alert alert--info">"No components selected."</div> }
                            >
                                <div class="selected-components">
                                    {move || selection.get().items().iter().cloned().map(|c| {
                                        let id_for_qty = c.id.clone();
                                        let id_for_remove = c.id.clone();
                                        let image = c.image_url.clone().unwrap_or_else(|| "/images/placeholder.png".to_string());
                                        view! {
                                            <div class="selected-component">
                                                <img class="selected-component__image" src=image alt=c.name.clone() />
                                                <div class="selected-component__info">
                                                    <div class="selected-component__name">{c.name.clone()}</div>
                                                    <div>"Model: "{c.model.clone()}</div>
                                                    <div>"Available: "{c.available}</div>
                                                </div>
                                                <input
                                                    type="number"
                                                    min="1"
                                                    max=c.available.max(1).to_string()
                                                    prop:value=c.quantity.to_string()
                                                    on:change=move |ev| {
                                                        let requested = event_target_value(&ev).trim().parse::<i64>().unwrap_or(1);
                                                        selection.update(|s| s.set_quantity(&id_for_qty, requested));
                                                    }
                                                />
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| selection.update(|s| s.remove(&id_for_remove))
                                                >
                                                    {icon("x")}
                                                </Button>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>

                            <label class="form-field form-field--wide">
                                <span class="form-field__label">"Reason for request"</span>
                                <Textarea value=fields.reason attr:rows=3 />
                            </label>
                            <label class="form-field">
                                <span class="form-field__label">"Preferred Pickup Date:"</span>
                                <DateInput value=fields.pickup_date min=today_iso() />
                            </label>

                            {move || submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=submit
                                disabled=Signal::derive(move || !can_submit())
                            >
                                {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                            </Button>
                        </div>
                    }.into_any()
                }}
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::inventory::ItemLocation;

    fn item(id: &str, available: i64) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            name: format!("Part {}", id),
            model: format!("M-{}", id),
            total: 10,
            available,
            kind: "component".into(),
            condition: "New".into(),
            location: ItemLocation::default(),
            description: String::new(),
            last_maintenance: None,
            image_url: None,
        }
    }

    #[test]
    fn clicking_twice_deselects() {
        let mut selection = Selection::default();
        selection.toggle(&item("a", 3));
        selection.toggle(&item("b", 3));
        assert_eq!(selection.ids(), vec!["a", "b"]);
        selection.toggle(&item("a", 3));
        assert_eq!(selection.ids(), vec!["b"]);
    }

    #[test]
    fn quantities_stay_within_stock() {
        let mut selection = Selection::default();
        selection.toggle(&item("a", 3));
        selection.set_quantity("a", 7);
        assert_eq!(selection.items()[0].quantity, 3);
        selection.set_quantity("a", -2);
        assert_eq!(selection.items()[0].quantity, 1);
        selection.set_quantity("missing", 2);

        let lines = selection.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "a");
        assert_eq!(lines[0].model, "M-a");
        assert_eq!(lines[0].quantity, 1);
    }
}
