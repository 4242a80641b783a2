use contracts::domain::inventory::{ItemLocation, NewInventoryItem};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::date_input::DateInput;

pub const TYPE_OPTIONS: [&str; 2] = ["component", "equipment"];
pub const CONDITION_OPTIONS: [&str; 4] = ["New", "Good", "Needs Repair", "Damaged"];

/// Blank or malformed counts become -1 so validation rejects them.
pub fn parse_count(value: &str) -> i64 {
    value.trim().parse::<i64>().unwrap_or(-1)
}

/// Text fields of the add/edit dialog.
#[derive(Clone, Copy)]
struct ItemFields {
    name: RwSignal<String>,
    model: RwSignal<String>,
    total: RwSignal<String>,
    available: RwSignal<String>,
    kind: RwSignal<String>,
    condition: RwSignal<String>,
    building: RwSignal<String>,
    room: RwSignal<String>,
    shelf: RwSignal<String>,
    description: RwSignal<String>,
    last_maintenance: RwSignal<String>,
}

impl ItemFields {
    fn new(item: &NewInventoryItem) -> Self {
        let (building, room, shelf) = match &item.location {
            ItemLocation::Shelf {
                building,
                room,
                shelf,
            } => (building.clone(), room.clone(), shelf.clone()),
            ItemLocation::Text(text) => (text.clone(), String::new(), String::new()),
        };
        Self {
            name: RwSignal::new(item.name.clone()),
            model: RwSignal::new(item.model.clone()),
            total: RwSignal::new(item.total.to_string()),
            available: RwSignal::new(item.available.to_string()),
            kind: RwSignal::new(item.kind.clone()),
            condition: RwSignal::new(item.condition.clone()),
            building: RwSignal::new(building),
            room: RwSignal::new(room),
            shelf: RwSignal::new(shelf),
            description: RwSignal::new(item.description.clone()),
            last_maintenance: RwSignal::new(
                item.last_maintenance.split('T').next().unwrap_or_default().to_string(),
            ),
        }
    }

    fn collect(&self, image_url: String) -> NewInventoryItem {
        NewInventoryItem {
            name: self.name.get_untracked().trim().to_string(),
            model: self.model.get_untracked().trim().to_string(),
            total: parse_count(&self.total.get_untracked()),
            available: parse_count(&self.available.get_untracked()),
            kind: self.kind.get_untracked(),
            condition: self.condition.get_untracked(),
            location: ItemLocation::Shelf {
                building: self.building.get_untracked(),
                room: self.room.get_untracked(),
                shelf: self.shelf.get_untracked(),
            },
            description: self.description.get_untracked(),
            last_maintenance: self.last_maintenance.get_untracked(),
            image_url,
        }
    }
}

/// Add/edit form for one inventory item. Validation runs before `on_submit`.
#[component]
pub fn ItemForm(
    initial: NewInventoryItem,
    #[prop(into)] submit_label: String,
    on_submit: Callback<NewInventoryItem>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
    /// Server-side failure from the last submit.
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let fields = ItemFields::new(&initial);
    let image_url = initial.image_url.clone();
    let field_errors: RwSignal<Vec<(&'static str, &'static str)>> = RwSignal::new(Vec::new());

    let error_for = move |field: &'static str| {
        move || {
            field_errors
                .get()
                .into_iter()
                .find(|(f, _)| *f == field)
                .map(|(_, msg)| view! { <div class="form-error">{msg}</div> })
        }
    };

    let submit = move |_| {
        let item = fields.collect(image_url.clone());
        let errors = item.field_errors();
        if errors.is_empty() {
            field_errors.set(Vec::new());
            on_submit.run(item);
        } else {
            log::warn!("inventory form rejected: {:?}", errors);
            field_errors.set(errors);
        }
    };

    view! {
        <div class="item-form">
            {move || {
                let has_field_errors = !field_errors.get().is_empty();
                let message = error.get().or_else(|| {
                    has_field_errors.then(|| "Please fill all fields correctly.".to_string())
                });
                message.map(|e| view! { <div class="alert alert--error">{e}</div> })
            }}

            <div class="form-grid">
                <label>"Name" <Input value=fields.name /></label>
                {error_for("name")}
                <label>"Model" <Input value=fields.model /></label>
                {error_for("model")}
                <label>"Total"
                    <input type="number" min="0"
                        prop:value=move || fields.total.get()
                        on:input=move |ev| fields.total.set(event_target_value(&ev)) />
                </label>
                {error_for("total")}
                <label>"Available"
                    <input type="number" min="0"
                        prop:value=move || fields.available.get()
                        on:input=move |ev| fields.available.set(event_target_value(&ev)) />
                </label>
                {error_for("available")}
                <label>"Type"
                    <Select value=fields.kind>
                        <option value="">"Select type"</option>
                        {TYPE_OPTIONS.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                    </Select>
                </label>
                {error_for("type")}
                <label>"Condition"
                    <Select value=fields.condition>
                        <option value="">"Select condition"</option>
                        {CONDITION_OPTIONS.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </Select>
                </label>
                {error_for("condition")}
                <label>"Building" <Input value=fields.building /></label>
                <label>"Room" <Input value=fields.room /></label>
                <label>"Shelf" <Input value=fields.shelf /></label>
                <label>"Last Maintenance"
                    <DateInput value=fields.last_maintenance />
                </label>
                <label class="form-grid__wide">"Description"
                    <Textarea value=fields.description attr:rows=3 />
                </label>
            </div>

            <div class="form-actions">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=busy
                >
                    {submit_label}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_parse_or_fail_validation() {
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count(""), -1);
        assert_eq!(parse_count("ten"), -1);

        let item = NewInventoryItem {
            name: "Relay".into(),
            model: "RL-5".into(),
            total: parse_count("x"),
            available: 0,
            kind: "component".into(),
            condition: "New".into(),
            ..NewInventoryItem::default()
        };
        assert_eq!(item.validate(), Err("Total must be a non-negative number.".to_string()));
    }
}
