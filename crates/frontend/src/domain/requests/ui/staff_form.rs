use contracts::system::roles::Role;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};

pub const COMPONENT_OPTIONS: [&str; 12] = [
    "Resistor",
    "Capacitor",
    "LED",
    "Sensor Kit",
    "Breadboard",
    "IC",
    "Transistor",
    "Microcontroller",
    "Relay",
    "Switch",
    "Display",
    "Other",
];

pub const PLACE_OPTIONS: [&str; 6] = ["Shelf A", "Shelf B", "Shelf C", "Lab 1", "Lab 2", "Other"];

/// How long the confirmation stays visible.
const CONFIRMATION_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct StaffRequestLine {
    pub component: String,
    pub quantity: u32,
    pub place: String,
    pub reason: String,
}

impl Default for StaffRequestLine {
    fn default() -> Self {
        Self {
            component: String::new(),
            quantity: 1,
            place: String::new(),
            reason: String::new(),
        }
    }
}

/// Rows of a staff request. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffRequestLines(Vec<StaffRequestLine>);

impl Default for StaffRequestLines {
    fn default() -> Self {
        Self(vec![StaffRequestLine::default()])
    }
}

impl StaffRequestLines {
    pub fn add(&mut self) {
        self.0.push(StaffRequestLine::default());
    }

    /// The last remaining row cannot be removed.
    pub fn remove(&mut self, idx: usize) {
        if self.0.len() > 1 && idx < self.0.len() {
            self.0.remove(idx);
        }
    }

    pub fn update(&mut self, idx: usize, f: impl FnOnce(&mut StaffRequestLine)) {
        if let Some(line) = self.0.get_mut(idx) {
            f(line);
        }
    }

    pub fn lines(&self) -> &[StaffRequestLine] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        let incomplete = self.0.iter().any(|line| {
            line.component.is_empty() || line.place.is_empty() || line.reason.trim().is_empty()
        });
        if incomplete {
            return Err("All fields are required.".into());
        }
        Ok(())
    }
}

/// Multi-row request form for lecturers and (S)ARAs. Submission is
/// acknowledged locally; the rows are reset afterwards.
#[component]
pub fn StaffRequestForm(role: Role) -> impl IntoView {
    let lines = RwSignal::new(StaffRequestLines::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitted, set_submitted) = signal(false);
    let confirmation = use_fetch_guard();

    let submit = move |_| {
        if let Err(e) = lines.with_untracked(|l| l.validate()) {
            log::warn!("staff request rejected: {}", e);
            set_error.set(Some(e));
            return;
        }
        let count = lines.with_untracked(|l| l.len());
        leptos::logging::log!("{} request with {} row(s) submitted", role, count);
        set_error.set(None);
        set_submitted.set(true);
        lines.set(StaffRequestLines::default());
        let ticket = confirmation.with_value(FetchGuard::next_ticket);
        spawn_local(async move {
            TimeoutFuture::new(CONFIRMATION_MS).await;
            ticket.apply(|| set_submitted.set(false));
        });
    };

    let title = format!("{} Component & Equipment Request", role.display_name());

    view! {
        <PageFrame page_id="request--form" category=PAGE_CAT_FORM class="staff-request">
            <h2 class="page__title">{icon("inventory")}" "{title}</h2>
            <div class="staff-request__rows">
                {move || {
                    let count = lines.with(|l| l.len());
                    lines.get().lines().iter().cloned().enumerate().map(|(idx, line)| {
                        let component = RwSignal::new(line.component.clone());
                        let place = RwSignal::new(line.place.clone());
                        let reason = RwSignal::new(line.reason.clone());
                        Effect::new(move |_| {
                            let value = component.get();
                            lines.update_untracked(|l| l.update(idx, |row| row.component = value));
                        });
                        Effect::new(move |_| {
                            let value = place.get();
                            lines.update_untracked(|l| l.update(idx, |row| row.place = value));
                        });
                        Effect::new(move |_| {
                            let value = reason.get();
                            lines.update_untracked(|l| l.update(idx, |row| row.reason = value));
                        });
                        view! {
                            <div class="staff-request__row">
                                <label class="form-field">
                                    <span class="form-field__label">"Component"</span>
                                    <Select value=component>
                                        <option value="">"Select component"</option>
                                        {COMPONENT_OPTIONS.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
                                    </Select>
                                </label>
                                <label class="form-field">
                                    <span class="form-field__label">"Quantity"</span>
                                    <input
                                        type="number"
                                        min="1"
                                        prop:value=line.quantity.to_string()
                                        on:change=move |ev| {
                                            let qty = event_target_value(&ev).trim().parse::<i64>().unwrap_or(1).max(1) as u32;
                                            lines.update_untracked(|l| l.update(idx, |row| row.quantity = qty));
                                        }
                                    />
                                </label>
                                <label class="form-field">
                                    <span class="form-field__label">"Place"</span>
                                    <Select value=place>
                                        <option value="">"Select place"</option>
                                        {PLACE_OPTIONS.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
                                    </Select>
                                </label>
                                <label class="form-field form-field--wide">
                                    <span class="form-field__label">"Reason for Request"</span>
                                    <Textarea value=reason attr:rows=2 />
                                </label>
                                {(count > 1).then(|| view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| lines.update(|l| l.remove(idx))
                                    >
                                        "Remove"
                                    </Button>
                                })}
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <Button appearance=ButtonAppearance::Secondary on_click=move |_| lines.update(|l| l.add())>
                {icon("plus")}" Add Another Component"
            </Button>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Button appearance=ButtonAppearance::Primary on_click=submit>
                "Submit Request"
            </Button>

            <Show when=move || submitted.get()>
                <div class="staff-request__confirmation">
                    <h3>"Request Submitted!"</h3>
                    <p>"Your request has been received. You will be notified once it is processed."</p>
                </div>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_one_row_remains() {
        let mut lines = StaffRequestLines::default();
        lines.remove(0);
        assert_eq!(lines.len(), 1);
        lines.add();
        lines.add();
        lines.remove(1);
        assert_eq!(lines.len(), 2);
        lines.remove(7);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn every_row_must_be_complete() {
        let mut lines = StaffRequestLines::default();
        assert_eq!(lines.validate(), Err("All fields are required.".to_string()));
        lines.update(0, |row| {
            row.component = "LED".into();
            row.place = "Lab 1".into();
            row.reason = "Lab session".into();
        });
        assert_eq!(lines.validate(), Ok(()));
        lines.add();
        assert!(lines.validate().is_err());
    }
}
