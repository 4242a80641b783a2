use chrono::NaiveDate;
use contracts::domain::inventory::{InventoryItem, InventoryQuery};
use contracts::domain::maintenance::{MaintenanceRecord, MaintenanceStatus, NewMaintenanceRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api as inventory_api;
use crate::domain::maintenance::api;
use crate::shared::api_utils::require_token;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{format_date, is_overdue};
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;

pub const MAINTENANCE_TYPES: [&str; 2] = ["Calibration", "Maintenance"];

/// Scheduled work whose next due date has already passed.
pub fn is_due(record: &MaintenanceRecord, today: NaiveDate) -> bool {
    record.status() != Some(MaintenanceStatus::Completed) && is_overdue(&record.next, today)
}

#[derive(Clone, Copy)]
struct RecordFields {
    item: RwSignal<String>,
    kind: RwSignal<String>,
    last: RwSignal<String>,
    next: RwSignal<String>,
    status: RwSignal<String>,
}

impl RecordFields {
    fn new() -> Self {
        Self {
            item: RwSignal::new(String::new()),
            kind: RwSignal::new(String::new()),
            last: RwSignal::new(String::new()),
            next: RwSignal::new(String::new()),
            status: RwSignal::new(MaintenanceStatus::Scheduled.as_str().to_string()),
        }
    }

    fn reset(&self) {
        self.item.set(String::new());
        self.kind.set(String::new());
        self.last.set(String::new());
        self.next.set(String::new());
        self.status.set(MaintenanceStatus::Scheduled.as_str().to_string());
    }

    fn collect(&self) -> NewMaintenanceRecord {
        NewMaintenanceRecord {
            item: self.item.get_untracked(),
            kind: self.kind.get_untracked(),
            last: self.last.get_untracked(),
            next: self.next.get_untracked(),
            actions: MaintenanceStatus::parse(&self.status.get_untracked())
                .unwrap_or(MaintenanceStatus::Scheduled),
        }
    }
}

/// Maintenance log with text/status filters and an add dialog.
#[component]
pub fn MaintenanceSection() -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let options_guard = use_fetch_guard();
    let save_guard = use_fetch_guard();
    let records = RwSignal::new(Vec::<MaintenanceRecord>::new());
    let inventory = RwSignal::new(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let today = chrono::Local::now().date_naive();

    let fields = RecordFields::new();
    let dialog_open = RwSignal::new(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_error.set(Some(e));
                set_loading.set(false);
                return;
            }
        };
        let ticket = guard.with_value(FetchGuard::next_ticket);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_maintenance(&token).await;
            ticket.apply(|| {
                match result {
                    Ok(list) => {
                        set_error.set(None);
                        records.set(list);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        });
    };

    Effect::new(move |_| {
        load();
        let Ok(token) = require_token(session.token()) else {
            return;
        };
        let ticket = options_guard.with_value(FetchGuard::next_ticket);
        spawn_local(async move {
            match inventory_api::fetch_inventory(&token, &InventoryQuery::default()).await {
                Ok(page) => {
                    ticket.apply(|| inventory.set(page.items));
                }
                Err(e) => log::error!("inventory for maintenance form failed: {}", e),
            }
        });
    });

    let visible = Memo::new(move |_| {
        let needle = search.get();
        let status = MaintenanceStatus::parse(&status_filter.get());
        records.with(|all| {
            all.iter()
                .filter(|r| r.matches(&needle, status))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let open_add = move || {
        fields.reset();
        set_form_error.set(None);
        dialog_open.set(true);
    };

    let save = move || {
        let record = fields.collect();
        if let Err(e) = record.validate() {
            set_form_error.set(Some(e));
            return;
        }
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_form_error.set(Some(e));
                return;
            }
        };
        set_saving.set(true);
        let ticket = save_guard.with_value(FetchGuard::ticket);
        spawn_local(async move {
            let result = api::create_maintenance(&token, &record).await;
            if let Err(e) = &result {
                log::error!("save maintenance failed: {}", e);
            }
            ticket.apply(|| {
                match result {
                    Ok(()) => {
                        leptos::logging::log!(
                            "maintenance '{}' saved for {}",
                            record.kind,
                            record.item
                        );
                        dialog_open.set(false);
                        load();
                    }
                    Err(_) => {
                        set_form_error.set(Some("Failed to save maintenance record.".to_string()));
                    }
                }
                set_saving.set(false);
            });
        });
    };

    view! {
        <PageFrame page_id="maintenance--list" category=PAGE_CAT_LIST>
            <PageHeader title="Maintenance">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_add()>
                    {icon("plus")}" Add Maintenance"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <div style="flex: 1; max-width: 320px;">
                    <Input value=search placeholder="Search by item or model" />
                </div>
                <Select value=status_filter>
                    <option value="">"All"</option>
                    {MaintenanceStatus::ALL.iter().map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> }).collect_view()}
                </Select>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Item Name"</TableHeaderCell>
                            <TableHeaderCell>"Model"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Last"</TableHeaderCell>
                            <TableHeaderCell>"Next Due"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|record| {
                            let due = is_due(&record, today);
                            let (name, model) = record
                                .item
                                .as_ref()
                                .map(|i| (i.name.clone(), i.model.clone()))
                                .unwrap_or_default();
                            let kind_class = if record.kind == "Calibration" { "badge badge--success" } else { "badge badge--warning" };
                            let last = format_date(&record.last);
                            let next = format_date(&record.next);
                            let MaintenanceRecord { kind, actions, .. } = record;
                            view! {
                                <TableRow attr:class=if due { "row--overdue" } else { "" }>
                                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{model}</TableCellLayout></TableCell>
                                    <TableCell><span class=kind_class>{kind}</span></TableCell>
                                    <TableCell><TableCellLayout>{last}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {next}
                                            {due.then(|| view! { <span class="badge badge--error">" Overdue"</span> })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{actions}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
                <Show when=move || visible.with(|v| v.is_empty())>
                    <div class="empty-state">"No maintenance records found."</div>
                </Show>
            </Show>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Add Maintenance Item"</DialogTitle>
                        <DialogContent>
                            {move || form_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                            <div class="form-grid">
                                <label>"Inventory Item"
                                    <Select value=fields.item>
                                        <option value="">"Select item"</option>
                                        {move || inventory.get().into_iter().map(|i| {
                                            let label = format!("{} ({})", i.name, i.model);
                                            view! { <option value=i.id>{label}</option> }
                                        }).collect_view()}
                                    </Select>
                                </label>
                                <label>"Type"
                                    <Select value=fields.kind>
                                        <option value="">"Select type"</option>
                                        {MAINTENANCE_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                                    </Select>
                                </label>
                                <label>"Last Maintained" <DateInput value=fields.last /></label>
                                <label>"Next Due" <DateInput value=fields.next /></label>
                                <label>"Status"
                                    <Select value=fields.status>
                                        {MaintenanceStatus::ALL.iter().map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> }).collect_view()}
                                    </Select>
                                </label>
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| dialog_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary disabled=saving on_click=move |_| save()>
                                "Save"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(next: &str, actions: &str) -> MaintenanceRecord {
        MaintenanceRecord {
            id: "m".into(),
            item: None,
            kind: "Calibration".into(),
            last: "2025-01-01".into(),
            next: next.into(),
            actions: actions.into(),
        }
    }

    #[test]
    fn only_unfinished_past_due_records_are_flagged() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(is_due(&record("2025-05-31", "Scheduled"), today));
        assert!(!is_due(&record("2025-05-31", "Completed"), today));
        assert!(!is_due(&record("2025-06-01", "Scheduled"), today));
        assert!(!is_due(&record("soon", "Scheduled"), today));
    }
}
