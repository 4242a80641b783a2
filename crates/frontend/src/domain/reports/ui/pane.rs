use contracts::domain::inventory::InventoryQuery;
use contracts::domain::maintenance::{MaintenanceRecord, MaintenanceStatus};
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::inventory::api as inventory_api;
use crate::domain::maintenance::api as maintenance_api;
use crate::domain::maintenance::ui::section::is_due;
use crate::domain::requests::api as requests_api;
use crate::shared::api_utils::require_token;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSection {
    pub title: &'static str,
    pub description: &'static str,
}

const fn section(title: &'static str, description: &'static str) -> ReportSection {
    ReportSection { title, description }
}

static STUDENT: [ReportSection; 4] = [
    section("Available Inventory", "List of items available to request/borrow."),
    section("My Requests", "Requests/orders submitted by the student, with status updates."),
    section("Borrowed Items", "Items currently checked out by the student."),
    section("Maintenance Status", "Maintenance updates for items they have borrowed."),
];

static LECTURER: [ReportSection; 4] = [
    section("Course Inventory", "Inventory available for their courses (components/equipment)."),
    section("Student Requests", "Requests from students in their courses, with approval/status options if applicable."),
    section("Personal Requests", "Requests/orders submitted by the lecturer."),
    section("Maintenance Status", "Maintenance logs for items used in their courses."),
];

static ARA: [ReportSection; 4] = [
    section("Inventory Overview", "List of all components and equipment, with status and availability."),
    section("Assigned Inventory", "Items assigned to the ARA for management or maintenance."),
    section("Maintenance Tasks", "Scheduled and completed maintenance actions for items under their care."),
    section("Personal Requests", "Requests/orders submitted by the ARA, with status tracking."),
];

static DEPARTMENT_HEAD: [ReportSection; 4] = [
    section("Department Inventory", "All inventory belonging to their department."),
    section("Department Requests", "All requests/orders from users in their department, with approval controls."),
    section("Maintenance Logs", "Maintenance history and upcoming schedules for department equipment."),
    section("Department Statistics", "Summary stats (total items, requests, maintenance actions)."),
];

static STORE_MANAGER: [ReportSection; 4] = [
    section("Full Inventory Management", "All inventory items, with add/edit/delete capabilities."),
    section("Order Processing", "All orders/requests, with dispatch and tracking controls."),
    section("Maintenance Scheduling", "Create and track maintenance tasks for all inventory."),
    section("Inventory Statistics", "Stock levels, usage rates, and alerts for low stock."),
];

/// Report sections shown to `role`. SARA shares the ARA sections.
pub fn report_sections(role: Role) -> &'static [ReportSection] {
    match role {
        Role::Student => &STUDENT,
        Role::Lecturer => &LECTURER,
        Role::Ara | Role::Sara => &ARA,
        Role::DepartmentHead => &DEPARTMENT_HEAD,
        Role::StoreManager => &STORE_MANAGER,
    }
}

/// Roles allowed to list pending requests.
fn sees_pending_requests(role: Role) -> bool {
    matches!(role, Role::DepartmentHead | Role::StoreManager)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceCounts {
    pub scheduled: usize,
    pub completed: usize,
    pub overdue: usize,
}

pub fn count_maintenance(records: &[MaintenanceRecord], today: chrono::NaiveDate) -> MaintenanceCounts {
    records.iter().fold(MaintenanceCounts::default(), |mut acc, r| {
        match r.status() {
            Some(MaintenanceStatus::Scheduled) => acc.scheduled += 1,
            Some(MaintenanceStatus::Completed) => acc.completed += 1,
            None => {}
        }
        if is_due(r, today) {
            acc.overdue += 1;
        }
        acc
    })
}

/// Summary figures plus the role's report sections.
#[component]
pub fn ReportsPane(role: Role) -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let inventory_total = RwSignal::new(None::<usize>);
    let maintenance = RwSignal::new(None::<MaintenanceCounts>);
    let pending = RwSignal::new(None::<usize>);

    Effect::new(move |_| {
        let Ok(token) = require_token(session.token()) else {
            return;
        };
        let today = chrono::Local::now().date_naive();
        let ticket = guard.with_value(FetchGuard::next_ticket);

        let inventory_ticket = ticket.clone();
        let t = token.clone();
        spawn_local(async move {
            match inventory_api::fetch_inventory(&t, &InventoryQuery::default()).await {
                Ok(page) => {
                    inventory_ticket.apply(|| inventory_total.set(Some(page.total as usize)));
                }
                Err(e) => log::error!("report inventory total failed: {}", e),
            }
        });

        let maintenance_ticket = ticket.clone();
        let t = token.clone();
        spawn_local(async move {
            match maintenance_api::fetch_maintenance(&t).await {
                Ok(records) => {
                    maintenance_ticket.apply(|| maintenance.set(Some(count_maintenance(&records, today))));
                }
                Err(e) => log::error!("report maintenance counts failed: {}", e),
            }
        });

        if sees_pending_requests(role) {
            spawn_local(async move {
                match requests_api::fetch_pending(&token).await {
                    Ok(list) => {
                        ticket.apply(|| pending.set(Some(list.len())));
                    }
                    Err(e) => log::error!("report pending requests failed: {}", e),
                }
            });
        }
    });

    let overdue_tone = Signal::derive(move || {
        maintenance.get().map(|m| if m.overdue > 0 { StatTone::Warning } else { StatTone::Good })
    });

    view! {
        <PageFrame page_id="reports--report" category=PAGE_CAT_REPORT>
            <h2 class="page__title">{format!("{} Reports", role.display_name())}</h2>
            <div class="stat-cards">
                <StatCard label="Inventory Items" icon_name="inventory" value=Signal::derive(move || inventory_total.get()) />
                <StatCard
                    label="Scheduled Maintenance"
                    icon_name="build"
                    value=Signal::derive(move || maintenance.get().map(|m| m.scheduled))
                />
                <StatCard
                    label="Completed Maintenance"
                    icon_name="check"
                    value=Signal::derive(move || maintenance.get().map(|m| m.completed))
                    tone=Some(StatTone::Good)
                />
                <StatCard
                    label="Overdue"
                    icon_name="report"
                    value=Signal::derive(move || maintenance.get().map(|m| m.overdue))
                    tone=overdue_tone
                    subtitle=Some("Next due date has passed".to_string())
                />
                {sees_pending_requests(role).then(|| view! {
                    <StatCard label="Pending Requests" icon_name="dashboard" value=Signal::derive(move || pending.get()) />
                })}
            </div>
            <div class="report-sections">
                {report_sections(role).iter().map(|s| view! {
                    <div class="report-section">
                        <h3 class="report-section__title">{s.title}</h3>
                        <p class="report-section__description">{s.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn every_role_has_four_sections() {
        for role in Role::ALL {
            assert_eq!(report_sections(role).len(), 4, "{}", role);
        }
        assert_eq!(report_sections(Role::Sara), report_sections(Role::Ara));
        assert_eq!(report_sections(Role::Student)[1].title, "My Requests");
    }

    #[test]
    fn maintenance_counts_by_status() {
        let records: Vec<MaintenanceRecord> = serde_json::from_value(serde_json::json!([
            {"type": "Calibration", "last": "2025-01-01", "next": "2025-02-01", "actions": "Scheduled"},
            {"type": "Calibration", "last": "2025-01-01", "next": "2025-09-01", "actions": "Scheduled"},
            {"type": "Maintenance", "last": "2025-01-01", "next": "2025-02-01", "actions": "Completed"},
            {"type": "Maintenance", "last": "2025-01-01", "next": "2025-02-01", "actions": "Pending review"}
        ]))
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(
            count_maintenance(&records, today),
            MaintenanceCounts {
                scheduled: 2,
                completed: 1,
                overdue: 2,
            }
        );
    }
}
