//! Tab content registry: maps (role, tab key) to the pane rendered for it.
//!
//! [`pane_for`] is the single lookup; [`render_tab_content`] only turns the
//! chosen [`Pane`] into a view.

use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::domain::inventory::ui::{ExploreInventory, InventoryList};
use crate::domain::maintenance::ui::MaintenanceSection;
use crate::domain::reports::ui::ReportsPane;
use crate::domain::requests::ui::{
    ApprovedRequests, RequestApproval, StaffRequestForm, StaffRequests, StudentRequestForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    StudentRequest,
    StaffRequest,
    Explore,
    Inventory { can_edit: bool },
    Approval,
    Approved,
    StaffRequests,
    Maintenance,
    Reports,
}

pub fn pane_for(role: Role, tab: &str) -> Option<Pane> {
    let pane = match (role, tab) {
        (Role::Student, "request") => Pane::StudentRequest,
        (Role::Student, "explore") => Pane::Explore,
        (Role::Student, "reports") => Pane::Reports,
        (Role::Lecturer | Role::Ara | Role::Sara, "request") => Pane::StaffRequest,
        (Role::DepartmentHead, "requests") => Pane::Approval,
        (Role::StoreManager, "inventory") => Pane::Inventory { can_edit: true },
        (Role::StoreManager, "approved") => Pane::Approved,
        (Role::StoreManager, "ara") => Pane::StaffRequests,
        (Role::Student, _) => return None,
        (_, "inventory") => Pane::Inventory { can_edit: false },
        (_, "maintenance") => Pane::Maintenance,
        (_, "reports") => Pane::Reports,
        _ => return None,
    };
    Some(pane)
}

pub fn render_tab_content(role: Role, tab: &str) -> AnyView {
    match pane_for(role, tab) {
        Some(Pane::StudentRequest) => view! { <StudentRequestForm /> }.into_any(),
        Some(Pane::StaffRequest) => view! { <StaffRequestForm role=role /> }.into_any(),
        Some(Pane::Explore) => view! { <ExploreInventory /> }.into_any(),
        Some(Pane::Inventory { can_edit }) => view! { <InventoryList can_edit=can_edit /> }.into_any(),
        Some(Pane::Approval) => view! { <RequestApproval /> }.into_any(),
        Some(Pane::Approved) => view! { <ApprovedRequests /> }.into_any(),
        Some(Pane::StaffRequests) => view! { <StaffRequests /> }.into_any(),
        Some(Pane::Maintenance) => view! { <MaintenanceSection /> }.into_any(),
        Some(Pane::Reports) => view! { <ReportsPane role=role /> }.into_any(),
        None => {
            log::warn!("no pane for tab '{}' of role {}", tab, role);
            view! { <div class="empty-state">{format!("Unknown tab: {}", tab)}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::registry::navigation_for;

    #[test]
    fn every_registered_tab_has_a_pane() {
        for role in Role::ALL {
            for key in navigation_for(Some(role)).tab_keys() {
                assert!(pane_for(role, key).is_some(), "{} / {}", role, key);
            }
        }
    }

    #[test]
    fn only_the_store_manager_edits_inventory() {
        assert_eq!(
            pane_for(Role::StoreManager, "inventory"),
            Some(Pane::Inventory { can_edit: true })
        );
        assert_eq!(
            pane_for(Role::Lecturer, "inventory"),
            Some(Pane::Inventory { can_edit: false })
        );
        assert_eq!(pane_for(Role::Student, "inventory"), None);
        assert_eq!(pane_for(Role::Ara, "approved"), None);
    }
}
