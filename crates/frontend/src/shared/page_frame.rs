//! PageFrame: root wrapper for every pane rendered inside a role page.
//!
//! Sets `id` (`"{pane}--{category}"`, e.g. `"inventory--list"`) and
//! `data-page-category` on the root element so panes can be found in the DOM.

use leptos::prelude::*;

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Submission form.
pub const PAGE_CAT_FORM: &str = "form";
/// Read-only summary.
pub const PAGE_CAT_REPORT: &str = "report";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
