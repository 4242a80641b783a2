use crate::shared::icons::icon;
use leptos::prelude::*;

pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Where a 0-indexed `page` sits among `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub last: usize,
}

impl PageWindow {
    pub fn new(page: usize, total_pages: usize) -> Self {
        let last = total_pages.max(1) - 1;
        Self {
            page: page.min(last),
            last,
        }
    }

    pub fn prev(&self) -> Option<usize> {
        self.page.checked_sub(1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.page < self.last).then_some(self.page + 1)
    }

    /// "Page 2 of 5 (43 items)"
    pub fn label(&self, total_count: usize) -> String {
        format!("Page {} of {} ({} items)", self.page + 1, self.last + 1, total_count)
    }
}

/// Page navigation for server-paged tables plus a page-size select.
#[component]
pub fn PaginationControls(
    /// 0-indexed
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let window = move || PageWindow::new(current_page.get(), total_pages.get());
    let step = move |target: Option<usize>| {
        if let Some(page) = target {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=move || window().prev().is_none()
                on:click=move |_| step(Some(0))
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || window().prev().is_none()
                on:click=move |_| step(window().prev())
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || window().label(total_count.get())}</span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || window().next().is_none()
                on:click=move |_| step(window().next())
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=move || window().next().is_none()
                on:click=move |_| step(Some(window().last))
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZES
                    .iter()
                    .map(|size| view! { <option value=size.to_string()>{format!("{} / page", size)}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds() {
        let first = PageWindow::new(0, 3);
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(1));

        let last = PageWindow::new(2, 3);
        assert_eq!(last.next(), None);
        assert_eq!(last.prev(), Some(1));
    }

    #[test]
    fn empty_result_is_a_single_page() {
        let window = PageWindow::new(4, 0);
        assert_eq!(window, PageWindow { page: 0, last: 0 });
        assert_eq!(window.label(0), "Page 1 of 1 (0 items)");
    }
}
