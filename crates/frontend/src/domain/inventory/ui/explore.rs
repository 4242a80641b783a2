use contracts::domain::inventory::{InventoryItem, InventoryQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::grid::ComponentGrid;
use crate::domain::inventory::api;
use crate::shared::api_utils::require_token;
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;

/// Read-only catalogue of components and equipment for students.
#[component]
pub fn ExploreInventory() -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let items = RwSignal::new(Vec::<InventoryItem>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_error.set(Some(e));
                set_loading.set(false);
                return;
            }
        };
        let ticket = guard.with_value(FetchGuard::next_ticket);
        spawn_local(async move {
            let result = api::fetch_inventory(&token, &InventoryQuery::default()).await;
            ticket.apply(|| {
                match result {
                    Ok(page) => items.set(page.items),
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        });
    });

    view! {
        <PageFrame page_id="explore--list" category=PAGE_CAT_LIST>
            <h2 class="page__title">"Explore Components & Equipment"</h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <ComponentGrid items=items placeholder="Search by name or model..." />
            </Show>
        </PageFrame>
    }
}
