use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar column; narrows when collapsed.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside
            data-zone="left"
            class="left"
            class:left--collapsed=move || ctx.sidebar_collapsed.get()
        >
            {children()}
        </aside>
    }
}
