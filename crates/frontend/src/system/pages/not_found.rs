use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let path = move || ctx.location.with(|l| l.path.clone());

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <a href="/" on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate("/");
            }>"Back to home"</a>
        </div>
    }
}
