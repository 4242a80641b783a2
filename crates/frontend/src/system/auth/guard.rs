use leptos::prelude::*;

use super::context::use_session;
use crate::layout::global_context::AppGlobalContext;

/// Renders `children` only with a session; otherwise a sign-in prompt.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || view! {
                <div class="sign-in-prompt">
                    <p>"You are not signed in."</p>
                    <a href="/login" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate("/login");
                    }>"Sign in"</a>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
