use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // URL and sidebar state shared by the layout and every role page.
    provide_context(AppGlobalContext::new());

    // Session restored from local storage; absent until the user signs in.
    provide_context(SessionContext::restore());

    view! {
        <AppRoutes />
    }
}
