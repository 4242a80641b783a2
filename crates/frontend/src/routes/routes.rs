use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::RolePage;
use crate::layout::Shell;
use crate::navigation::registry::role_for_route;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Role(Role),
    NotFound,
}

impl AppRoute {
    /// Paths match exactly; `/HOD` is case-sensitive.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => AppRoute::Home,
            "/login" => AppRoute::Login,
            "/register" => AppRoute::Register,
            other => role_for_route(other).map(AppRoute::Role).unwrap_or(AppRoute::NotFound),
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    // Keyed on the path only, so `?tab=` changes never remount the page.
    let route = Memo::new(move |_| ctx.location.with(|l| AppRoute::from_path(&l.path)));

    view! {
        <Shell>
            {move || {
                let current = route.get();
                leptos::logging::log!("route: {:?}", current);
                match current {
                    AppRoute::Home => view! { <HomePage /> }.into_any(),
                    AppRoute::Login => view! { <LoginPage /> }.into_any(),
                    AppRoute::Register => view! { <RegisterPage /> }.into_any(),
                    AppRoute::Role(role) => view! { <RolePage role=role /> }.into_any(),
                    AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
                }
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_surface() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/student"), AppRoute::Role(Role::Student));
        assert_eq!(AppRoute::from_path("/sara"), AppRoute::Role(Role::Sara));
        assert_eq!(AppRoute::from_path("/HOD"), AppRoute::Role(Role::DepartmentHead));
        assert_eq!(
            AppRoute::from_path("/store-manager"),
            AppRoute::Role(Role::StoreManager)
        );
        assert_eq!(AppRoute::from_path("/hod"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/inventory"), AppRoute::NotFound);
    }
}
