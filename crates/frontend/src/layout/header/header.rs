use crate::layout::global_context::AppGlobalContext;
use crate::navigation::presenter::{NavItem, NavigationPresenter};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let links = Memo::new(move |_| {
        let presenter = NavigationPresenter::for_role(session.role());
        ctx.location.with(|location| presenter.present_location(location))
    });

    let go = move |href: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(href);
        }
    };

    let logout = move |_| {
        leptos::logging::log!("logout");
        session.logout();
        ctx.navigate("/login");
    };

    view! {
        <header data-zone="header" class="header">
            <a class="header__brand" href="/" on:click=go("/")>
                <span class="header__logo">{icon("inventory")}</span>
                <div>
                    <div class="header__title">"ASTU | ECE Department"</div>
                    <div class="header__subtitle">"Store Inventory System"</div>
                </div>
            </a>

            <nav class="header__nav">
                <For
                    each=move || links.get()
                    key=|link| (link.href.clone(), link.active)
                    children=move |link: NavItem| {
                        let href = link.href.clone();
                        view! {
                            <a
                                class="header__link"
                                class:header__link--active=link.active
                                href=link.href.clone()
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(&href);
                                }
                            >
                                {link.label}
                            </a>
                        }
                    }
                />
            </nav>

            <div class="header__actions">
                <Show
                    when=move || session.is_authenticated()
                    fallback=move || view! {
                        <a class="header__link" href="/login" on:click=go("/login")>"Sign In"</a>
                        <a class="header__link" href="/register" on:click=go("/register")>"Register"</a>
                    }
                >
                    <span
                        class="header__avatar"
                        title=move || session.current_user().map(|u| u.display_name().to_string()).unwrap_or_default()
                    >
                        {move || session.current_user().map(|u| u.initial()).unwrap_or_default()}
                    </span>
                    <button class="button button--ghost" aria-label="Logout" on:click=logout>
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
