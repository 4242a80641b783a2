//! Role navigation in the left column. Entries, hrefs and the active item all
//! come from [`NavigationPresenter`]; this component only renders them.

use crate::layout::global_context::AppGlobalContext;
use crate::navigation::presenter::{NavItem, NavigationPresenter};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let items = Memo::new(move |_| {
        let presenter = NavigationPresenter::for_role(session.role())
            .collapsed(ctx.sidebar_collapsed.get());
        ctx.location.with(|location| presenter.present_location(location))
    });

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__header">
                <button
                    class="app-sidebar__toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <Show when=move || !ctx.sidebar_collapsed.get()>
                    <div class="app-sidebar__title">
                        <div class="app-sidebar__brand">"Electronics Store"</div>
                        <div class="app-sidebar__role">{move || session.current_role().display_name()}</div>
                    </div>
                </Show>
            </div>
            <nav class="app-sidebar__items">
                <For
                    each=move || items.get()
                    key=|item| (item.href.clone(), item.active, item.show_label)
                    children=move |item: NavItem| {
                        let href = item.href.clone();
                        view! {
                            <a
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=item.active
                                href=item.href.clone()
                                title=item.label
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(&href);
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    {item.show_label.then(|| view! { <span>{item.label}</span> })}
                                </div>
                            </a>
                        }
                    }
                />
            </nav>
        </div>
    }
}
