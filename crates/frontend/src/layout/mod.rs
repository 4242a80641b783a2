pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;
pub mod tabs;

use crate::system::auth::context::use_session;
use footer::Footer;
use header::Header;
use left::{Left, Sidebar};
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// The sidebar is only shown with a session.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Show when=move || session.is_authenticated()>
                    <Left>
                        <Sidebar />
                    </Left>
                </Show>
                <main data-zone="center" class="app-main">
                    {children()}
                </main>
            </div>
            <Footer />
        </div>
    }
}
