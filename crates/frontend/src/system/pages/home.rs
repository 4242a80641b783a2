use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::navigation::registry::{base_route, landing_route, valid_tab};
use crate::system::auth::context::use_session;

struct Featured {
    title: &'static str,
    description: &'static str,
}

const FEATURED: [Featured; 4] = [
    Featured {
        title: "Advanced Oscilloscope",
        description: "High-precision oscilloscope for detailed signal analysis.",
    },
    Featured {
        title: "Signal Generator",
        description: "Versatile signal generator for various testing needs.",
    },
    Featured {
        title: "Function Generator",
        description: "Reliable function generator for waveform generation.",
    },
    Featured {
        title: "Digital Multimeter",
        description: "Essential tool for measuring voltage, current, and resistance.",
    },
];

const ANNOUNCEMENTS: [(&str, &str); 2] = [
    (
        "New Equipment Arrival",
        "New oscilloscopes and signal generators have been added to the inventory.",
    ),
    (
        "Maintenance Schedule",
        "The lab will be closed for scheduled maintenance. Check the calendar before booking equipment.",
    ),
];

/// Where "Browse Equipment" leads. Without a session that is the sign-in page;
/// with one, the role's explore or inventory tab.
pub fn browse_target(signed_in: bool, role: Option<Role>) -> String {
    if !signed_in {
        return "/login".to_string();
    }
    match role {
        Some(role) => match valid_tab(role, "explore").or_else(|| valid_tab(role, "inventory")) {
            Some(tab) => format!("{}?tab={}", base_route(role), tab),
            None => base_route(role).to_string(),
        },
        None => landing_route(None).to_string(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let on_browse = move |_| {
        let target = browse_target(session.is_authenticated(), session.role());
        ctx.navigate(&target);
    };

    view! {
        <div class="home">
            <section class="home__hero">
                <div class="home__brand">"ASTU | ECE Department"</div>
                <h1>"Empowering Innovation in Electronics"</h1>
                <p class="home__lead">
                    "Access cutting-edge equipment and expert services to fuel your research and projects."
                </p>
                <button class="btn-primary" on:click=on_browse>
                    "Browse Equipment"
                </button>

                <h2>"Featured Equipment"</h2>
                <div class="home__featured">
                    {FEATURED
                        .iter()
                        .map(|f| view! {
                            <div class="home__card">
                                <h3>{f.title}</h3>
                                <p>{f.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__announcements">
                <h2>"Announcements"</h2>
                {ANNOUNCEMENTS
                    .iter()
                    .map(|(title, body)| view! {
                        <div class="home__announcement">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_requires_a_session() {
        assert_eq!(browse_target(false, Some(Role::Student)), "/login");
    }

    #[test]
    fn browse_prefers_the_explore_tab() {
        assert_eq!(browse_target(true, Some(Role::Student)), "/student?tab=explore");
        assert_eq!(browse_target(true, Some(Role::DepartmentHead)), "/HOD?tab=inventory");
        assert_eq!(browse_target(true, None), "/");
    }
}
