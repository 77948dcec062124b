//! Top navigation bar shared by the signed-in screens.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::{self, SessionState, landing_route};

/// Links offered to each role, beyond its own dashboard.
fn links_for(role: Role) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![(landing_route(role), "Dashboard")];
    links.push(("/reports", "Reports"));
    links.dedup_by_key(|(path, _)| *path);
    links
}

/// Brand, per-role navigation links, the signed-in user, and sign out.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let links = move || {
        session
            .get()
            .role()
            .map(links_for)
            .unwrap_or_default()
            .into_iter()
            .map(|(path, label)| {
                view! { <a class="nav-bar__link" href=path>{label}</a> }
            })
            .collect::<Vec<_>>()
    };

    let identity = move || {
        session.get().user.map(|user| {
            let name = user.full_name();
            let role = user.role.label();
            view! {
                <span class="nav-bar__user">
                    <span class="nav-bar__name">{name}</span>
                    <span class="nav-bar__role">{role}</span>
                </span>
            }
        })
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"MSDP"</a>
            <div class="nav-bar__links">{links}</div>
            <div class="nav-bar__session">
                {identity}
                <button class="btn nav-bar__logout" on:click=move |_| session::logout()>
                    "Sign Out"
                </button>
            </div>
        </nav>
    }
}
