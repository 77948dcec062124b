//! Route guard gating a subtree on authentication and role membership.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// What the guard should do for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; show a placeholder, render nothing else.
    Wait,
    /// Not signed in; send to the login screen.
    RedirectLogin,
    /// Signed in but the role is not allowed here.
    RedirectUnauthorized,
    /// Render the guarded subtree.
    Allow,
}

/// Decide access for `state` against `required` roles. An empty role set
/// admits any authenticated user.
pub fn decide(state: &SessionState, required: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    let Some(role) = state.role() else {
        return GuardDecision::RedirectLogin;
    };
    if !required.is_empty() && !required.contains(&role) {
        return GuardDecision::RedirectUnauthorized;
    }
    GuardDecision::Allow
}

/// Wrapper that blocks rendering of `children` until the session resolves,
/// then redirects visitors who are not signed in (to `/login`) or whose
/// role is outside `roles` (to `/unauthorized`).
///
/// Re-evaluates whenever the session signal changes, so a logout completed
/// elsewhere tears the subtree down as well.
#[component]
pub fn RouteGuard(
    /// Roles admitted to this subtree; empty means any authenticated user.
    #[prop(optional)]
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let roles = StoredValue::new(roles);
    let decision = Memo::new(move |_| session.with(|s| roles.with_value(|r| decide(s, r))));

    let navigate = use_navigate();
    Effect::new(move || match decision.get() {
        GuardDecision::RedirectLogin => navigate("/login", NavigateOptions::default()),
        GuardDecision::RedirectUnauthorized => {
            navigate("/unauthorized", NavigateOptions::default());
        }
        GuardDecision::Wait | GuardDecision::Allow => {}
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Wait => view! {
                <div class="route-guard__loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardDecision::Allow => children(),
            GuardDecision::RedirectLogin | GuardDecision::RedirectUnauthorized => {
                ().into_any()
            }
        }}
    }
}
