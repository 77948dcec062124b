//! Screen shown when a signed-in user's role does not admit a route.

use leptos::prelude::*;

use crate::state::session::{SessionState, landing_route};

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let home = move || session.get().role().map_or("/", landing_route);

    view! {
        <div class="unauthorized-page">
            <h1>"Access Denied"</h1>
            <p>"Your account does not have permission to view this page."</p>
            <a class="btn btn--primary" href=home>"Back to your dashboard"</a>
        </div>
    }
}
