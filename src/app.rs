//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::admin::AdminPage;
use crate::pages::data_entry::{LabEntryPage, PharmacyEntryPage};
use crate::pages::forecasts::ForecastsPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::reports::ReportsPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// session starts in its resolving state and is hydrated exactly once from
/// the persisted access token; route guards hold their subtrees back until
/// that resolution lands.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // One-shot startup hydration. Reads nothing reactive, so it never
    // re-runs; effects only run in the browser.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let resolved = crate::net::api::resolve_session().await;
            session.set(resolved);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/msdp-client.css"/>
        <Title text="MSDP"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("forecasts") view=ForecastsPage/>
                <Route
                    path=(StaticSegment("data-entry"), StaticSegment("lab"))
                    view=LabEntryPage
                />
                <Route
                    path=(StaticSegment("data-entry"), StaticSegment("pharmacy"))
                    view=PharmacyEntryPage
                />
                <Route path=StaticSegment("reports") view=ReportsPage/>
            </Routes>
        </Router>
    }
}
