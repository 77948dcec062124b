//! Admin dashboard: tabbed panels for uploads, models, training, and users.

use leptos::prelude::*;

use crate::components::models_panel::ModelsPanel;
use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::components::training_panel::TrainingPanel;
use crate::components::upload_panel::UploadPanel;
use crate::components::users_panel::UsersPanel;
use crate::net::types::Role;
use crate::state::ui::AdminTab;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RouteGuard roles=vec![Role::Admin]>
            <NavBar/>
            <AdminDashboard/>
        </RouteGuard>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let active = RwSignal::new(AdminTab::default());

    let tabs = AdminTab::ALL
        .into_iter()
        .map(|tab| {
            let selected = move || active.get() == tab;
            view! {
                <button
                    class="tab"
                    class=("tab--active", selected)
                    on:click=move |_| active.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Admin Dashboard"</h1>
                <p>"Manage datasets, models, and system configuration"</p>
            </header>

            <div class="admin-page__tabs">{tabs}</div>

            <div class="admin-page__content">
                {move || match active.get() {
                    AdminTab::Upload => view! { <UploadPanel/> }.into_any(),
                    AdminTab::Models => view! { <ModelsPanel/> }.into_any(),
                    AdminTab::Training => view! { <TrainingPanel/> }.into_any(),
                    AdminTab::Users => view! { <UsersPanel/> }.into_any(),
                }}
            </div>
        </div>
    }
}
