//! Login screen.
//!
//! Submits through the session layer; a failure stays on the form as an
//! inline error, a success adopts the user and navigates to the dashboard
//! for their role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::session::{self, SessionState, landing_route};

const DEMO_ACCOUNTS: [(&str, &str, &str); 4] = [
    ("admin@msdp.pk", "admin123", "Administrator"),
    ("official@msdp.pk", "official123", "Health Official"),
    ("pharmacist@msdp.pk", "pharmacist123", "Pharmacist"),
    ("lab@msdp.pk", "lab123", "Lab Technician"),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Already signed in (or a login just completed): go to the dashboard.
    Effect::new(move || {
        if let Some(role) = session.get().role() {
            navigate(landing_route(role), NavigateOptions::default());
        }
    });

    let submit = move || {
        if loading.get() || email.get().trim().is_empty() || password.get().is_empty() {
            return;
        }
        error.set(None);
        loading.set(true);
        leptos::task::spawn_local(async move {
            match session::login(email.get_untracked().trim(), &password.get_untracked()).await {
                Ok(state) => session.set(state),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let demo_rows = DEMO_ACCOUNTS
        .into_iter()
        .map(|(account, secret, role)| {
            view! {
                <tr>
                    <td>{role}</td>
                    <td>{account}</td>
                    <td>{secret}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="login-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p>"Access your MSDP account"</p>

                <ErrorBanner message=error/>

                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="email"
                        placeholder="your.email@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>

                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>

                <button
                    class="btn btn--primary auth-card__submit"
                    disabled=move || loading.get()
                    on:click=move |_| submit()
                >
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <p class="auth-card__alt">
                    "No account? " <a href="/register">"Register"</a>
                </p>

                <h2 class="login-page__demo-title">"Demo accounts"</h2>
                <table class="data-table login-page__demo">
                    <thead>
                        <tr>
                            <th>"Role"</th>
                            <th>"Email"</th>
                            <th>"Password"</th>
                        </tr>
                    </thead>
                    <tbody>{demo_rows}</tbody>
                </table>
            </div>
        </div>
    }
}
