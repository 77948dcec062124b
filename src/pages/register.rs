//! Registration screen.
//!
//! Field checks run locally before anything is dispatched: required
//! fields, a minimum password length, and a matching confirmation. Backend
//! rejections (duplicate email, weak password by server policy) come back
//! through the same inline error banner.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::{RegisterRequest, Role};
use crate::state::session::{self, SessionState, landing_route};

const MIN_PASSWORD_LEN: usize = 8;

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<Role>,
}

/// Check the form locally and build the wire payload.
///
/// Rejections here never reach the transport.
pub fn validate(form: &RegisterForm) -> Result<RegisterRequest, String> {
    let email = form.email.trim();
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();

    if email.is_empty() || first_name.is_empty() || last_name.is_empty() {
        return Err("All fields are required".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_owned());
    }
    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_owned());
    }
    let Some(role) = form.role else {
        return Err("Select a role".to_owned());
    };

    Ok(RegisterRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        role,
    })
}

/// What each role is for, shown beside the radio buttons.
const fn role_hint(role: Role) -> &'static str {
    match role {
        Role::Admin => "Manage datasets, models, and training",
        Role::HealthOfficial => "Browse forecasts and reports",
        Role::Pharmacist => "Enter daily pharmacy sales",
        Role::LabTech => "Enter lab test results",
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let role = RwSignal::new(Some(Role::HealthOfficial));
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    Effect::new(move || {
        if let Some(active) = session.get().role() {
            navigate(landing_route(active), NavigateOptions::default());
        }
    });

    let submit = move || {
        if loading.get() {
            return;
        }
        error.set(None);

        let form = RegisterForm {
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            role: role.get(),
        };
        let request = match validate(&form) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        loading.set(true);
        leptos::task::spawn_local(async move {
            match session::register(&request).await {
                Ok(state) => session.set(state),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|candidate| {
            view! {
                <label class="register-page__role">
                    <input
                        type="radio"
                        name="role"
                        checked=move || role.get() == Some(candidate)
                        on:change=move |_| role.set(Some(candidate))
                    />
                    <span class="register-page__role-label">{candidate.label()}</span>
                    <span class="register-page__role-hint">{role_hint(candidate)}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="register-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p>"Join the MSDP surveillance network"</p>

                <ErrorBanner message=error/>

                <div class="register-page__names">
                    <label class="field">
                        "First Name"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Last Name"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "Confirm Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="register-page__roles">
                    <legend>"Role"</legend>
                    {role_options}
                </fieldset>

                <button
                    class="btn btn--primary auth-card__submit"
                    disabled=move || loading.get()
                    on:click=move |_| submit()
                >
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>

                <p class="auth-card__alt">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
