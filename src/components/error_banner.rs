//! Inline banners for request outcomes.

use leptos::prelude::*;

/// Red banner shown when a request failed. Renders nothing while the
/// message signal is empty.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="banner banner--error" role="alert">
                <p>{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

/// Green banner for a completed action.
#[component]
pub fn SuccessBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="banner banner--success" role="status">
                <p>{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
