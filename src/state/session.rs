//! Authentication session: the single source of truth for who is logged in.
//!
//! LIFECYCLE
//! =========
//! The app provides one `RwSignal<SessionState>` at the root. It starts in
//! the resolving state, is hydrated exactly once at startup from the
//! persisted access token, and from then on changes only through
//! login/register (adopting the returned user) and logout (clearing the
//! token store and hard-redirecting to the login screen). Login and
//! register errors propagate to the calling form; they never mutate
//! session state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{RegisterRequest, Role, User};

/// Current authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True only while the startup hydration attempt is in flight.
    pub loading: bool,
}

impl SessionState {
    pub const fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    pub const fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub const fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Dashboard route a user lands on right after authenticating.
pub const fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::HealthOfficial => "/forecasts",
        Role::Pharmacist => "/data-entry/pharmacy",
        Role::LabTech => "/data-entry/lab",
    }
}

/// Resolve the persisted session against the backend.
///
/// No stored access token means anonymous without any network call. A
/// stored token is validated by fetching the profile (the client refreshes
/// it transparently if expired); any failure clears the store.
pub async fn resolve<T: Transport>(api: &ApiClient<T>) -> SessionState {
    if api.tokens().access().is_none() {
        return SessionState::anonymous();
    }
    match api.profile().await {
        Ok(user) => SessionState::authenticated(user),
        Err(_) => {
            api.tokens().clear();
            SessionState::anonymous()
        }
    }
}

/// Authenticate and produce the state the session signal should adopt.
pub async fn login(email: &str, password: &str) -> Result<SessionState, ApiError> {
    crate::net::api::login(email, password)
        .await
        .map(|resp| SessionState::authenticated(resp.user))
}

/// Create an account and produce the state the session signal should adopt.
pub async fn register(form: &RegisterRequest) -> Result<SessionState, ApiError> {
    crate::net::api::register(form)
        .await
        .map(|resp| SessionState::authenticated(resp.user))
}

/// End the session: clear the credential pair and hard-redirect to the
/// login screen so all in-memory state is discarded with it.
pub fn logout() {
    crate::net::api::clear_session_tokens();
    crate::util::nav::hard_redirect("/login");
}
