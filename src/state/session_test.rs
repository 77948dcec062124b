use super::*;
use crate::net::testing::{ScriptedTransport, admin_profile_json};
use crate::net::tokens::TokenStore;

use futures::executor::block_on;

fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test", TokenStore::in_memory(), transport.clone())
}

// =============================================================
// State machine basics
// =============================================================

#[test]
fn initial_state_is_resolving() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_iff_user_present() {
    assert!(!SessionState::anonymous().is_authenticated());

    let user: crate::net::types::User =
        serde_json::from_str(admin_profile_json()).expect("profile json");
    let state = SessionState::authenticated(user);
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Admin));
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydration_without_token_is_anonymous_and_offline() {
    let transport = ScriptedTransport::default();
    let api = client(&transport);

    let state = block_on(resolve(&api));

    assert_eq!(state, SessionState::anonymous());
    assert!(transport.requests().is_empty());
}

#[test]
fn hydration_with_valid_token_adopts_the_profile() {
    let transport = ScriptedTransport::default();
    transport.push_ok(200, admin_profile_json());
    let api = client(&transport);
    api.tokens().store("A1", "R1");

    let state = block_on(resolve(&api));

    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.email), Some("admin@msdp.pk".to_owned()));
    assert!(transport.last_request().url.ends_with("/api/users/profile/"));
}

#[test]
fn hydration_clears_tokens_when_refresh_also_fails() {
    let transport = ScriptedTransport::default();
    transport.push_ok(401, r#"{"detail":"token expired"}"#);
    transport.push_ok(401, r#"{"detail":"refresh token invalid"}"#);
    let api = client(&transport);
    api.tokens().store("A1", "R1");

    let state = block_on(resolve(&api));

    assert_eq!(state, SessionState::anonymous());
    assert!(api.tokens().access().is_none());
    assert!(api.tokens().refresh().is_none());
}

#[test]
fn hydration_survives_a_transparent_refresh() {
    let transport = ScriptedTransport::default();
    transport.push_ok(401, r#"{"detail":"token expired"}"#);
    transport.push_ok(200, r#"{"access":"A2"}"#);
    transport.push_ok(200, admin_profile_json());
    let api = client(&transport);
    api.tokens().store("A1", "R1");

    let state = block_on(resolve(&api));

    assert!(state.is_authenticated());
    assert_eq!(api.tokens().access().as_deref(), Some("A2"));
}

// =============================================================
// Landing routes
// =============================================================

#[test]
fn each_role_lands_on_its_dashboard() {
    assert_eq!(landing_route(Role::Admin), "/admin");
    assert_eq!(landing_route(Role::HealthOfficial), "/forecasts");
    assert_eq!(landing_route(Role::Pharmacist), "/data-entry/pharmacy");
    assert_eq!(landing_route(Role::LabTech), "/data-entry/lab");
}
