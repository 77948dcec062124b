use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::types::AuthResponse;

use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test", TokenStore::in_memory(), transport.clone())
}

// =============================================================
// Request building
// =============================================================

#[test]
fn build_request_attaches_json_content_type_and_bearer() {
    let req = build_request(
        "http://api.test",
        Method::Get,
        "/api/datasets/",
        Some("A1"),
        None,
    );

    assert_eq!(req.url, "http://api.test/api/datasets/");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("authorization"), Some("Bearer A1"));
}

#[test]
fn build_request_omits_bearer_without_token() {
    let req = build_request("http://api.test", Method::Post, "/api/users/login/", None, None);
    assert!(req.header("authorization").is_none());
}

#[test]
fn bearer_headers_carry_no_content_type() {
    let headers = bearer_headers(Some("A1"));
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].1, "Bearer A1");

    assert!(bearer_headers(None).is_empty());
}

// =============================================================
// Success and error surfacing
// =============================================================

#[test]
fn success_body_decodes_to_declared_type() {
    let transport = ScriptedTransport::default();
    transport.push_ok(200, r#"{"access":"A1","refresh":"R1","user":{"id":1,"email":"admin@msdp.pk","first_name":"Site","last_name":"Admin","role":"ADMIN","is_active":true}}"#);
    let api = client(&transport);

    let resp: AuthResponse = block_on(api.request(
        Method::Post,
        "/api/users/login/",
        Some(json!({"email":"admin@msdp.pk","password":"admin123"})),
    ))
    .expect("login response");

    assert_eq!(resp.access, "A1");
    assert_eq!(resp.user.role, crate::net::types::Role::Admin);
}

#[test]
fn application_error_carries_status_and_body() {
    let transport = ScriptedTransport::default();
    transport.push_ok(422, r#"{"detail":"disease is required"}"#);
    let api = client(&transport);

    let err = block_on(api.request::<serde_json::Value>(Method::Get, "/api/datasets/", None))
        .expect_err("expected failure");

    assert_eq!(err.status_code(), 422);
    assert_eq!(err.to_string(), "disease is required");
}

#[test]
fn transport_failure_surfaces_as_network_error() {
    let transport = ScriptedTransport::default();
    transport.push_network_error();
    let api = client(&transport);

    let err = block_on(api.request::<serde_json::Value>(Method::Get, "/api/datasets/", None))
        .expect_err("expected failure");

    assert!(matches!(err, ApiError::Network));
    assert_eq!(err.status_code(), 500);
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let transport = ScriptedTransport::default();
    transport.push_ok(200, "not json");
    let api = client(&transport);

    let err = block_on(api.request::<Vec<i32>>(Method::Get, "/api/datasets/", None))
        .expect_err("expected failure");

    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Refresh-and-retry
// =============================================================

#[test]
fn expired_access_token_refreshes_and_retries_once() {
    let transport = ScriptedTransport::default();
    transport.push_ok(401, r#"{"detail":"token expired"}"#);
    transport.push_ok(200, r#"{"access":"A2"}"#);
    transport.push_ok(200, r#"{"ok":true}"#);
    let api = client(&transport);
    api.tokens().store("A1", "R1");

    let body: serde_json::Value =
        block_on(api.request(Method::Get, "/api/users/profile/", None)).expect("retried call");
    assert_eq!(body, json!({"ok": true}));

    let seen = transport.requests();
    assert_eq!(seen.len(), 3);
    assert!(seen[1].url.ends_with("/api/users/token/refresh/"));
    assert_eq!(seen[1].body, Some(json!({"refresh": "R1"})));
    assert_eq!(seen[2].header("authorization"), Some("Bearer A2"));

    // New access token stored next to the original refresh token.
    assert_eq!(api.tokens().access().as_deref(), Some("A2"));
    assert_eq!(api.tokens().refresh().as_deref(), Some("R1"));
}

#[test]
fn refresh_failure_clears_tokens_and_signals_once() {
    let transport = ScriptedTransport::default();
    transport.push_ok(401, r#"{"detail":"token expired"}"#);
    transport.push_ok(401, r#"{"detail":"refresh token invalid"}"#);
    let redirects = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&redirects);
    let api = client(&transport).on_session_invalid(move || counter.set(counter.get() + 1));
    api.tokens().store("A1", "R1");

    let err = block_on(api.request::<serde_json::Value>(Method::Get, "/api/users/profile/", None))
        .expect_err("expected failure");

    assert!(matches!(err, ApiError::AuthExpired));
    assert!(api.tokens().access().is_none());
    assert!(api.tokens().refresh().is_none());
    assert_eq!(redirects.get(), 1);
    // Original call + refresh call; the request is never retried.
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn anonymous_401_is_not_refreshed() {
    let transport = ScriptedTransport::default();
    transport.push_ok(401, r#"{"detail":"credentials were not provided"}"#);
    let api = client(&transport);

    let err = block_on(api.request::<serde_json::Value>(Method::Get, "/api/users/profile/", None))
        .expect_err("expected failure");

    assert_eq!(err.status_code(), 401);
    assert_eq!(transport.requests().len(), 1);
}

/// Backend that holds an access token but never a refresh token.
struct AccessOnlyBackend;

impl crate::net::tokens::TokenBackend for AccessOnlyBackend {
    fn read(&self, key: &str) -> Option<String> {
        (key == "access_token").then(|| "A1".to_owned())
    }

    fn write(&self, _key: &str, _value: &str) {}

    fn delete(&self, _key: &str) {}
}

#[test]
fn missing_refresh_token_fails_without_a_refresh_call() {
    let transport = ScriptedTransport::default();
    transport.push_ok(401, r#"{"detail":"token expired"}"#);
    let redirects = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&redirects);
    let api = ApiClient::new(
        "http://api.test",
        TokenStore::with_backend(Rc::new(AccessOnlyBackend)),
        transport.clone(),
    )
    .on_session_invalid(move || counter.set(counter.get() + 1));

    let err = block_on(api.request::<serde_json::Value>(Method::Get, "/api/users/profile/", None))
        .expect_err("expected failure");

    assert!(matches!(err, ApiError::AuthExpired));
    assert_eq!(redirects.get(), 1);
    // Only the original call; no refresh request was issued.
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn refresh_recheck_reuses_token_refreshed_by_another_call() {
    let transport = ScriptedTransport::default();
    let api = client(&transport);
    // The store already holds a newer access token than the one that 401'd.
    api.tokens().store("A2", "R1");

    let fresh = block_on(api.refresh_access("A1"));

    assert_eq!(fresh.as_deref(), Some("A2"));
    assert!(transport.requests().is_empty());
}

#[test]
fn refresh_without_stored_refresh_token_clears_nothing_and_skips_network() {
    let transport = ScriptedTransport::default();
    let api = client(&transport);
    // Same token that 401'd, no refresh token stored at all.
    let fresh = block_on(api.refresh_access("A1"));

    assert!(fresh.is_none());
    assert!(transport.requests().is_empty());
}

#[test]
fn refresh_with_malformed_body_clears_tokens() {
    let transport = ScriptedTransport::default();
    transport.push_ok(200, r#"{"unexpected":"shape"}"#);
    let api = client(&transport);
    api.tokens().store("A1", "R1");

    let fresh = block_on(api.refresh_access("A1"));

    assert!(fresh.is_none());
    assert!(api.tokens().access().is_none());
    assert!(api.tokens().refresh().is_none());
}
