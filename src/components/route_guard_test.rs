use super::*;
use crate::net::testing::admin_profile_json;
use crate::net::types::User;

fn user_with_role(role: Role) -> User {
    let mut user: User = serde_json::from_str(admin_profile_json()).expect("profile json");
    user.role = role;
    user
}

#[test]
fn waits_while_the_session_resolves() {
    let state = SessionState::resolving();
    assert_eq!(decide(&state, &[]), GuardDecision::Wait);
    assert_eq!(decide(&state, &[Role::Admin]), GuardDecision::Wait);
}

#[test]
fn anonymous_visitors_go_to_login() {
    let state = SessionState::anonymous();
    assert_eq!(decide(&state, &[]), GuardDecision::RedirectLogin);
    assert_eq!(decide(&state, &[Role::Pharmacist]), GuardDecision::RedirectLogin);
}

#[test]
fn role_mismatch_goes_to_unauthorized() {
    let state = SessionState::authenticated(user_with_role(Role::Pharmacist));
    assert_eq!(decide(&state, &[Role::Admin]), GuardDecision::RedirectUnauthorized);
}

#[test]
fn matching_role_is_admitted() {
    let state = SessionState::authenticated(user_with_role(Role::Admin));
    assert_eq!(decide(&state, &[Role::Admin]), GuardDecision::Allow);
    assert_eq!(
        decide(&state, &[Role::Admin, Role::HealthOfficial]),
        GuardDecision::Allow
    );
}

#[test]
fn empty_role_set_admits_any_authenticated_user() {
    for role in Role::ALL {
        let state = SessionState::authenticated(user_with_role(role));
        assert_eq!(decide(&state, &[]), GuardDecision::Allow);
    }
}
