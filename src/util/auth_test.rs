use super::*;
use crate::test_helpers::{harness, identity};

fn restored(token: &str) -> SessionState {
    SessionState::Authenticated { user: None, token: token.to_owned() }
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn protected_route_waits_while_bootstrapping() {
    assert_eq!(guard_decision(&SessionState::Bootstrapping), GuardDecision::Placeholder);
}

#[test]
fn protected_route_redirects_when_signed_out() {
    assert_eq!(guard_decision(&SessionState::Unauthenticated), GuardDecision::Redirect);
}

#[test]
fn protected_route_renders_for_restored_token_without_identity() {
    assert_eq!(guard_decision(&restored("t")), GuardDecision::Render);
}

#[test]
fn protected_route_renders_for_confirmed_user() {
    let state = SessionState::Authenticated { user: Some(identity("u1")), token: "t".to_owned() };
    assert_eq!(guard_decision(&state), GuardDecision::Render);
}

// =============================================================
// public_decision
// =============================================================

#[test]
fn public_route_waits_while_bootstrapping() {
    assert_eq!(public_decision(&SessionState::Bootstrapping), GuardDecision::Placeholder);
}

#[test]
fn public_route_sends_signed_in_users_home() {
    assert_eq!(public_decision(&restored("t")), GuardDecision::Redirect);
}

#[test]
fn public_route_renders_when_signed_out() {
    assert_eq!(public_decision(&SessionState::Unauthenticated), GuardDecision::Render);
}

// =============================================================
// Decision sequences across session transitions
// =============================================================

#[test]
fn persisted_token_never_produces_redirect_during_startup() {
    let h = harness(Some("persisted"));
    let mut decisions = vec![guard_decision(&h.session.snapshot())];
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    h.session.subscribe(move |s| sink.lock().unwrap().push(guard_decision(s)));

    h.session.bootstrap();

    decisions.extend(seen.lock().unwrap().iter().copied());
    assert_eq!(decisions, vec![GuardDecision::Placeholder, GuardDecision::Render]);
}

#[test]
fn logout_flips_mounted_route_to_redirect() {
    let h = harness(None);
    h.session.bootstrap();
    h.session.set_auth(identity("u1"), "tok".to_owned());
    let last = std::sync::Arc::new(std::sync::Mutex::new(guard_decision(&h.session.snapshot())));
    assert_eq!(*last.lock().unwrap(), GuardDecision::Render);
    let sink = last.clone();
    h.session.subscribe(move |s| *sink.lock().unwrap() = guard_decision(s));

    h.session.logout();

    assert_eq!(*last.lock().unwrap(), GuardDecision::Redirect);
}
