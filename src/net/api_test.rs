use super::*;
use crate::net::gateway::{AUTHORIZATION, ApiResponse};
use crate::test_helpers::{harness, signed_in};
use crate::util::token_store::TokenStore;
use futures::executor::block_on;
use std::sync::Mutex;

/// Replies with a fixed status/body and remembers the last request.
struct Fixed {
    status: u16,
    body: &'static str,
    last: Mutex<Option<ApiRequest>>,
}

impl Fixed {
    fn new(status: u16, body: &'static str) -> Self {
        Self { status, body, last: Mutex::new(None) }
    }

    fn last(&self) -> ApiRequest {
        self.last.lock().unwrap().clone().unwrap()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for Fixed {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        *self.last.lock().unwrap() = Some(request.clone());
        Ok(ApiResponse { status: self.status, body: self.body.to_owned() })
    }
}

const LOGIN_OK: &str = r#"{"token":"jwt-1","user":{"id":"u1","name":"Ada","email":"ada@example.com","role":"user"}}"#;

#[test]
fn login_posts_credentials_and_decodes_payload() {
    let h = harness(None);
    h.session.bootstrap();
    let transport = Fixed::new(200, LOGIN_OK);
    let gateway = Gateway::authorized(&transport, h.session.clone());

    let resp = block_on(login(&gateway, "ada@example.com", "pw")).unwrap();

    assert_eq!(resp.token, "jwt-1");
    assert_eq!(resp.user.name, "Ada");
    let sent = transport.last();
    assert_eq!(sent.path, LOGIN_ENDPOINT);
    assert_eq!(sent.header(AUTHORIZATION), None);
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"email": "ada@example.com", "password": "pw"}));
}

#[test]
fn wrong_password_surfaces_to_caller_without_logout() {
    let h = signed_in("old-token");
    let transport = Fixed::new(401, r#"{"detail":"Invalid credentials"}"#);
    let gateway = Gateway::authorized(&transport, h.session.clone());

    let err = block_on(login(&gateway, "ada@example.com", "nope")).unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(login_error_message(&err), "Invalid email or password");
    assert_eq!(h.reset.calls(), 0);
    assert_eq!(h.store.read().as_deref(), Some("old-token"));
}

#[test]
fn register_conflict_maps_to_inline_message() {
    let h = harness(None);
    h.session.bootstrap();
    let transport = Fixed::new(409, r#"{"detail":"Email already registered"}"#);
    let gateway = Gateway::authorized(&transport, h.session.clone());
    let request = RegisterRequest { name: "Ada".to_owned(), email: "ada@example.com".to_owned(), password: "pw".to_owned() };

    let err = block_on(register(&gateway, &request)).unwrap_err();

    assert_eq!(register_error_message(&err), "Registration failed. Email may already be in use.");
    assert_eq!(transport.last().path, REGISTER_ENDPOINT);
}

#[test]
fn list_resumes_sends_bearer_and_decodes() {
    let h = signed_in("jwt-1");
    let transport = Fixed::new(200, r#"[{"id":"r1","filename":"cv.pdf","createdAt":"2026-01-01T00:00:00Z"}]"#);
    let gateway = Gateway::authorized(&transport, h.session.clone());

    let resumes = block_on(list_resumes(&gateway)).unwrap();

    assert_eq!(resumes.len(), 1);
    assert_eq!(resumes[0].filename, "cv.pdf");
    assert_eq!(transport.last().header(AUTHORIZATION), Some("Bearer jwt-1"));
}

#[test]
fn list_resumes_with_expired_token_forces_logout() {
    let h = signed_in("jwt-1");
    let transport = Fixed::new(401, r#"{"detail":"Invalid or expired token"}"#);
    let gateway = Gateway::authorized(&transport, h.session.clone());

    let err = block_on(list_resumes(&gateway)).unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired { .. }));
    assert_eq!(resumes_error_message(&err), "Your session has expired. Please sign in again.");
    assert_eq!(h.reset.calls(), 1);
    assert!(!h.session.is_authenticated());
}

#[test]
fn login_error_message_distinguishes_connectivity() {
    assert_eq!(login_error_message(&ApiError::Timeout(10_000)), "Could not reach the server. Try again.");
    assert_eq!(
        login_error_message(&ApiError::Status { status: 503, body: String::new() }),
        "Sign-in failed: server error 503"
    );
}

#[test]
fn register_error_message_for_validation_failure() {
    assert_eq!(
        register_error_message(&ApiError::Status { status: 422, body: String::new() }),
        "Registration failed. Check the email address and password."
    );
}
