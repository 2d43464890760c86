//! Endpoint helpers for the analysis service.
//!
//! Thin wrappers: build the request, send it through the shared gateway,
//! decode the payload. Credential injection and session-expiry handling live
//! in the gateway, so callers only deal with endpoint-specific statuses.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiError, ApiRequest, Gateway, Transport};
use super::transport::BrowserTransport;
use super::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Resume};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const RESUMES_ENDPOINT: &str = "/resumes";

/// Gateway type provided as Leptos context.
pub type ApiClient = std::sync::Arc<Gateway<BrowserTransport>>;

/// Exchange email + password for a session token via `POST /auth/login`.
///
/// # Errors
///
/// `CredentialRejected` for wrong credentials; transport and decode errors
/// otherwise.
pub async fn login<T: Transport>(gateway: &Gateway<T>, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    gateway.send_json(ApiRequest::post_json(LOGIN_ENDPOINT, &body)?).await
}

/// Create an account via `POST /auth/register`. Does not sign in.
///
/// # Errors
///
/// `Status { status: 409, .. }` when the email is taken; transport errors
/// otherwise.
pub async fn register<T: Transport>(gateway: &Gateway<T>, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    gateway.send_json(ApiRequest::post_json(REGISTER_ENDPOINT, request)?).await
}

/// List the signed-in user's uploaded resumes via `GET /resumes`.
///
/// # Errors
///
/// `SessionExpired` when the token is no longer accepted.
pub async fn list_resumes<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Resume>, ApiError> {
    gateway.send_json(ApiRequest::get(RESUMES_ENDPOINT)).await
}

/// Inline message for a failed sign-in.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::CredentialRejected { .. } => "Invalid email or password".to_owned(),
        ApiError::Timeout(_) | ApiError::Network(_) => "Could not reach the server. Try again.".to_owned(),
        ApiError::Status { status, .. } if *status >= 500 => format!("Sign-in failed: server error {status}"),
        other => format!("Sign-in failed: {other}"),
    }
}

/// Inline message for a failed registration.
pub fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 409, .. } => "Registration failed. Email may already be in use.".to_owned(),
        ApiError::Status { status: 422, .. } => "Registration failed. Check the email address and password.".to_owned(),
        ApiError::Timeout(_) | ApiError::Network(_) => "Could not reach the server. Try again.".to_owned(),
        other => format!("Registration failed: {other}"),
    }
}

/// Inline message for a failed resume listing.
pub fn resumes_error_message(err: &ApiError) -> String {
    match err {
        ApiError::SessionExpired { .. } => "Your session has expired. Please sign in again.".to_owned(),
        other => format!("Could not load resumes: {other}"),
    }
}
