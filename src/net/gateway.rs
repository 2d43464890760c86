//! Authorized request gateway.
//!
//! ARCHITECTURE
//! ============
//! Every call to the analysis service runs through one `Gateway`, built once
//! at startup as an ordered pipeline:
//!
//! 1. request layers (credential injection) transform the outgoing request,
//! 2. the `Transport` performs the exchange under its own time bound,
//! 3. non-2xx statuses become `ApiError::Status`,
//! 4. response layers (expiry detection) transform the outcome.
//!
//! Layers are synchronous and see the request exactly as it was sent.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from a protected endpoint forces a session logout *and* still comes
//! back to the caller as `SessionExpired`, so page-local handlers run too. A
//! 401 from login/registration is only reclassified as `CredentialRejected`.
//! Timeouts and network failures pass through untouched and never count as
//! auth failures.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::EXEMPT_ENDPOINT_SEGMENTS;
use crate::state::session::Session;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const UNAUTHORIZED: u16 = 401;

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Outgoing request, addressed by path relative to the service origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// `POST` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = Self::new(Method::Post, path).with_header(CONTENT_TYPE, "application/json");
        request.body = Some(json);
        Ok(request)
    }

    /// Set a header, replacing any existing value (names compare
    /// case-insensitively).
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Completed HTTP exchange, any status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Errors surfaced by gateway calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The transport gave up waiting.
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// Connectivity failure; no response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// A protected endpoint rejected the session's credential. The session
    /// has already been force-logged-out when the caller sees this.
    #[error("session expired (status {status})")]
    SessionExpired { status: u16, body: String },

    /// Login or registration rejected the submitted credentials.
    #[error("credentials rejected (status {status})")]
    CredentialRejected { status: u16, body: String },

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Original HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::SessionExpired { status, .. } | Self::CredentialRejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::SessionExpired { .. } | Self::CredentialRejected { .. })
    }
}

// =============================================================================
// PIPELINE LAYERS
// =============================================================================

/// Transforms a request before it is sent.
pub trait RequestLayer: Send + Sync {
    fn on_request(&self, request: ApiRequest) -> ApiRequest;
}

/// Transforms the outcome of a sent request.
pub trait ResponseLayer: Send + Sync {
    fn on_response(
        &self,
        request: &ApiRequest,
        outcome: Result<ApiResponse, ApiError>,
    ) -> Result<ApiResponse, ApiError>;
}

/// Value for a bearer-scheme `Authorization` header.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Stamps the current session token on outgoing requests.
///
/// While the session is bootstrapping or signed out the request goes out
/// unmodified; the service is the authority on access.
#[derive(Clone, Debug)]
pub struct RequestAuthorizer {
    session: Session,
}

impl RequestAuthorizer {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RequestLayer for RequestAuthorizer {
    fn on_request(&self, request: ApiRequest) -> ApiRequest {
        match self.session.current_token() {
            Some(token) => request.with_header(AUTHORIZATION, bearer(&token)),
            None => request,
        }
    }
}

/// Detects invalidated sessions in responses.
#[derive(Clone, Debug)]
pub struct ResponseAuthValidator {
    session: Session,
    exempt: Vec<String>,
}

impl ResponseAuthValidator {
    /// Validator exempting the login and registration endpoints.
    pub fn new(session: Session) -> Self {
        Self::with_exempt(session, EXEMPT_ENDPOINT_SEGMENTS.iter().map(|s| (*s).to_owned()).collect())
    }

    pub fn with_exempt(session: Session, exempt: Vec<String>) -> Self {
        Self { session, exempt }
    }

    /// Whether `path` is a pre-authentication endpoint.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt.iter().any(|segment| path.contains(segment.as_str()))
    }
}

impl ResponseLayer for ResponseAuthValidator {
    fn on_response(
        &self,
        request: &ApiRequest,
        outcome: Result<ApiResponse, ApiError>,
    ) -> Result<ApiResponse, ApiError> {
        match outcome {
            Err(ApiError::Status { status: UNAUTHORIZED, body }) => {
                if self.is_exempt(&request.path) {
                    Err(ApiError::CredentialRejected { status: UNAUTHORIZED, body })
                } else {
                    log::warn!("{} {} rejected the session credential", request.method.as_str(), request.path);
                    self.session.force_logout();
                    Err(ApiError::SessionExpired { status: UNAUTHORIZED, body })
                }
            }
            other => other,
        }
    }
}

// =============================================================================
// TRANSPORT + GATEWAY
// =============================================================================

/// Performs one HTTP exchange. Any received status is `Ok`; only failures
/// to obtain a response are `Err` (`Timeout`/`Network`).
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

/// Ordered request/response pipeline over a transport.
pub struct Gateway<T> {
    transport: T,
    request_layers: Vec<Box<dyn RequestLayer>>,
    response_layers: Vec<Box<dyn ResponseLayer>>,
}

impl<T> std::fmt::Debug for Gateway<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("request_layers", &self.request_layers.len())
            .field("response_layers", &self.response_layers.len())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Gateway<T> {
    /// Bare pipeline with no layers.
    pub fn new(transport: T) -> Self {
        Self { transport, request_layers: Vec::new(), response_layers: Vec::new() }
    }

    /// Pipeline with credential injection and session-expiry detection.
    pub fn authorized(transport: T, session: Session) -> Self {
        Self::new(transport)
            .with_request_layer(RequestAuthorizer::new(session.clone()))
            .with_response_layer(ResponseAuthValidator::new(session))
    }

    #[must_use]
    pub fn with_request_layer(mut self, layer: impl RequestLayer + 'static) -> Self {
        self.request_layers.push(Box::new(layer));
        self
    }

    #[must_use]
    pub fn with_response_layer(mut self, layer: impl ResponseLayer + 'static) -> Self {
        self.response_layers.push(Box::new(layer));
        self
    }

    /// Run request layers in registration order.
    pub fn prepare(&self, request: ApiRequest) -> ApiRequest {
        self.request_layers.iter().fold(request, |req, layer| layer.on_request(req))
    }

    /// Classify the raw transport outcome, then run response layers in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for non-2xx statuses and transport
    /// failures.
    pub fn complete(
        &self,
        request: &ApiRequest,
        outcome: Result<ApiResponse, ApiError>,
    ) -> Result<ApiResponse, ApiError> {
        let outcome = outcome.and_then(|resp| {
            if resp.is_success() {
                Ok(resp)
            } else {
                Err(ApiError::Status { status: resp.status, body: resp.body })
            }
        });
        self.response_layers.iter().fold(outcome, |out, layer| layer.on_response(request, out))
    }

    /// Send `request` through the full pipeline.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let prepared = self.prepare(request);
        let outcome = self.transport.send(&prepared).await;
        self.complete(&prepared, outcome)
    }

    /// Send and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.send(request).await?.json()
    }
}
