//! HTTP transport for the browser.
//!
//! Client-side (hydrate): `gloo-net` fetch raced against a `gloo-timers`
//! deadline. Server-side (SSR): every call fails with `Network`, since the
//! service is only reachable from the browser that holds the token.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::gateway::{ApiError, ApiRequest, ApiResponse, Transport};
#[cfg(feature = "hydrate")]
use super::gateway::Method;
use crate::config::ClientConfig;

/// Fetch-based transport bounded by the configured request timeout.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: ClientConfig,
}

impl BrowserTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::RequestBuilder;

            let url = self.config.endpoint_url(&request.path);
            let mut builder = match request.method {
                Method::Get => RequestBuilder::new(&url).method(gloo_net::http::Method::GET),
                Method::Post => RequestBuilder::new(&url).method(gloo_net::http::Method::POST),
                Method::Put => RequestBuilder::new(&url).method(gloo_net::http::Method::PUT),
                Method::Delete => RequestBuilder::new(&url).method(gloo_net::http::Method::DELETE),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(body) => builder.body(body.clone()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let timeout_ms = self.config.request_timeout_ms;
            let exchange = Box::pin(async move {
                let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Ok::<_, ApiError>(ApiResponse { status, body })
            });
            let deadline = gloo_timers::future::TimeoutFuture::new(timeout_ms);

            match select(exchange, deadline).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(((), _)) => {
                    log::warn!("{} {} timed out after {timeout_ms} ms", request.method.as_str(), request.path);
                    Err(ApiError::Timeout(timeout_ms))
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.config);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
