//! Client configuration and fixed routing constants.
//!
//! A WASM bundle has no process environment, so values are captured at build
//! time through `option_env!` and parsed with the same rules tests exercise
//! through [`ClientConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Public entry point: unauthenticated redirects and forced resets land here.
pub const ENTRY_PATH: &str = "/login";
/// Registration page.
pub const REGISTER_PATH: &str = "/register";
/// Protected landing route after sign-in.
pub const HOME_PATH: &str = "/dashboard";

/// Pre-authentication endpoints. A 401 from these means wrong credentials,
/// not an expired session.
pub const EXEMPT_ENDPOINT_SEGMENTS: [&str; 2] = ["/auth/login", "/auth/register"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Analysis service origin, without a trailing slash.
    pub api_base_url: String,
    /// Upper bound on a single request, in milliseconds.
    pub request_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS }
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// - `RESUME_API_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `RESUME_API_TIMEOUT_MS`: default 10000
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "RESUME_API_BASE_URL" => option_env!("RESUME_API_BASE_URL").map(str::to_owned),
            "RESUME_API_TIMEOUT_MS" => option_env!("RESUME_API_TIMEOUT_MS").map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Missing or invalid values
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("RESUME_API_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let request_timeout_ms = parse_timeout_ms(lookup("RESUME_API_TIMEOUT_MS").as_deref());
        Self { api_base_url, request_timeout_ms }
    }

    /// Absolute URL for an endpoint path such as `/auth/login`.
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    match raw.and_then(|v| v.trim().parse::<u32>().ok()) {
        Some(0) | None => {
            if let Some(v) = raw {
                log::warn!("ignoring invalid RESUME_API_TIMEOUT_MS={v:?}");
            }
            DEFAULT_REQUEST_TIMEOUT_MS
        }
        Some(ms) => ms,
    }
}
