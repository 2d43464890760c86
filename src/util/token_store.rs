//! Persisted bearer-token storage.
//!
//! Holds exactly one opaque string under a fixed `localStorage` key so the
//! session survives page reloads. Only the session owner writes here.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach callers. A missing or broken medium reads as
//! "no token" and writes/clears become logged no-ops, so the client falls back
//! to an unauthenticated session instead of failing hydration.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Fixed storage key for the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "resume_analyzer_auth_token";

/// Failure talking to the underlying storage medium.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage medium is reachable (no window, storage disabled, SSR).
    #[error("storage unavailable")]
    Unavailable,

    /// The medium exists but rejected the operation (quota, security policy).
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Durable read/write/clear of the single session token.
///
/// Implementations must not panic and must not surface errors; see
/// [`BrowserTokenStore`] for the fail-open contract.
pub trait TokenStore: Send + Sync {
    /// Return the persisted token, or `None` when absent or unreadable.
    fn read(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn write(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, token: &str) {
        (**self).write(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage`-backed store.
///
/// The `Storage` handle is looked up per call rather than cached so the store
/// stays `Send + Sync` for Leptos context. Server builds have no medium and
/// behave as an always-empty store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Operation(format!("{e:?}"))),
        }
    }

    fn try_read() -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Operation(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn try_write(token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| StorageError::Operation(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn try_clear() -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Operation(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn read(&self) -> Option<String> {
        match Self::try_read() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("token read failed, treating as signed out: {e}");
                None
            }
        }
    }

    fn write(&self, token: &str) {
        if let Err(e) = Self::try_write(token) {
            log::warn!("token write skipped: {e}");
        }
    }

    fn clear(&self) {
        if let Err(e) = Self::try_clear() {
            log::warn!("token clear skipped: {e}");
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store. Used by server renders and as a test double.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`, as if persisted by an earlier page load.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
