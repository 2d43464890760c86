//! Client session lifecycle: bootstrap, sign-in, sign-out, forced sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is created once by the root component and shared three ways:
//! as Leptos context for pages, mirrored into an `RwSignal<SessionState>` for
//! reactive route guards, and held by the gateway's auth layers, which read
//! the token and trigger forced sign-out from outside the component tree.
//!
//! DESIGN
//! ======
//! "Not yet known" is a first-class `Bootstrapping` value rather than a
//! loading flag beside an auth flag, so no consumer can read the startup
//! window as "signed out". Every mutation persists through the `TokenStore`
//! before listeners observe the new state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::config::ENTRY_PATH;
use crate::net::types::UserIdentity;
use crate::util::reset::SessionReset;
use crate::util::token_store::TokenStore;

/// Snapshot of the session state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted token not read yet. Never treat this as signed out.
    #[default]
    Bootstrapping,
    /// A token is held. `user` is `None` when the token was restored from
    /// storage and no server response has confirmed the identity yet.
    Authenticated { user: Option<UserIdentity>, token: String },
    /// No token.
    Unauthenticated,
}

impl SessionState {
    pub fn current_user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated { user, .. } => user.as_ref(),
            _ => None,
        }
    }

    pub fn current_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_bootstrapped(&self) -> bool {
        !matches!(self, Self::Bootstrapping)
    }
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct SessionInner {
    state: RwLock<SessionState>,
    store: Arc<dyn TokenStore>,
    reset: Arc<dyn SessionReset>,
    listeners: Mutex<Vec<Listener>>,
    /// Cleared by the first forced logout so duplicates skip the hard reset.
    reset_armed: AtomicBool,
}

/// Owner handle for the client session. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("bootstrapped", &self.is_bootstrapped())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create an unbootstrapped session over `store`, resetting through `reset`.
    pub fn new(store: impl TokenStore + 'static, reset: impl SessionReset + 'static) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(SessionState::Bootstrapping),
                store: Arc::new(store),
                reset: Arc::new(reset),
                listeners: Mutex::new(Vec::new()),
                reset_armed: AtomicBool::new(true),
            }),
        }
    }

    /// Register a callback invoked with every published state.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    pub fn snapshot(&self) -> SessionState {
        self.read_state().clone()
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.read_state().current_user().cloned()
    }

    pub fn current_token(&self) -> Option<String> {
        self.read_state().current_token().map(str::to_owned)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().is_authenticated()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.read_state().is_bootstrapped()
    }

    /// Restore the session from the persisted token.
    ///
    /// Runs once; later calls, or calls after any other transition already
    /// settled the state, return the current snapshot untouched. A restored
    /// token is trusted until a protected request proves it invalid.
    pub fn bootstrap(&self) -> SessionState {
        if self.is_bootstrapped() {
            return self.snapshot();
        }
        let restored = self.inner.store.read();

        let next = {
            let mut state = self.write_state();
            if state.is_bootstrapped() {
                return state.clone();
            }
            *state = match restored {
                Some(token) => SessionState::Authenticated { user: None, token },
                None => SessionState::Unauthenticated,
            };
            state.clone()
        };
        log::info!("session bootstrapped (authenticated: {})", next.is_authenticated());
        self.publish(&next);
        next
    }

    /// Record a successful sign-in. The token is persisted before the new
    /// state is published, so callers may render protected views right after.
    pub fn set_auth(&self, user: UserIdentity, token: String) {
        self.inner.store.write(&token);
        let user_id = user.id.clone();
        let next = SessionState::Authenticated { user: Some(user), token };
        *self.write_state() = next.clone();
        self.inner.reset_armed.store(true, Ordering::Release);
        log::info!("signed in as user {user_id}");
        self.publish(&next);
    }

    /// User-initiated sign-out. Navigation is left to the caller.
    pub fn logout(&self) {
        self.inner.store.clear();
        *self.write_state() = SessionState::Unauthenticated;
        log::info!("signed out");
        self.publish(&SessionState::Unauthenticated);
    }

    /// Invalidate the session from anywhere (the gateway, non-UI code) and
    /// hard-reset to the entry path.
    ///
    /// Idempotent: storage and state always end cleared, but only the first
    /// call after a sign-in performs the reset.
    pub fn force_logout(&self) {
        self.inner.store.clear();
        let changed = {
            let mut state = self.write_state();
            let changed = *state != SessionState::Unauthenticated;
            *state = SessionState::Unauthenticated;
            changed
        };
        if changed {
            self.publish(&SessionState::Unauthenticated);
        }

        if self.inner.reset_armed.swap(false, Ordering::AcqRel) {
            log::warn!("session invalidated by server, resetting to {ENTRY_PATH}");
            self.inner.reset.reset(ENTRY_PATH);
        } else {
            log::debug!("redundant forced logout ignored");
        }
    }

    fn publish(&self, state: &SessionState) {
        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(state);
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
