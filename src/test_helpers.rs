//! Shared fakes for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::net::types::UserIdentity;
use crate::state::session::Session;
use crate::util::reset::SessionReset;
use crate::util::token_store::{MemoryTokenStore, TokenStore};

/// Records every hard reset instead of navigating.
#[derive(Debug, Default)]
pub struct CountingReset {
    calls: AtomicUsize,
    last_path: Mutex<Option<String>>,
}

impl CountingReset {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_path(&self) -> Option<String> {
        self.last_path.lock().unwrap().clone()
    }
}

impl SessionReset for CountingReset {
    fn reset(&self, entry_path: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap() = Some(entry_path.to_owned());
    }
}

/// Store whose medium is permanently broken.
#[derive(Debug, Default)]
pub struct FailingStore;

impl TokenStore for FailingStore {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&self, _token: &str) {}

    fn clear(&self) {}
}

pub fn identity(id: &str) -> UserIdentity {
    UserIdentity {
        id: id.to_owned(),
        name: format!("User {id}"),
        email: format!("{id}@example.com"),
        role: "user".to_owned(),
    }
}

/// Session wired to inspectable fakes.
pub struct Harness {
    pub session: Session,
    pub store: Arc<MemoryTokenStore>,
    pub reset: Arc<CountingReset>,
}

pub fn harness(persisted: Option<&str>) -> Harness {
    let store = Arc::new(match persisted {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let reset = Arc::new(CountingReset::default());
    let session = Session::new(store.clone(), reset.clone());
    Harness { session, store, reset }
}

/// Harness already signed in as `user-1` with `token`.
pub fn signed_in(token: &str) -> Harness {
    let h = harness(None);
    h.session.bootstrap();
    h.session.set_auth(identity("user-1"), token.to_owned());
    h
}
