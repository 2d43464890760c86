//! Full-session reset signal.
//!
//! Distinct from in-app routing: a reset reloads the document at the entry
//! path so every piece of in-memory state tied to the old session (signals,
//! caches, pending UI) is dropped instead of partially reused.

/// Performs a process-level navigation reset.
pub trait SessionReset: Send + Sync {
    /// Leave the current document and load `entry_path` from scratch.
    fn reset(&self, entry_path: &str);
}

impl<T: SessionReset + ?Sized> SessionReset for std::sync::Arc<T> {
    fn reset(&self, entry_path: &str) {
        (**self).reset(entry_path);
    }
}

/// Hard navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserReload;

impl SessionReset for BrowserReload {
    fn reset(&self, entry_path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(entry_path) {
                    log::warn!("hard navigation to {entry_path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("session reset to {entry_path} requested outside the browser");
        }
    }
}
