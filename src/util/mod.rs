//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, hard navigation) and
//! route-guard rules from page and component logic to keep them testable.

pub mod auth;
pub mod reset;
pub mod token_store;
