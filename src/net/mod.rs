//! Networking modules for the analysis service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns credential injection and expiry detection, `transport`
//! performs browser fetches, `api` wraps individual endpoints, and `types`
//! defines the wire schema.

pub mod api;
pub mod gateway;
pub mod transport;
pub mod types;
