//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap protected routes and render shared chrome, reading session
//! state from Leptos context providers.

pub mod dashboard_layout;
pub mod route_guard;
