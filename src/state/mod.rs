//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session is shared across routes; pages keep their form state in
//! local signals.

pub mod session;
