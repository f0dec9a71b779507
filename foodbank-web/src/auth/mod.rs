//! Login gate
//!
//! - [`require_login`] - middleware guarding the food bank routes
//!
//! Logging in itself happens elsewhere; this only checks that it did.

pub mod require_login;

pub use require_login::require_login;
