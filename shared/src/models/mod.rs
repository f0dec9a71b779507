//! Data models
//!
//! Shared between the REST client and the web server.

pub mod food_item;

pub use food_item::*;
