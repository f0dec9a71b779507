//! Foodbank Client - REST client for the inventory API
//!
//! Provides typed calls against the remote `/FoodItemApi` resource.

pub mod config;
pub mod error;
pub mod food_items;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use food_items::{FoodItemApi, FoodItemGateway};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{FoodItem, FoodItemForm};
