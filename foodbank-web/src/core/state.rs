use std::sync::Arc;

use foodbank_client::{FoodItemApi, FoodItemGateway};

use crate::core::{Config, Result};

/// Server state shared by every handler
///
/// Cheap to clone: configuration and the inventory gateway sit behind `Arc`.
/// Nothing in here is mutated after startup.
///
/// | Field | Type | Notes |
/// |-------|------|-------|
/// | config | `Arc<Config>` | immutable configuration |
/// | gateway | `Arc<dyn FoodItemGateway>` | inventory API (pooled reqwest client) |
#[derive(Clone)]
pub struct ServerState {
    config: Arc<Config>,
    gateway: Arc<dyn FoodItemGateway>,
}

impl ServerState {
    /// Assemble state from an existing gateway (tests use a stub here)
    pub fn new(config: Config, gateway: Arc<dyn FoodItemGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }

    /// Build the network gateway from configuration
    pub fn initialize(config: &Config) -> Result<Self> {
        let api = FoodItemApi::from_config(&config.client_config())?;
        tracing::info!(base_url = %config.api_base_url, "Inventory API client ready");
        Ok(Self::new(config.clone(), Arc::new(api)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gateway(&self) -> &dyn FoodItemGateway {
        self.gateway.as_ref()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
