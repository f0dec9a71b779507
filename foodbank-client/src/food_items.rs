//! Food item resource on the inventory API
//!
//! [`FoodItemApi`] wraps any [`HttpClient`] and speaks the `/FoodItemApi`
//! routes. [`FoodItemGateway`] is the object-safe face of the same calls so
//! the web server can hold `Arc<dyn FoodItemGateway>`.

use async_trait::async_trait;
use shared::models::FoodItem;

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Resource path of the food item controller
pub const RESOURCE: &str = "FoodItemApi";

/// Food item CRUD, as seen by the presentation layer
#[async_trait]
pub trait FoodItemGateway: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<FoodItem>>;
    /// Listing body exactly as the API sent it
    async fn list_raw(&self) -> ClientResult<String>;
    async fn get(&self, id: i32) -> ClientResult<FoodItem>;
    async fn create(&self, item: &FoodItem) -> ClientResult<()>;
    async fn update(&self, id: i32, item: &FoodItem) -> ClientResult<()>;
    async fn delete(&self, id: i32) -> ClientResult<()>;
}

/// Typed calls against `/FoodItemApi`
#[derive(Debug, Clone)]
pub struct FoodItemApi<C> {
    http: C,
}

impl<C: HttpClient> FoodItemApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    fn item_path(id: i32) -> String {
        format!("{}/{}", RESOURCE, id)
    }
}

impl FoodItemApi<NetworkHttpClient> {
    /// Build over a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

#[async_trait]
impl<C: HttpClient> FoodItemGateway for FoodItemApi<C> {
    async fn list(&self) -> ClientResult<Vec<FoodItem>> {
        // a `null` body is an empty inventory
        let items: Option<Vec<FoodItem>> = self.http.get(RESOURCE).await?;
        let items = items.unwrap_or_default();
        tracing::debug!(count = items.len(), "Loaded food items");
        Ok(items)
    }

    async fn list_raw(&self) -> ClientResult<String> {
        self.http.get_text(RESOURCE).await
    }

    async fn get(&self, id: i32) -> ClientResult<FoodItem> {
        self.http.get(&Self::item_path(id)).await
    }

    async fn create(&self, item: &FoodItem) -> ClientResult<()> {
        self.http.post(RESOURCE, item).await?;
        tracing::info!(name = %item.name, "Food item created");
        Ok(())
    }

    async fn update(&self, id: i32, item: &FoodItem) -> ClientResult<()> {
        self.http.put(&Self::item_path(id), item).await?;
        tracing::info!(id, "Food item updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> ClientResult<()> {
        self.http.delete(&Self::item_path(id)).await?;
        tracing::info!(id, "Food item deleted");
        Ok(())
    }
}
