//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// Mutating calls only report success; the inventory API's echo bodies are
/// not needed by callers.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// GET returning the body as text, without decoding
    async fn get_text(&self, path: &str) -> ClientResult<String>;
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()>;
    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()>;
    async fn delete(&self, path: &str) -> ClientResult<()>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join base URL and path with exactly one `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<Response> {
        let request = match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        };
        let response = request.send().await?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        tracing::debug!(status = %status, body = %text, "Inventory API returned an error");
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Status { status, body: text },
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let text = self.get_text(path).await?;
        if text.trim().is_empty() {
            return Err(ClientError::InvalidResponse(format!(
                "empty body from GET {}",
                path
            )));
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_text(&self, path: &str) -> ClientResult<String> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Ok(response.text().await?)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.send(self.client.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.send(self.client.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}
