//! HTTP client for the Stock API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Stock API.
#[derive(Debug, Clone)]
pub struct StockClient {
    client: Client,
    base_url: String,
}

impl StockClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Stocks
    // ========================================================================

    /// Creates a new stock.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_stock(&self, request: &StockRequest) -> Result<MutationResponse, Error> {
        let url = format!("{}/api/newstock", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a stock by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_stock(&self, id: i64) -> Result<Stock, Error> {
        let url = format!("{}/api/stock/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists all stocks.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_all_stocks(&self) -> Result<Vec<Stock>, Error> {
        let url = format!("{}/api/stock", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Updates a stock by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_stock(
        &self,
        id: i64,
        request: &StockRequest,
    ) -> Result<MutationResponse, Error> {
        let url = format!("{}/api/stock/{}", self.base_url, id);
        let resp = self.client.put(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Deletes a stock by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_stock(&self, id: i64) -> Result<MutationResponse, Error> {
        let url = format!("{}/api/deletestock/{}", self.base_url, id);
        let resp = self.client.delete(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
