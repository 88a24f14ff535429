//! HTTP client for the per-user item API.

use crate::error::Result;
use crate::pipeline::Item;
use serde::Deserialize;
use std::time::Duration;

/// Response envelope for `GET {base}/users/{id}/items`
#[derive(Debug, Deserialize)]
struct ItemsResponse {
    #[serde(default)]
    items: Vec<Item>,
}

/// Client for fetching a user's items from the remote API
///
/// One client is built per [`BatchProcessor`](crate::pipeline::BatchProcessor)
/// and reused across the whole run. Every request carries the configured
/// timeout so a hung remote call cannot stall the batch indefinitely.
#[derive(Debug, Clone)]
pub struct ItemClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItemClient {
    /// Create a client for the given API base URL
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            // Trailing slashes would otherwise produce "//users/1/items"
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the items for one user
    ///
    /// Returns an error on connection failure, timeout, a non-success HTTP
    /// status, or a malformed body. The caller decides the recovery; the
    /// batch run substitutes an empty list and continues.
    pub async fn fetch_items(&self, user_id: i64) -> Result<Vec<Item>> {
        let url = format!("{}/users/{}/items", self.base_url, user_id);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: ItemsResponse = response.json().await?;

        Ok(body.items)
    }
}
