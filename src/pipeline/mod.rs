//! Batch transform pipeline
//!
//! A strictly sequential fetch-transform-write run: read a list of users from
//! a local JSON file, fetch each user's items from the item API, keep the
//! active ones with a doubled value above the threshold, and write one result
//! record per user to the output file.
//!
//! ## Failure policy
//!
//! A failed fetch for one user logs a warning and substitutes an empty item
//! list; it never aborts the batch. A failure reading the input file or
//! writing the output file aborts the run. Nothing is retried.

use crate::config::PipelineConfig;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod client;
mod transform;

pub use client::ItemClient;
pub use transform::process_items;

/// User record from the input file
///
/// Only the identifier is required; the rest of the record is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: i64,
    /// Display name, if the input file carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Item record as returned by the item API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier
    pub id: i64,
    /// Inactive items are dropped before any transformation
    #[serde(default)]
    pub active: bool,
    /// Numeric value; doubled during the transform
    #[serde(default)]
    pub value: f64,
}

/// An item that survived filtering and transformation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedItem {
    /// Identifier carried over from the source item
    pub id: i64,
    /// Always true; inactive items never reach the output
    pub active: bool,
    /// The doubled value
    pub value: f64,
    /// Generation timestamp, fixed once per run (not per item)
    pub processed_at: DateTime<Utc>,
}

/// Aggregated result for one input user
///
/// Constructed once per user and never mutated afterwards. The item list may
/// be empty, either because nothing qualified or because the fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResult {
    /// Identifier of the input user
    pub user_id: i64,
    /// The user's filtered and transformed items
    pub processed_items: Vec<ProcessedItem>,
}

/// Orchestrates one batch run
///
/// Holds the HTTP client and the run configuration. Users are processed one
/// at a time, each fetch awaited before the next user starts; ordering of the
/// output therefore matches the input file.
pub struct BatchProcessor {
    client: ItemClient,
    config: PipelineConfig,
}

impl BatchProcessor {
    /// Create a processor for the given pipeline configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let client = ItemClient::new(&config.api_base_url, config.fetch_timeout_secs)?;
        Ok(Self { client, config })
    }

    /// Execute one full batch run
    ///
    /// Reads the user file, fetches and transforms items per user, writes the
    /// aggregated output file, and returns the results.
    pub async fn run(&self) -> Result<Vec<ProcessedResult>> {
        let users = read_users(&self.config.users_file).await?;
        tracing::info!(
            users = users.len(),
            input = %self.config.users_file.display(),
            "Starting batch run"
        );

        let processed_at = Utc::now();
        let mut results = Vec::with_capacity(users.len());

        for user in &users {
            let items = match self.client.fetch_items(user.id).await {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(
                        user_id = user.id,
                        error = %e,
                        "Item fetch failed, substituting empty list"
                    );
                    Vec::new()
                }
            };

            results.push(ProcessedResult {
                user_id: user.id,
                processed_items: process_items(&items, processed_at),
            });
        }

        write_results(&self.config.output_file, &results).await?;
        tracing::info!(
            results = results.len(),
            output = %self.config.output_file.display(),
            "Batch run complete"
        );

        Ok(results)
    }
}

/// Read the user list from a local JSON file
///
/// A missing or malformed file is fatal to the run.
pub async fn read_users(path: &Path) -> Result<Vec<User>> {
    let data = tokio::fs::read_to_string(path).await?;
    let users = serde_json::from_str(&data)?;
    Ok(users)
}

/// Write aggregated results as pretty-printed JSON
///
/// A write failure is fatal to the run.
pub async fn write_results(path: &Path, results: &[ProcessedResult]) -> Result<()> {
    let data = serde_json::to_string_pretty(results)?;
    tokio::fs::write(path, data).await?;
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
