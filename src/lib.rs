//! # userflow
//!
//! Backend library for a per-user item processing pipeline and the small
//! authenticated API that fronts its user store.
//!
//! ## Design Philosophy
//!
//! userflow is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Works out of the box with zero configuration
//! - **Strictly sequential** - The pipeline processes users one at a time;
//!   a failed fetch for one user never aborts the batch
//!
//! ## Quick Start
//!
//! ```no_run
//! use userflow::{BatchProcessor, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!
//!     let processor = BatchProcessor::new(config.pipeline)?;
//!     let results = processor.run().await?;
//!
//!     println!("Processed {} users", results.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Bank account ledger type
pub mod bank;
/// Configuration types
pub mod config;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// Integer and sequence helpers
pub mod numeric;
/// Person and student records
pub mod people;
/// Batch transform pipeline
pub mod pipeline;
/// String extraction and formatting helpers
pub mod text;

// Re-export commonly used types
pub use config::{AuthConfig, Config, PipelineConfig};
pub use db::{Database, UserRow};
pub use error::{DatabaseError, DomainError, Error, Result, ToHttpStatus};
pub use pipeline::{BatchProcessor, Item, ProcessedItem, ProcessedResult, User};
