//! Batch pipeline demo
//!
//! Reads users from a local JSON file, fetches each user's items from the
//! item API, filters and transforms them, and writes the aggregated results.
//!
//! Run with:
//! ```sh
//! API_BASE_URL=http://localhost:9000 cargo run --example process_users
//! ```

use userflow::{BatchProcessor, PipelineConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // USERS_FILE, OUTPUT_FILE and API_BASE_URL come from the environment,
    // with defaults of users.json / processed_results.json
    let config = PipelineConfig::from_env();
    let output_file = config.output_file.clone();

    let processor = BatchProcessor::new(config)?;
    let results = processor.run().await?;

    println!(
        "Processing complete. {} results written to {}",
        results.len(),
        output_file.display()
    );
    Ok(())
}
