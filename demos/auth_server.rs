//! Auth server demo
//!
//! Starts the login API against a local SQLite user store, seeding one demo
//! account if the table is empty.
//!
//! Run with:
//! ```sh
//! JWT_SECRET=change-me cargo run --example auth_server
//! ```

use std::sync::Arc;
use userflow::api::start_api_server;
use userflow::{Config, Database};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Fails immediately when JWT_SECRET is missing
    let config = Arc::new(Config::from_env()?);

    let db = Arc::new(Database::connect(&config.auth.database_url).await?);

    // Seed a demo account on first run
    if db
        .find_by_credentials("demo", "demo")
        .await?
        .is_none()
    {
        match db.insert_user("demo", "demo").await {
            Ok(id) => tracing::info!(id, "Seeded demo user"),
            Err(e) => tracing::debug!(error = %e, "Demo user already present"),
        }
    }

    start_api_server(db, config).await?;
    Ok(())
}
