//! REST API server module
//!
//! Serves the login endpoint backed by the user store, plus health and
//! OpenAPI documentation routes.

use crate::error::{Error, Result};
use crate::{Config, Database};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod token;

pub use openapi::ApiDoc;
pub use state::AppState;
pub use token::{Claims, issue_token, verify_token};

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Auth
/// - `POST /login` - Check credentials, issue a signed token
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(db: Arc<Database>, config: Arc<Config>) -> Router {
    let state = AppState::new(db, config.clone());

    let router = Router::new()
        .route("/login", post(routes::login))
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (before applying state)
    let router = if config.auth.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    let router = router.with_state(state);

    // Apply CORS middleware if enabled in config
    if config.auth.cors_enabled {
        let cors = build_cors_layer(&config.auth.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// Allows the specified origins ("*" or an empty list means any origin),
/// all methods, and all headers for cross-origin requests.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address
///
/// Connects nothing itself: the caller supplies the database handle, keeping
/// connection ownership explicit. Refuses to start when the signing secret
/// is empty, so a misconfigured process fails here rather than at the first
/// login. Runs until the server stops.
pub async fn start_api_server(db: Arc<Database>, config: Arc<Config>) -> Result<()> {
    if config.auth.jwt_secret.is_empty() {
        return Err(Error::Config {
            message: "JWT_SECRET not set".to_string(),
            key: Some("jwt_secret".to_string()),
        });
    }

    let bind_address = config.auth.bind_address;

    tracing::info!(address = %bind_address, "Starting API server");

    let app = create_router(db, config);

    let listener = TcpListener::bind(bind_address).await.map_err(Error::Io)?;

    tracing::info!(address = %bind_address, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
