//! Configuration types for userflow

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Batch pipeline configuration (file paths, item API endpoint)
///
/// Groups settings for the fetch-transform-write run.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the input JSON file of user records (default: "users.json")
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,

    /// Path the aggregated results are written to (default: "processed_results.json")
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Base URL of the item API; items are fetched from
    /// `{api_base_url}/users/{id}/items`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout for item fetches, in seconds (default: 30)
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            output_file: default_output_file(),
            api_base_url: default_api_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Authentication API configuration (bind address, store, token signing)
///
/// Used as a nested sub-config within [`Config`]. The `jwt_secret` has no
/// usable default; [`Config::from_env`] refuses to produce a config without
/// one, and the server refuses to start with an empty secret.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Address the API server binds to (default: 127.0.0.1:3000)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// SQLx connection URL for the user store
    /// (default: "sqlite://userflow.db?mode=rwc")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// HS256 signing secret for issued tokens (required, no default)
    #[serde(default)]
    pub jwt_secret: String,

    /// Issued token lifetime in seconds (default: 3600)
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,

    /// Enable CORS for the API (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; "*" or an empty list allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve Swagger UI at /swagger-ui (default: false)
    #[serde(default)]
    pub swagger_ui: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            database_url: default_database_url(),
            jwt_secret: String::new(),
            token_ttl_secs: default_token_ttl_secs(),
            cors_enabled: true,
            cors_origins: Vec::new(),
            swagger_ui: false,
        }
    }
}

/// Main configuration for userflow
///
/// Fields are organized into logical sub-configs:
/// - [`pipeline`](PipelineConfig) — batch run inputs, outputs, item API
/// - [`auth`](AuthConfig) — API server, user store, token signing
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Batch pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Authentication API settings
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Build a configuration from environment variables
    ///
    /// Reads `JWT_SECRET` (required), `DATABASE_URL`, `BIND_ADDRESS`,
    /// `API_BASE_URL`, `USERS_FILE` and `OUTPUT_FILE`; anything unset falls
    /// back to its default. A missing or empty `JWT_SECRET` is an error so
    /// that the process fails at startup rather than at the first login.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    ///
    /// [`from_env`](Config::from_env) delegates here; tests supply a closure
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Config {
                message: "JWT_SECRET not set".to_string(),
                key: Some("jwt_secret".to_string()),
            })?;

        let mut config = Config {
            auth: AuthConfig {
                jwt_secret,
                ..AuthConfig::default()
            },
            ..Config::default()
        };

        if let Some(url) = lookup("DATABASE_URL") {
            config.auth.database_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDRESS") {
            config.auth.bind_address = addr.parse().map_err(|_| Error::Config {
                message: format!("invalid bind address: {addr}"),
                key: Some("bind_address".to_string()),
            })?;
        }
        if let Some(url) = lookup("API_BASE_URL") {
            config.pipeline.api_base_url = url;
        }
        if let Some(path) = lookup("USERS_FILE") {
            config.pipeline.users_file = PathBuf::from(path);
        }
        if let Some(path) = lookup("OUTPUT_FILE") {
            config.pipeline.output_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

impl PipelineConfig {
    /// Build a pipeline configuration from environment variables
    ///
    /// Reads `API_BASE_URL`, `USERS_FILE` and `OUTPUT_FILE`. Unlike
    /// [`Config::from_env`] this never fails: a batch run does not need the
    /// signing secret.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(path) = lookup("USERS_FILE") {
            config.users_file = PathBuf::from(path);
        }
        if let Some(path) = lookup("OUTPUT_FILE") {
            config.output_file = PathBuf::from(path);
        }
        config
    }
}

fn default_users_file() -> PathBuf {
    PathBuf::from("users.json")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("processed_results.json")
}

fn default_api_base_url() -> String {
    "https://api.example.com".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

// The literal always parses, so the unwrap cannot fire
#[allow(clippy::unwrap_used)]
fn default_bind_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

fn default_database_url() -> String {
    "sqlite://userflow.db?mode=rwc".to_string()
}

fn default_token_ttl_secs() -> u64 {
    3600
}

fn default_true() -> bool {
    true
}
