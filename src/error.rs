//! Error types for userflow
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error types (utility input errors, database errors)
//! - HTTP status code mapping for API integration
//!
//! The error taxonomy is deliberately shallow: a malformed local file is
//! fatal to a pipeline run, a failed remote fetch is recovered by the
//! caller, and API failures surface as a single status code each. There is
//! no retry policy anywhere in the crate.

use thiserror::Error;

/// Result type alias for userflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for userflow
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "jwt_secret")
        key: Option<String>,
    },

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Invalid input to a utility function
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Username/password did not match any stored row
    ///
    /// Deliberately carries no detail: "wrong password" and "no such user"
    /// are indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token signing or validation failed
    #[error("token error: {0}")]
    Token(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to run migrations
    #[error("failed to run migrations: {0}")]
    MigrationFailed(String),

    /// Query failed
    #[error("query failed: {0}")]
    QueryFailed(String),
}

/// Invalid inputs to the pure utility functions
///
/// These are rejected immediately with no partial result.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A function that requires a non-negative argument received a negative one
    #[error("{function} is not defined for negative input {value}")]
    NegativeInput {
        /// Name of the rejecting function
        function: &'static str,
        /// The offending argument
        value: i64,
    },

    /// A reduction that needs at least one element received an empty slice
    #[error("{function} requires a non-empty sequence")]
    EmptySequence {
        /// Name of the rejecting function
        function: &'static str,
    },

    /// The result does not fit in the return type
    #[error("{function}({value}) overflows")]
    Overflow {
        /// Name of the overflowing function
        function: &'static str,
        /// The argument that caused the overflow
        value: i64,
    },

    /// Division by zero
    #[error("cannot divide by zero")]
    DivideByZero,

    /// Withdrawal larger than the account balance
    #[error("insufficient funds: requested {requested}, balance is {available}")]
    InsufficientFunds {
        /// Amount the caller tried to withdraw
        requested: f64,
        /// Current account balance
        available: f64,
    },
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the response body `error` field for this error
    fn error_label(&self) -> &'static str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::Config { .. } => 400,
            Error::Domain(_) => 422,

            // 401 Unauthorized - no matching credentials
            Error::InvalidCredentials => 401,

            // 500 Internal Server Error - Server-side issues
            Error::Database(_) => 500,
            Error::Sqlx(_) => 500,
            Error::Token(_) => 500,
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,

            // 502 Bad Gateway - External service errors
            Error::Network(_) => 502,
        }
    }

    fn error_label(&self) -> &'static str {
        match self {
            // Wire contract: these two labels are fixed
            Error::InvalidCredentials => "invalid",
            Error::Database(_) | Error::Sqlx(_) => "db error",

            Error::Config { .. } => "config error",
            Error::Domain(_) => "invalid input",
            Error::Token(_) => "token error",
            Error::Io(_) => "io error",
            Error::Network(_) => "network error",
            Error::Serialization(_) => "serialization error",
            Error::ApiServerError(_) => "server error",
        }
    }
}
