//! Route handlers for the auth API
//!
//! Handlers are organized by domain:
//! - [`login`] — Credential check and token issuance
//! - [`system`] — Health and OpenAPI

mod login;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use login::*;
pub use system::*;
