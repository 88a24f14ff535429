//! Application state for the API server

use crate::{Config, Database};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone). The database
/// pool travels here explicitly instead of living at module scope.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the user store
    pub db: Arc<Database>,

    /// Configuration (signing secret, token lifetime)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(db: Arc<Database>, config: Arc<Config>) -> Self {
        Self { db, config }
    }
}
