//! Shared application state handed to every Actix handler.

use crate::registry::DatasetRegistry;
use crate::store::Database;
use std::sync::Arc;

/// Cloned into each worker through `web::Data`. Cheap to clone: the registry
/// only holds an `Arc` to the database.
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: DatasetRegistry,
    /// Largest CSV file accepted by the upload endpoint, in bytes.
    pub upload_limit: usize,
}

impl AppState {
    pub fn new(registry: DatasetRegistry, upload_limit: usize) -> Self {
        Self {
            registry,
            upload_limit,
        }
    }

    pub fn db(&self) -> &Arc<Database> {
        self.registry.db()
    }
}
