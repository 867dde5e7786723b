use sea_orm::DatabaseConnection;

use crate::server::config::PageDefaults;

/// State cloned into every handler.
///
/// `DatabaseConnection` wraps a pool, so clones share connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Page size used when `size` is omitted, and the largest size accepted.
    pub page_defaults: PageDefaults,
}

impl AppState {
    pub fn new(db: DatabaseConnection, page_defaults: PageDefaults) -> Self {
        Self { db, page_defaults }
    }
}
