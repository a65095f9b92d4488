use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::db::tour_locks::TourLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Per-tour serialization of round writes
    pub tour_locks: Arc<TourLocks>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            tour_locks: Arc::new(TourLocks::new()),
        }
    }

    /// Create a new AppState without a database connection
    pub fn without_db() -> Self {
        Self {
            db: None,
            tour_locks: Arc::new(TourLocks::new()),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
