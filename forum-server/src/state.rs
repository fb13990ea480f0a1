use crate::db::Database;

/// Shared handler state; the store is injected here rather than held globally
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
