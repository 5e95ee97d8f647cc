//! Shared application state.

use std::sync::{Arc, Mutex};

use notemark_core::db::open_db;
use rusqlite::Connection;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    /// Migrated SQLite connection. Write serialization beyond this lock is
    /// delegated to SQLite itself.
    pub conn: Mutex<Connection>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let conn = open_db(&config.db_path).expect("Database must open");

        Arc::new(Self {
            config,
            conn: Mutex::new(conn),
        })
    }
}
