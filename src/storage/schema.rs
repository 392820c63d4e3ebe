//! Database schema and connection management

use crate::core::config::Settings;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Database connection manager for football player records
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open the database at the configured default location
    pub fn new() -> Result<Self> {
        let settings = Settings::from_env()?;
        Self::open(&settings.database_path)
    }

    /// Open (creating if needed) a database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "Opening player database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory database, mostly useful for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Length bounds mirror PlayerName and ImageRef; SQLite length() counts characters
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS football_player (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 200),
                img TEXT NOT NULL CHECK (length(img) BETWEEN 1 AND 100),
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_football_player_name
             ON football_player(name COLLATE NOCASE)",
            [],
        )?;

        Ok(())
    }
}
