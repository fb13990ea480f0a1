use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Type;
use std::path::Path;

use super::schema::{SCHEMA, SEED_DATA};

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// Every SQLite in-memory connection is a separate database, so an
    /// in-memory store is pooled over exactly one connection that is never
    /// recycled.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let trimmed_path = path_str.trim();

        let pool = if trimmed_path.eq_ignore_ascii_case(MEMORY_DB_PATH) {
            Pool::builder()
                .max_size(1)
                .max_lifetime(None)
                .idle_timeout(None)
                .build(SqliteConnectionManager::memory())
        } else {
            Pool::new(SqliteConnectionManager::file(trimmed_path))
        }
        .context("Failed to create database connection pool")?;

        Ok(Self { pool })
    }

    /// Create an in-memory database pool (useful for testing)
    pub fn in_memory() -> Result<Self> {
        Self::new(MEMORY_DB_PATH)
    }

    /// Initialize the database schema
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Seed the database with the fixed startup rows
    pub fn seed(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SEED_DATA)
            .context("Failed to seed database")?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }
}

/// Current time in the same text format the schema defaults produce
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Read a stored `creation_time` column
pub fn timestamp_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    raw.parse::<DateTime<Utc>>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_creation() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        // Verify tables exist
        let conn = db.connection().expect("Failed to get connection");
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .expect("Failed to prepare statement");

        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .expect("Failed to query tables")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect tables");

        for table in ["users", "subreddits", "posts", "subscriptions", "upvotes", "comments"] {
            assert!(tables.contains(&table.to_string()), "missing table {table}");
        }
    }

    #[test]
    fn test_seed_data() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed().expect("Failed to seed database");

        let conn = db.connection().expect("Failed to get connection");
        let count = |table: &str| -> i64 {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
                .expect("Failed to count rows")
        };

        assert_eq!(count("subreddits"), 2);
        assert_eq!(count("users"), 2);
        assert_eq!(count("posts"), 3);
        assert_eq!(count("subscriptions"), 0);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed().expect("Failed to seed database");
        db.initialize().expect("Failed to re-initialize schema");
        db.seed().expect("Failed to re-seed database");

        let conn = db.connection().expect("Failed to get connection");
        let posts: i64 = conn
            .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
            .expect("Failed to count posts");
        assert_eq!(posts, 3);
    }

    #[test]
    fn test_memory_database_detection() {
        let memory_paths = [":memory:", " :memory: ", ":MEMORY:", " :Memory: "];

        for path in &memory_paths {
            let db = Database::new(path).expect("Failed to create memory database");
            db.initialize().expect("Failed to initialize schema");
            assert_eq!(db.pool.max_size(), 1);

            // Separate instances must not share state
            db.seed().expect("Failed to seed database");
            let db2 = Database::new(path).expect("Failed to create second memory database");
            db2.initialize()
                .expect("Failed to initialize second schema");
            let conn = db2.connection().expect("Failed to get connection");
            let posts: i64 = conn
                .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
                .expect("Failed to count posts");
            assert_eq!(posts, 0);
        }

        let temp_path = std::env::temp_dir().join(format!("forum_test_{}.db", std::process::id()));
        let db = Database::new(&temp_path).expect("Failed to create file database");
        db.initialize().expect("Failed to initialize file schema");
        drop(db);

        let _ = std::fs::remove_file(temp_path);
    }

    #[test]
    fn test_default_timestamp_matches_application_format() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed().expect("Failed to seed database");

        let conn = db.connection().expect("Failed to get connection");
        let stored: DateTime<Utc> = conn
            .query_row("SELECT creation_time FROM posts WHERE id = 1", [], |row| {
                timestamp_column(row, 0)
            })
            .expect("Failed to read seeded timestamp");

        let raw: String = conn
            .query_row("SELECT creation_time FROM posts WHERE id = 1", [], |row| row.get(0))
            .expect("Failed to read raw timestamp");
        assert_eq!(raw.len(), now_timestamp().len());
        assert!(raw.ends_with('Z'));
        assert!(stored <= Utc::now());
    }
}
