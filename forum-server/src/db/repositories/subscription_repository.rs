use anyhow::{Context, Result};
use rusqlite::{ffi, ErrorCode};

use forum_types::Subreddit;

use crate::db::DbPool;

use super::InsertOutcome;

pub struct SubscriptionRepository {
    pool: DbPool,
}

/// True when the failure is the (user_id, subreddit_id) UNIQUE constraint
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl SubscriptionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Subscribe a user to a subreddit
    ///
    /// A second subscription for the same pair is rejected by the storage
    /// constraint and reported as `InsertOutcome::Duplicate`.
    pub fn subscribe(&self, user_id: i64, subreddit_id: i64) -> Result<InsertOutcome> {
        let conn = self.pool.get()?;

        match conn.execute(
            "INSERT INTO subscriptions (user_id, subreddit_id) VALUES (?, ?)",
            (user_id, subreddit_id),
        ) {
            Ok(_) => Ok(InsertOutcome::Inserted(conn.last_insert_rowid())),
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(e).context("Failed to create subscription"),
        }
    }

    /// Get the subreddits a user is subscribed to
    pub fn get_subreddits_for_user(&self, user_id: i64) -> Result<Vec<Subreddit>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT subreddits.id, subreddits.name
             FROM subscriptions
             JOIN subreddits ON subscriptions.subreddit_id = subreddits.id
             WHERE subscriptions.user_id = ?
             ORDER BY subscriptions.id"
        )?;

        let subreddits = stmt
            .query_map([user_id], |row| {
                Ok(Subreddit {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to load subscriptions")?;

        Ok(subreddits)
    }
}
