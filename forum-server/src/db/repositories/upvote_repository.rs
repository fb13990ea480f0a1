use anyhow::{Context, Result};

use crate::db::DbPool;

use super::InsertOutcome;

pub struct UpvoteRepository {
    pool: DbPool,
}

impl UpvoteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Record a user's upvote on a post
    ///
    /// The conflict is swallowed by the statement itself; zero affected rows
    /// means the pair already existed.
    pub fn upvote(&self, user_id: i64, post_id: i64) -> Result<InsertOutcome> {
        let conn = self.pool.get()?;

        let changes = conn.execute(
            "INSERT INTO upvotes (user_id, post_id)
             VALUES (?, ?)
             ON CONFLICT(user_id, post_id) DO NOTHING",
            (user_id, post_id),
        ).context("Failed to insert upvote")?;

        if changes == 0 {
            Ok(InsertOutcome::Duplicate)
        } else {
            Ok(InsertOutcome::Inserted(conn.last_insert_rowid()))
        }
    }

    /// Count upvotes received across every post authored by a user
    pub fn count_received_by_author(&self, user_id: i64) -> Result<i64> {
        let conn = self.pool.get()?;
        let total: i64 = conn.query_row(
            "SELECT COUNT(upvotes.id)
             FROM upvotes
             JOIN posts ON upvotes.post_id = posts.id
             WHERE posts.user_id = ?",
            [user_id],
            |row| row.get(0),
        )?;
        Ok(total)
    }
}
