use anyhow::Result;
use rusqlite::OptionalExtension;

use forum_types::Subreddit;

use crate::db::DbPool;

pub struct SubredditRepository {
    pool: DbPool,
}

impl SubredditRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get subreddit by ID
    pub fn get_by_id(&self, subreddit_id: i64) -> Result<Option<Subreddit>> {
        let conn = self.pool.get()?;
        let subreddit = conn
            .query_row(
                "SELECT id, name FROM subreddits WHERE id = ?",
                [subreddit_id],
                |row| {
                    Ok(Subreddit {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(subreddit)
    }
}
