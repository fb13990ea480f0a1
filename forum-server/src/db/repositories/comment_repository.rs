use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use forum_types::{Comment, CommentWithAuthor};

use crate::db::connection::{now_timestamp, timestamp_column};
use crate::db::DbPool;

pub struct CommentRepository {
    pool: DbPool,
}

impl CommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Add a comment to a post, stamped with the current time
    pub fn create(&self, post_id: i64, user_id: i64, content: &str) -> Result<Comment> {
        let conn = self.pool.get()?;
        let creation_time = now_timestamp();

        conn.execute(
            "INSERT INTO comments (post_id, user_id, content, creation_time) VALUES (?, ?, ?, ?)",
            (post_id, user_id, content, &creation_time),
        ).context("Failed to create comment")?;

        Ok(Comment {
            id: conn.last_insert_rowid(),
            post_id,
            user_id,
            content: content.to_string(),
            creation_time: creation_time.parse::<DateTime<Utc>>()?,
        })
    }

    /// Get the comments on a post with their authors' usernames, newest first
    ///
    /// Comments whose author is not a known user are left out by the join.
    pub fn get_by_post(&self, post_id: i64) -> Result<Vec<CommentWithAuthor>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT comments.id, comments.content, comments.creation_time, users.username
             FROM comments
             JOIN users ON comments.user_id = users.id
             WHERE comments.post_id = ?
             ORDER BY comments.creation_time DESC, comments.id DESC"
        )?;

        let comments = stmt
            .query_map([post_id], |row| {
                Ok(CommentWithAuthor {
                    id: row.get(0)?,
                    content: row.get(1)?,
                    creation_time: timestamp_column(row, 2)?,
                    username: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to load comments")?;

        Ok(comments)
    }
}
