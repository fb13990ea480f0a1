use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;

use forum_types::Post;

use crate::db::connection::{now_timestamp, timestamp_column};
use crate::db::DbPool;

pub struct PostRepository {
    pool: DbPool,
}

fn map_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        subreddit_id: row.get(3)?,
        user_id: row.get(4)?,
        creation_time: timestamp_column(row, 5)?,
    })
}

impl PostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new post stamped with the current time
    ///
    /// The author id is stored as given; it is not checked against `users`.
    pub fn create(&self, subreddit_id: i64, user_id: i64, title: &str, content: &str) -> Result<Post> {
        let conn = self.pool.get()?;
        let creation_time = now_timestamp();

        conn.execute(
            "INSERT INTO posts (title, content, subreddit_id, user_id, creation_time)
             VALUES (?, ?, ?, ?, ?)",
            (title, content, subreddit_id, user_id, &creation_time),
        ).context("Failed to create post")?;

        Ok(Post {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            content: Some(content.to_string()),
            subreddit_id,
            user_id,
            creation_time: creation_time.parse::<DateTime<Utc>>()?,
        })
    }

    /// Get every post in a subreddit, newest first
    pub fn get_by_subreddit(&self, subreddit_id: i64) -> Result<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, subreddit_id, user_id, creation_time
             FROM posts
             WHERE subreddit_id = ?
             ORDER BY creation_time DESC, id DESC"
        )?;

        let posts = stmt
            .query_map([subreddit_id], map_post)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to load subreddit posts")?;

        Ok(posts)
    }

    /// Get a single post by ID
    pub fn get_by_id(&self, post_id: i64) -> Result<Option<Post>> {
        let conn = self.pool.get()?;
        let post = conn
            .query_row(
                "SELECT id, title, content, subreddit_id, user_id, creation_time
                 FROM posts
                 WHERE id = ?",
                [post_id],
                map_post,
            )
            .optional()?;

        Ok(post)
    }
}
