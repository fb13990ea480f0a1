/// SQL schema for the forum database.
/// Parent tables are declared before the tables that reference them.
/// Foreign keys are declarative only: the `foreign_keys` pragma is left off.
pub const SCHEMA: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL
);

-- Subreddits table
CREATE TABLE IF NOT EXISTS subreddits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Posts table
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT,
    subreddit_id INTEGER,
    user_id INTEGER,
    creation_time TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    FOREIGN KEY (subreddit_id) REFERENCES subreddits(id),
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_posts_subreddit_id ON posts(subreddit_id);
CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id);

-- Subscriptions table (one row per user per subreddit)
CREATE TABLE IF NOT EXISTS subscriptions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    subreddit_id INTEGER NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id),
    FOREIGN KEY (subreddit_id) REFERENCES subreddits(id),
    UNIQUE(user_id, subreddit_id)
);

CREATE INDEX IF NOT EXISTS idx_subscriptions_user_id ON subscriptions(user_id);

-- Upvotes table (one row per user per post)
CREATE TABLE IF NOT EXISTS upvotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    post_id INTEGER NOT NULL,
    UNIQUE(user_id, post_id),
    FOREIGN KEY (user_id) REFERENCES users(id),
    FOREIGN KEY (post_id) REFERENCES posts(id)
);

CREATE INDEX IF NOT EXISTS idx_upvotes_post_id ON upvotes(post_id);

-- Comments table
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    content TEXT NOT NULL,
    creation_time TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    FOREIGN KEY (post_id) REFERENCES posts(id),
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id);
"#;

/// Seed data loaded once at startup:
/// - 2 subreddits (javascript, webdev)
/// - 2 users (sailesh, john)
/// - 3 posts spread across both subreddits
///
/// Explicit ids with `INSERT OR IGNORE` keep this idempotent against a file database.
pub const SEED_DATA: &str = r#"
INSERT OR IGNORE INTO subreddits (id, name) VALUES
    (1, 'javascript'),
    (2, 'webdev');

INSERT OR IGNORE INTO users (id, username) VALUES
    (1, 'sailesh'),
    (2, 'john');

INSERT OR IGNORE INTO posts (id, title, content, subreddit_id, user_id) VALUES
    (1, 'Welcome to JavaScript!', 'This is a JavaScript subreddit.', 1, 1),
    (2, 'Web development tips', 'Learn web development here!', 2, 2),
    (3, 'JavaScript tips', 'Share your JS tips here!', 1, 2);
"#;
