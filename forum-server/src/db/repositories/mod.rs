mod user_repository;
mod subreddit_repository;
mod post_repository;
mod subscription_repository;
mod upvote_repository;
mod comment_repository;

pub use user_repository::UserRepository;
pub use subreddit_repository::SubredditRepository;
pub use post_repository::PostRepository;
pub use subscription_repository::SubscriptionRepository;
pub use upvote_repository::UpvoteRepository;
pub use comment_repository::CommentRepository;

/// Result of an insert that may collide with a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was written; carries its generated id
    Inserted(i64),
    /// The (user, target) pair already existed, nothing was written
    Duplicate,
}
