use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{path_id, ApiError, ApiJson, ApiResult},
    db::repositories::{PostRepository, SubredditRepository},
    state::AppState,
    validation::{required_id, required_text},
};
use forum_types::{CreatePostRequest, Post};

/// GET /subreddits/:id/posts - Subreddit timeline, newest first
///
/// An unknown subreddit yields an empty list, not an error.
pub async fn get_posts(
    State(state): State<AppState>,
    Path(subreddit_id): Path<String>,
) -> ApiResult<Json<Vec<Post>>> {
    let subreddit_id = path_id(&subreddit_id, "subreddit")?;

    let post_repo = PostRepository::new(state.db.pool.clone());
    let posts = post_repo.get_by_subreddit(subreddit_id)?;

    Ok(Json(posts))
}

/// POST /subreddits/:id/posts - Create a post in a subreddit
pub async fn create_post(
    State(state): State<AppState>,
    Path(subreddit_id): Path<String>,
    ApiJson(payload): ApiJson<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let subreddit_id = path_id(&subreddit_id, "subreddit")?;

    let (Some(title), Some(content), Some(user_id)) = (
        required_text(payload.title),
        required_text(payload.content),
        required_id(payload.user_id),
    ) else {
        return Err(ApiError::BadRequest(
            "Title, content, and user_id are required.".to_string(),
        ));
    };

    let pool = state.db.pool.clone();
    let subreddit_repo = SubredditRepository::new(pool.clone());
    let post_repo = PostRepository::new(pool);

    subreddit_repo.get_by_id(subreddit_id)?.ok_or_else(|| {
        ApiError::NotFound(format!("Subreddit with id {} does not exist.", subreddit_id))
    })?;

    let post = post_repo.create(subreddit_id, user_id, &title, &content)?;
    tracing::info!(post_id = post.id, subreddit_id, user_id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}
