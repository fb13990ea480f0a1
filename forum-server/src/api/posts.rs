use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{path_id, ApiError, ApiJson, ApiResult},
    db::{
        repositories::{CommentRepository, InsertOutcome, PostRepository, UpvoteRepository},
        DbPool,
    },
    state::AppState,
    validation::{required_id, required_text},
};
use forum_types::{Comment, CommentWithAuthor, CreateCommentRequest, MessageResponse, UpvoteRequest};

/// Verify a post exists before writing anything that references it
fn ensure_post_exists(pool: &DbPool, post_id: i64) -> ApiResult<()> {
    PostRepository::new(pool.clone())
        .get_by_id(post_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Post with id {} does not exist.", post_id)))?;
    Ok(())
}

/// POST /posts/:id/upvote - Upvote a post once per user
pub async fn upvote_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    ApiJson(payload): ApiJson<UpvoteRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let post_id = path_id(&post_id, "post")?;

    let user_id = required_id(payload.user_id)
        .ok_or_else(|| ApiError::BadRequest("User ID is required.".to_string()))?;

    let pool = state.db.pool.clone();
    ensure_post_exists(&pool, post_id)?;

    let upvote_repo = UpvoteRepository::new(pool);
    match upvote_repo.upvote(user_id, post_id)? {
        InsertOutcome::Inserted(_) => {
            tracing::debug!(post_id, user_id, "Upvote recorded");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Upvote added successfully.")),
            ))
        }
        InsertOutcome::Duplicate => Err(ApiError::Conflict(
            "User has already upvoted this post.".to_string(),
        )),
    }
}

/// POST /posts/:id/comments - Add a comment to a post
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let post_id = path_id(&post_id, "post")?;

    let (Some(user_id), Some(content)) =
        (required_id(payload.user_id), required_text(payload.content))
    else {
        return Err(ApiError::BadRequest(
            "User ID and content are required.".to_string(),
        ));
    };

    let pool = state.db.pool.clone();
    ensure_post_exists(&pool, post_id)?;

    let comment_repo = CommentRepository::new(pool);
    let comment = comment_repo.create(post_id, user_id, &content)?;
    tracing::info!(comment_id = comment.id, post_id, user_id, "Comment added");

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /posts/:id/comments - Comments on a post, newest first
pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<CommentWithAuthor>>> {
    let post_id = path_id(&post_id, "post")?;

    let comment_repo = CommentRepository::new(state.db.pool.clone());
    let comments = comment_repo.get_by_post(post_id)?;

    Ok(Json(comments))
}
