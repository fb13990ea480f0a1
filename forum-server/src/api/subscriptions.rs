use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{path_id, ApiError, ApiJson, ApiResult},
    db::repositories::{InsertOutcome, SubredditRepository, SubscriptionRepository, UserRepository},
    state::AppState,
    validation::required_id,
};
use forum_types::{MessageResponse, SubscribeRequest, Subreddit};

/// POST /subscriptions - Subscribe a user to a subreddit
pub async fn subscribe(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SubscribeRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let (Some(user_id), Some(subreddit_id)) =
        (required_id(payload.user_id), required_id(payload.subreddit_id))
    else {
        return Err(ApiError::BadRequest(
            "user_id and subreddit_id are required.".to_string(),
        ));
    };

    let pool = state.db.pool.clone();
    let user_repo = UserRepository::new(pool.clone());
    let subreddit_repo = SubredditRepository::new(pool.clone());
    let subscription_repo = SubscriptionRepository::new(pool);

    // User first, then subreddit
    user_repo
        .get_by_id(user_id)?
        .ok_or_else(|| ApiError::NotFound(format!("User with id {} does not exist.", user_id)))?;
    subreddit_repo.get_by_id(subreddit_id)?.ok_or_else(|| {
        ApiError::NotFound(format!("Subreddit with id {} does not exist.", subreddit_id))
    })?;

    match subscription_repo.subscribe(user_id, subreddit_id)? {
        InsertOutcome::Inserted(id) => {
            tracing::info!(subscription_id = id, user_id, subreddit_id, "Subscription created");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Subscribed successfully.")),
            ))
        }
        InsertOutcome::Duplicate => Err(ApiError::Conflict(
            "User is already subscribed to this subreddit.".to_string(),
        )),
    }
}

/// GET /users/:id/subscriptions - Subreddits a user is subscribed to
///
/// Unlike the timeline and comment listings, an empty result is a 404.
pub async fn get_user_subscriptions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Subreddit>>> {
    let user_id = path_id(&user_id, "user")?;

    let subscription_repo = SubscriptionRepository::new(state.db.pool.clone());
    let subreddits = subscription_repo.get_subreddits_for_user(user_id)?;

    if subreddits.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No subscriptions found for user with id {}.",
            user_id
        )));
    }

    Ok(Json(subreddits))
}
