use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{path_id, ApiResult},
    db::repositories::{SubscriptionRepository, UpvoteRepository},
    state::AppState,
};
use forum_types::UserProfile;

/// GET /users/:id/profile - Subscriptions plus upvotes received
///
/// Empty subscriptions and zero upvotes are a normal result here.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    let user_id = path_id(&user_id, "user")?;

    let pool = state.db.pool.clone();
    let subscription_repo = SubscriptionRepository::new(pool.clone());
    let upvote_repo = UpvoteRepository::new(pool);

    let subscribed_subreddits = subscription_repo.get_subreddits_for_user(user_id)?;
    let total_upvotes = upvote_repo.count_received_by_author(user_id)?;

    Ok(Json(UserProfile {
        subscribed_subreddits,
        total_upvotes,
    }))
}
