use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, state::AppState};

/// Build the application router over an injected state
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/", get(root))
        .route("/health", get(health_check))
        // Subreddit routes
        .route(
            "/subreddits/:id/posts",
            get(api::subreddits::get_posts).post(api::subreddits::create_post),
        )
        // Subscription routes
        .route("/subscriptions", post(api::subscriptions::subscribe))
        .route(
            "/users/:id/subscriptions",
            get(api::subscriptions::get_user_subscriptions),
        )
        // Profile routes
        .route("/users/:id/profile", get(api::profile::get_profile))
        // Post routes
        .route("/posts/:id/upvote", post(api::posts::upvote_post))
        .route(
            "/posts/:id/comments",
            get(api::posts::get_comments).post(api::posts::add_comment),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> &'static str {
    "OK"
}
