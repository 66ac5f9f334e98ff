use super::auth::require_admin;
use super::handlers::{accounts, comments, overview, sse, watchlists};
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

const METHODS: [Method; 3] = [Method::GET, Method::POST, Method::DELETE];

pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    let cors = if allowed_origins == "*" {
        CorsLayer::new()
            .allow_methods(METHODS)
            .allow_origin(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<HeaderValue>().ok())
            .collect();

        if origins.is_empty() {
            tracing::warn!("CORS config is invalid or empty, falling back to allow ANY.");
            CorsLayer::new()
                .allow_methods(METHODS)
                .allow_origin(Any)
                .allow_headers(Any)
        } else {
            tracing::info!("CORS enabled for origins: {:?}", origins);
            CorsLayer::new()
                .allow_methods(METHODS)
                .allow_origin(origins)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route("/api/status", get(overview::get_status))
        .route("/api/overview", get(overview::get_overview))
        .route("/api/accounts", get(accounts::list_accounts))
        .route("/api/accounts/:user_id", get(accounts::get_account))
        .route("/api/accounts/:user_id/ban-toggle", post(accounts::toggle_ban))
        .route("/api/watchlists", get(watchlists::list_watchlists))
        .route(
            "/api/watchlists/:watchlist_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        .route("/api/comments", get(comments::list_comments))
        .route("/api/events", get(sse::sse_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
