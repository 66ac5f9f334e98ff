use axum::{
    extract::{Query, State},
    Json,
};
use domain::Watchlist;

use super::SearchQuery;
use crate::state::AppState;

pub async fn list_watchlists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Watchlist>> {
    Json(state.console.watchlists(&query.q).await)
}
