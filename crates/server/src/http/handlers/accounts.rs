use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::Account;
use tracing::info;

use super::{moderation_error, ApiError, SearchQuery};
use crate::state::AppState;

pub async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Account>> {
    Json(state.console.accounts(&query.q).await)
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    state
        .console
        .account(&user_id)
        .await
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Unknown account: {}", user_id)))
}

pub async fn toggle_ban(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let cmd = state
        .console
        .toggle_ban_command(&user_id)
        .await
        .map_err(moderation_error)?;
    // 封禁切换不需要二次确认
    state
        .console
        .execute(cmd, &true)
        .await
        .map_err(moderation_error)?;
    info!("Operator toggled ban for {}", user_id);

    get_account(State(state), Path(user_id)).await
}
