use adapter::ModerationOutcome;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::{Comment, ModerationCommand};
use serde::Deserialize;

use super::{moderation_error, ApiError, SearchQuery};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Comment>> {
    Json(state.console.comments(&query.q).await)
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((watchlist_id, comment_id)): Path<(String, String)>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<&'static str>, ApiError> {
    let cmd = ModerationCommand::DeleteComment {
        watchlist_id,
        comment_id,
    };
    let outcome = state
        .console
        .execute(cmd, &params.confirm)
        .await
        .map_err(moderation_error)?;

    match outcome {
        ModerationOutcome::Applied => Ok(Json("Deleted")),
        ModerationOutcome::Declined => Err((
            StatusCode::CONFLICT,
            "Deletion requires confirm=true".into(),
        )),
    }
}
