use axum::{extract::State, Json};
use domain::views::DashboardOverview;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct LoadStatus {
    pub loaded: bool,
    pub error: Option<String>,
}

pub async fn get_overview(State(state): State<AppState>) -> Json<DashboardOverview> {
    Json(state.console.overview().await)
}

pub async fn get_status(State(state): State<AppState>) -> Json<LoadStatus> {
    Json(LoadStatus {
        loaded: state.console.is_loaded().await,
        error: state.load_error.read().await.clone(),
    })
}
