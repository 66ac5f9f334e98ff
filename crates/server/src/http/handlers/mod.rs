pub mod accounts;
pub mod comments;
pub mod overview;
pub mod sse;
pub mod watchlists;

use axum::http::StatusCode;
use domain::{GatewayError, ModerationError, MutationError};
use serde::Deserialize;

pub type ApiError = (StatusCode, String);

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub fn moderation_error(e: ModerationError) -> ApiError {
    let status = match &e {
        ModerationError::UnknownAccount(_) => StatusCode::NOT_FOUND,
        ModerationError::ProtectedAccount(_) => StatusCode::FORBIDDEN,
        ModerationError::Mutation(
            MutationError::BanStatus {
                source: GatewayError::InvalidId(_),
                ..
            }
            | MutationError::DeleteComment {
                source: GatewayError::InvalidId(_),
                ..
            },
        ) => StatusCode::BAD_REQUEST,
        ModerationError::Mutation(_) => StatusCode::BAD_GATEWAY,
    };
    (status, e.to_string())
}
