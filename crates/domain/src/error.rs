use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("id {0:?} cannot be used as a path segment")]
    InvalidId(String),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response payload: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Accounts,
    Watchlists,
    Comments,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Accounts => "accounts",
            Collection::Watchlists => "watchlists",
            Collection::Comments => "comments",
        };
        f.write_str(name)
    }
}

// 任一列表失败，整体不生效
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("initial load failed for {}", describe(.failures))]
pub struct FetchError {
    pub failures: Vec<(Collection, GatewayError)>,
}

impl FetchError {
    pub fn failed(&self, collection: Collection) -> bool {
        self.failures.iter().any(|(c, _)| *c == collection)
    }
}

fn describe(failures: &[(Collection, GatewayError)]) -> String {
    failures
        .iter()
        .map(|(c, e)| format!("{} ({})", c, e))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("title lookup failed for {title_id}: {source}")]
pub struct LookupError {
    pub title_id: String,
    pub source: GatewayError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("failed to set ban status for {user_id}: {source}")]
    BanStatus {
        user_id: String,
        source: GatewayError,
    },
    #[error("failed to delete comment {comment_id}: {source}")]
    DeleteComment {
        comment_id: String,
        source: GatewayError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    #[error(transparent)]
    Mutation(#[from] MutationError),
    #[error("account {0} is not loaded")]
    UnknownAccount(String),
    #[error("account {0} is an administrator and cannot be banned")]
    ProtectedAccount(String),
}
