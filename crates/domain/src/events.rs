use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleEvent {
    SnapshotReplaced {
        accounts: usize,
        watchlists: usize,
        comments: usize,
    },
    AccountBanChanged {
        user_id: String,
        is_banned: bool,
    },
    CommentRemoved {
        comment_id: String,
    },
}

impl ConsoleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleEvent::SnapshotReplaced { .. } => "snapshot_replaced",
            ConsoleEvent::AccountBanChanged { .. } => "account_ban_changed",
            ConsoleEvent::CommentRemoved { .. } => "comment_removed",
        }
    }
}
