use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BanStatus {
    Banned,
    Unbanned,
}

impl BanStatus {
    pub fn toggled_from(is_currently_banned: bool) -> Self {
        if is_currently_banned {
            BanStatus::Unbanned
        } else {
            BanStatus::Banned
        }
    }

    pub fn is_banned(self) -> bool {
        matches!(self, BanStatus::Banned)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BanStatus::Banned => "banned",
            BanStatus::Unbanned => "unbanned",
        }
    }
}

impl fmt::Display for BanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationCommand {
    ToggleBan {
        user_id: String,
        is_currently_banned: bool,
    },
    DeleteComment {
        watchlist_id: String,
        comment_id: String,
    },
}
