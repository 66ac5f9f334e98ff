use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{Account, Comment, Snapshot, Watchlist};

const PREVIEW_ACCOUNTS: usize = 3;
const PREVIEW_WATCHLISTS: usize = 3;
const PREVIEW_COMMENTS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Users,
    Watchlists,
    Comments,
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Section::Dashboard),
            "users" => Ok(Section::Users),
            "watchlists" => Ok(Section::Watchlists),
            "comments" => Ok(Section::Comments),
            other => Err(format!("Unknown section: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleView {
    section: Section,
    query: String,
}

impl ConsoleView {
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // 切换分区时清空搜索词
    pub fn switch_to(&mut self, section: Section) {
        self.section = section;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub admin_avatar: String,
    pub total_accounts: usize,
    pub total_watchlists: usize,
    pub total_comments: usize,
    pub accounts: Vec<Account>,
    pub watchlists: Vec<Watchlist>,
    pub comments: Vec<Comment>,
}

impl DashboardOverview {
    pub fn from_snapshot(snapshot: &Snapshot, admin_avatar: impl Into<String>) -> Self {
        Self {
            admin_avatar: admin_avatar.into(),
            total_accounts: snapshot.accounts.len(),
            total_watchlists: snapshot.watchlists.len(),
            total_comments: snapshot.comments.len(),
            accounts: snapshot.accounts.iter().take(PREVIEW_ACCOUNTS).cloned().collect(),
            watchlists: snapshot
                .watchlists
                .iter()
                .take(PREVIEW_WATCHLISTS)
                .cloned()
                .collect(),
            comments: snapshot.comments.iter().take(PREVIEW_COMMENTS).cloned().collect(),
        }
    }
}
