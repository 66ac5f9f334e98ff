use domain::{Account, Comment, Snapshot, Watchlist};
use std::collections::HashSet;
use tracing::warn;

mod repo;

#[derive(Debug, Default)]
pub struct ConsoleStore {
    pub(crate) accounts: Vec<Account>,
    pub(crate) watchlists: Vec<Watchlist>,
    pub(crate) comments: Vec<Comment>,
    loaded: bool,
}

impl ConsoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    // 重复 id 只保留第一个
    pub fn replace_all(
        &mut self,
        accounts: Vec<Account>,
        watchlists: Vec<Watchlist>,
        comments: Vec<Comment>,
    ) {
        self.accounts = dedup_by_id(accounts, |a| &a.user_id, "account");
        self.watchlists = dedup_by_id(watchlists, |w| &w.list_id, "watchlist");
        self.comments = dedup_by_id(comments, |c| &c.comment_id, "comment");
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            accounts: self.accounts.clone(),
            watchlists: self.watchlists.clone(),
            comments: self.comments.clone(),
        }
    }
}

fn dedup_by_id<T, F>(items: Vec<T>, id: F, kind: &str) -> Vec<T>
where
    F: Fn(&T) -> &String,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            let key = id(item).clone();
            if seen.insert(key) {
                true
            } else {
                warn!("Dropping duplicate {} id in snapshot: {}", kind, id(item));
                false
            }
        })
        .collect()
}
