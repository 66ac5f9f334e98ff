use crate::ConsoleStore;
use domain::Watchlist;

impl ConsoleStore {
    pub fn watchlists(&self) -> &[Watchlist] {
        &self.watchlists
    }

    pub fn watchlist(&self, list_id: &str) -> Option<&Watchlist> {
        self.watchlists.iter().find(|w| w.list_id == list_id)
    }
}
