use domain::{Account, Collection, Comment, FetchError, GatewayError, Snapshot, Watchlist};
use tracing::error;

use crate::traits::BackendGateway;

#[derive(Debug)]
pub struct ListingOutcome {
    pub accounts: Result<Vec<Account>, GatewayError>,
    pub watchlists: Result<Vec<Watchlist>, GatewayError>,
    pub comments: Result<Vec<Comment>, GatewayError>,
}

impl ListingOutcome {
    // 任一失败即整体丢弃
    pub fn into_snapshot(self) -> Result<Snapshot, FetchError> {
        match (self.accounts, self.watchlists, self.comments) {
            (Ok(accounts), Ok(watchlists), Ok(comments)) => Ok(Snapshot {
                accounts,
                watchlists,
                comments,
            }),
            (accounts, watchlists, comments) => {
                let failures = [
                    (Collection::Accounts, accounts.err()),
                    (Collection::Watchlists, watchlists.err()),
                    (Collection::Comments, comments.err()),
                ]
                .into_iter()
                .filter_map(|(c, e)| e.map(|e| (c, e)))
                .collect();
                Err(FetchError { failures })
            }
        }
    }
}

pub async fn fetch_listings(gateway: &dyn BackendGateway) -> ListingOutcome {
    let (accounts, watchlists, comments) = tokio::join!(
        gateway.list_accounts(),
        gateway.list_watchlists(),
        gateway.list_comments(),
    );

    for (collection, err) in [
        (Collection::Accounts, accounts.as_ref().err()),
        (Collection::Watchlists, watchlists.as_ref().err()),
        (Collection::Comments, comments.as_ref().err()),
    ] {
        if let Some(e) = err {
            error!("Failed to list {}: {}", collection, e);
        }
    }

    ListingOutcome {
        accounts,
        watchlists,
        comments,
    }
}
