use async_trait::async_trait;
use domain::{
    Account, BanStatus, Comment, GatewayError, LookupError, MutationError, TitleMetadata,
    Watchlist,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::traits::BackendGateway;

pub struct FakeGateway {
    accounts: Result<Vec<Account>, GatewayError>,
    watchlists: Result<Vec<Watchlist>, GatewayError>,
    comments: Result<Vec<Comment>, GatewayError>,
    posters: HashMap<String, Result<String, GatewayError>>,
    ban: Result<(), GatewayError>,
    delete: Result<(), GatewayError>,
    listing_delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            accounts: Ok(vec![]),
            watchlists: Ok(vec![]),
            comments: Ok(vec![]),
            posters: HashMap::new(),
            ban: Ok(()),
            delete: Ok(()),
            listing_delay: None,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = Ok(accounts);
        self
    }

    pub fn with_watchlists(mut self, watchlists: Vec<Watchlist>) -> Self {
        self.watchlists = Ok(watchlists);
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = Ok(comments);
        self
    }

    pub fn failing_accounts(mut self, err: GatewayError) -> Self {
        self.accounts = Err(err);
        self
    }

    pub fn failing_comments(mut self, err: GatewayError) -> Self {
        self.comments = Err(err);
        self
    }

    pub fn with_poster(mut self, title_id: &str, poster: &str) -> Self {
        self.posters.insert(title_id.into(), Ok(poster.into()));
        self
    }

    pub fn failing_lookup(mut self, title_id: &str, err: GatewayError) -> Self {
        self.posters.insert(title_id.into(), Err(err));
        self
    }

    pub fn failing_ban(mut self, err: GatewayError) -> Self {
        self.ban = Err(err);
        self
    }

    pub fn failing_delete(mut self, err: GatewayError) -> Self {
        self.delete = Err(err);
        self
    }

    pub fn with_listing_delay(mut self, delay: Duration) -> Self {
        self.listing_delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BackendGateway for FakeGateway {
    async fn list_accounts(&self) -> Result<Vec<Account>, GatewayError> {
        if let Some(delay) = self.listing_delay {
            tokio::time::sleep(delay).await;
        }
        self.accounts.clone()
    }

    async fn list_watchlists(&self) -> Result<Vec<Watchlist>, GatewayError> {
        self.watchlists.clone()
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, GatewayError> {
        self.comments.clone()
    }

    async fn get_title_metadata(&self, title_id: &str) -> Result<TitleMetadata, LookupError> {
        self.record(format!("lookup:{}", title_id));
        let result = self
            .posters
            .get(title_id)
            .cloned()
            .unwrap_or_else(|| {
                Err(GatewayError::Status {
                    status: 404,
                    body: "unknown title".into(),
                })
            });
        result
            .map(|poster| TitleMetadata { poster })
            .map_err(|source| LookupError {
                title_id: title_id.into(),
                source,
            })
    }

    async fn set_ban_status(&self, user_id: &str, status: BanStatus) -> Result<(), MutationError> {
        self.record(format!("ban:{}:{}", user_id, status));
        self.ban.clone().map_err(|source| MutationError::BanStatus {
            user_id: user_id.into(),
            source,
        })
    }

    async fn delete_comment(
        &self,
        watchlist_id: &str,
        comment_id: &str,
    ) -> Result<(), MutationError> {
        self.record(format!("delete:{}:{}", watchlist_id, comment_id));
        self.delete
            .clone()
            .map_err(|source| MutationError::DeleteComment {
                comment_id: comment_id.into(),
                source,
            })
    }
}

pub fn account(id: &str, username: &str, is_banned: bool) -> Account {
    Account {
        user_id: id.into(),
        username: username.into(),
        email: format!("{}@example.com", username.to_lowercase()),
        biography: String::new(),
        preferred_genres: vec![],
        friends: vec![],
        signed_url: String::new(),
        is_banned,
        is_admin: false,
    }
}

pub fn watchlist(id: &str, name: &str, titles: &[&str]) -> Watchlist {
    Watchlist {
        list_id: id.into(),
        list_name: name.into(),
        user_id: "u1".into(),
        username: "Ann".into(),
        titles: titles.iter().map(|t| t.to_string()).collect(),
        comments: vec![],
        likes: vec![],
        collaborators: vec![],
        is_public: true,
        poster_url: None,
    }
}

pub fn comment(id: &str, text: &str) -> Comment {
    Comment {
        comment_id: id.into(),
        comment: text.into(),
        date_posted: "2024-05-04T18:00:00Z".into(),
        user_id: "u1".into(),
        username: "Ann".into(),
        watchlist_id: "w1".into(),
        watchlist_name: "Weekend".into(),
    }
}
