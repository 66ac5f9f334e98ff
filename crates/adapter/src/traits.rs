use async_trait::async_trait;
use domain::{
    Account, BanStatus, Comment, GatewayError, LookupError, MutationError, TitleMetadata,
    Watchlist,
};

#[async_trait]
pub trait BackendGateway: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<Account>, GatewayError>;

    async fn list_watchlists(&self) -> Result<Vec<Watchlist>, GatewayError>;

    async fn list_comments(&self) -> Result<Vec<Comment>, GatewayError>;

    async fn get_title_metadata(&self, title_id: &str) -> Result<TitleMetadata, LookupError>;

    async fn set_ban_status(&self, user_id: &str, status: BanStatus) -> Result<(), MutationError>;

    async fn delete_comment(&self, watchlist_id: &str, comment_id: &str)
        -> Result<(), MutationError>;
}
