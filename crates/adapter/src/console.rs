use domain::filter::search;
use domain::views::DashboardOverview;
use domain::{
    Account, AdminSession, Comment, ConsoleEvent, FetchError, Snapshot, Watchlist,
    DEFAULT_PROFILE_IMAGE,
};
use std::sync::Arc;
use storage::ConsoleStore;
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{info, warn};

use crate::enrich::{enrich_watchlists, DEFAULT_ENRICHMENT_CONCURRENCY};
use crate::fetch::fetch_listings;
use crate::traits::BackendGateway;

const EVENT_CAPACITY: usize = 100;

// store 只在后端调用完成后、持有写锁时修改
pub struct Console {
    pub(crate) gateway: Arc<dyn BackendGateway>,
    session: AdminSession,
    pub(crate) store: RwLock<ConsoleStore>,
    // 串行化 load，保证 replace_all 只执行一次
    load_lock: Mutex<()>,
    events: broadcast::Sender<ConsoleEvent>,
    enrichment_concurrency: usize,
}

impl Console {
    pub fn new(gateway: Arc<dyn BackendGateway>, session: AdminSession) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            gateway,
            session,
            store: RwLock::new(ConsoleStore::new()),
            load_lock: Mutex::new(()),
            events,
            enrichment_concurrency: DEFAULT_ENRICHMENT_CONCURRENCY,
        }
    }

    pub fn with_enrichment_concurrency(mut self, concurrency: usize) -> Self {
        self.enrichment_concurrency = concurrency;
        self
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    pub(crate) fn publish(&self, event: ConsoleEvent) {
        // 没有订阅者时 send 会失败，忽略即可
        let _ = self.events.send(event);
    }

    pub async fn load(&self) -> Result<(), FetchError> {
        let _guard = self.load_lock.lock().await;
        if self.store.read().await.is_loaded() {
            warn!("Console already loaded, ignoring repeated load");
            return Ok(());
        }

        let snapshot = fetch_listings(self.gateway.as_ref())
            .await
            .into_snapshot()?;

        let watchlists = enrich_watchlists(
            self.gateway.as_ref(),
            snapshot.watchlists,
            self.enrichment_concurrency,
        )
        .await;

        let event = {
            let mut store = self.store.write().await;
            store.replace_all(snapshot.accounts, watchlists, snapshot.comments);
            info!(
                "Console loaded: {} accounts, {} watchlists, {} comments",
                store.accounts().len(),
                store.watchlists().len(),
                store.comments().len()
            );
            ConsoleEvent::SnapshotReplaced {
                accounts: store.accounts().len(),
                watchlists: store.watchlists().len(),
                comments: store.comments().len(),
            }
        };
        self.publish(event);
        Ok(())
    }

    pub async fn is_loaded(&self) -> bool {
        self.store.read().await.is_loaded()
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.store.read().await.snapshot()
    }

    pub async fn accounts(&self, query: &str) -> Vec<Account> {
        let store = self.store.read().await;
        search(store.accounts(), query).into_iter().cloned().collect()
    }

    pub async fn watchlists(&self, query: &str) -> Vec<Watchlist> {
        let store = self.store.read().await;
        search(store.watchlists(), query).into_iter().cloned().collect()
    }

    pub async fn comments(&self, query: &str) -> Vec<Comment> {
        let store = self.store.read().await;
        search(store.comments(), query).into_iter().cloned().collect()
    }

    pub async fn account(&self, user_id: &str) -> Option<Account> {
        self.store.read().await.account(user_id).cloned()
    }

    pub async fn admin_profile(&self) -> Option<Account> {
        self.account(&self.session.user_id).await
    }

    pub async fn admin_avatar(&self) -> String {
        self.admin_profile()
            .await
            .map(|a| a.display_image().to_string())
            .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string())
    }

    pub async fn overview(&self) -> DashboardOverview {
        let avatar = self.admin_avatar().await;
        let store = self.store.read().await;
        DashboardOverview::from_snapshot(&store.snapshot(), avatar)
    }
}
