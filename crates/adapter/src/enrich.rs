use domain::{Watchlist, FALLBACK_POSTER_URL};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::traits::BackendGateway;

pub const DEFAULT_ENRICHMENT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    Resolved(String),
    Fallback,
}

impl Poster {
    pub fn into_url(self) -> String {
        match self {
            Poster::Resolved(url) => url,
            Poster::Fallback => FALLBACK_POSTER_URL.to_string(),
        }
    }
}

pub async fn resolve_poster(gateway: &dyn BackendGateway, watchlist: &Watchlist) -> Poster {
    let Some(title_id) = watchlist.cover_title() else {
        return Poster::Fallback;
    };

    match gateway.get_title_metadata(title_id).await {
        Ok(meta) if !meta.poster.is_empty() => Poster::Resolved(meta.poster),
        Ok(_) => {
            warn!(
                "Title {} has no poster, using fallback for watchlist {}",
                title_id, watchlist.list_id
            );
            Poster::Fallback
        }
        Err(e) => {
            warn!("Failed to fetch title {}: {}", e.title_id, e.source);
            Poster::Fallback
        }
    }
}

pub async fn enrich_watchlists(
    gateway: &dyn BackendGateway,
    watchlists: Vec<Watchlist>,
    concurrency: usize,
) -> Vec<Watchlist> {
    let total = watchlists.len();
    let enriched: Vec<Watchlist> = stream::iter(watchlists)
        .map(move |watchlist| async move {
            let poster = resolve_poster(gateway, &watchlist).await;
            watchlist.with_poster(poster.into_url())
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let fallbacks = enriched
        .iter()
        .filter(|w| w.poster_url.as_deref() == Some(FALLBACK_POSTER_URL))
        .count();
    debug!("Enriched {} watchlists ({} with fallback poster)", total, fallbacks);
    enriched
}
