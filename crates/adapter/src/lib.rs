mod console;
mod drivers;
mod enrich;
mod fetch;
mod moderation;
mod traits;

#[cfg(test)]
mod fake;

pub use console::Console;
pub use drivers::http::{HttpGateway, HttpGatewayConfig};
pub use enrich::{enrich_watchlists, resolve_poster, Poster, DEFAULT_ENRICHMENT_CONCURRENCY};
pub use fetch::{fetch_listings, ListingOutcome};
pub use moderation::{ConfirmationGate, ModerationOutcome, DELETE_COMMENT_PROMPT};
pub use traits::BackendGateway;
