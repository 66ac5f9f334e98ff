mod commands;
mod error;
mod events;
mod models;
pub mod filter;
pub mod views;

pub use commands::{BanStatus, ModerationCommand};
pub use error::{Collection, FetchError, GatewayError, LookupError, ModerationError, MutationError};
pub use events::ConsoleEvent;
pub use models::{
    Account, AdminSession, Comment, Snapshot, TitleMetadata, Watchlist, DEFAULT_PROFILE_IMAGE,
    FALLBACK_POSTER_URL,
};
