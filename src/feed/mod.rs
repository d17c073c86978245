//! Startup loading of the card collection.
//!
//! Exactly one load attempt is made per session. The collection comes either
//! from the remote card API or from a JSON dump a host shell left on disk,
//! and raw records are normalized before they leave this module.

mod api;
mod bridge;

use std::{
    env,
    path::PathBuf,
};

use crate::core::{
    models::{
        normalize_cards,
        RawCard,
    },
    BinderError,
    Card,
};

pub const SERVER_BASE_VAR: &str = "SERVER_BASE";
pub const AUTH_VAR: &str = "AUTH";
pub const BRIDGE_FILE_VAR: &str = "CARDS_FILE";

/// Where the collection comes from.
#[derive(Debug, Clone)]
pub enum CardFeed {
    Remote { base_url: String, token: String },
    Bridge { path: PathBuf },
}

impl CardFeed {
    /// Reads the feed choice from the environment. A bridge file wins over
    /// the remote endpoint when both are configured.
    pub fn from_env() -> Option<Self> {
        if let Ok(path) = env::var(BRIDGE_FILE_VAR) {
            if !path.is_empty() {
                return Some(CardFeed::Bridge { path: PathBuf::from(path) });
            }
        }

        match (env::var(SERVER_BASE_VAR), env::var(AUTH_VAR)) {
            (Ok(base_url), Ok(token)) if !base_url.is_empty() => {
                Some(CardFeed::Remote { base_url, token })
            }
            _ => None,
        }
    }
}

pub async fn load_cards(card_feed: &CardFeed) -> Result<Vec<Card>, BinderError> {
    let raw: Vec<RawCard> = match card_feed {
        CardFeed::Remote { base_url, token } => {
            log::info!("Fetching cards from {}", base_url);
            api::fetch_cards(base_url, token).await?
        }
        CardFeed::Bridge { path } => {
            log::info!("Reading cards from {}", path.display());
            bridge::read_cards(path).await?
        }
    };

    Ok(normalize_cards(raw))
}
