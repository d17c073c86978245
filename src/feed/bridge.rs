use std::path::Path;

use crate::core::{
    models::RawCard,
    BinderError,
};

/// Reads a card dump the host shell delivered as a JSON array on disk.
pub async fn read_cards(path: &Path) -> Result<Vec<RawCard>, BinderError> {
    let payload = tokio::fs::read_to_string(path).await?;
    parse_payload(&payload)
}

pub fn parse_payload(payload: &str) -> Result<Vec<RawCard>, BinderError> {
    Ok(serde_json::from_str(payload)?)
}
