use reqwest::{
    header::AUTHORIZATION,
    Client,
};

use crate::core::{
    models::RawCard,
    BinderError,
};

/// `GET {base_url}/cards` with a bearer token, returning the raw records
/// exactly as the API sent them.
pub async fn fetch_cards(base_url: &str, token: &str) -> Result<Vec<RawCard>, BinderError> {
    let url = format!("{}/cards", base_url.trim_end_matches('/'));

    let response = Client::new()
        .get(&url)
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json().await?)
}
