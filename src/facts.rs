//! One-shot fetch of a random cat fact over HTTP.

use crate::config::CONFIG;
use crate::error::RosterError;
use tracing::error;
use url::Url;

/// Build the HTTP client, honoring the configured proxy.
pub fn client() -> Result<reqwest::Client, RosterError> {
    let mut builder = reqwest::Client::builder();
    if let Some(proxy_url) = CONFIG.proxy.clone() {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }
    Ok(builder.build()?)
}

/// GET the fact endpoint and return the raw response body.
pub async fn fetch_random_fact(
    client: &reqwest::Client,
    url: Url,
) -> Result<String, RosterError> {
    let resp = client.get(url).send().await?.error_for_status()?;
    Ok(resp.text().await?)
}

/// Like [`fetch_random_fact`], but a failure is logged and swallowed; the
/// caller prints nothing when no fact could be fetched.
pub async fn try_fetch_random_fact(client: &reqwest::Client, url: Url) -> Option<String> {
    match fetch_random_fact(client, url).await {
        Ok(fact) => Some(fact),
        Err(e) => {
            error!(error = %e, "failed to fetch a fact");
            None
        }
    }
}
