// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client for catalog and image downloads.

use crate::error::{Error, Result};
use std::sync::OnceLock;
use std::time::Duration;

const USER_AGENT: &str = concat!("Flipbook/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn client() -> &'static reqwest::Client {
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default HTTP client");
                reqwest::Client::new()
            })
    })
}

async fn get(url: &str) -> Result<reqwest::Response> {
    let response = client().get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "HTTP status: {} for {}",
            response.status(),
            url
        )));
    }
    Ok(response)
}

/// Downloads a resource body as raw bytes.
pub async fn get_bytes(url: &str) -> Result<Vec<u8>> {
    let bytes = get(url).await?.bytes().await?;
    tracing::debug!(url, len = bytes.len(), "downloaded");
    Ok(bytes.to_vec())
}

/// Downloads a resource body as UTF-8 text.
pub async fn get_text(url: &str) -> Result<String> {
    Ok(get(url).await?.text().await?)
}
