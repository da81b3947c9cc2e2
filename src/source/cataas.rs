// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Cataas API (<https://cataas.com>).
//!
//! Each card takes two requests: `GET /cat?json=true` for a random cat
//! record, then `GET /cat/{id}` for the actual image bytes. Both run on the
//! same client with a bounded redirect policy.

use super::collect_batch;
use crate::deck::{Card, CardImage};
use crate::error::{Error, Result};
use serde::Deserialize;

/// Production endpoint. Tests point the client at a local server instead.
pub const DEFAULT_BASE_URL: &str = "https://cataas.com";

/// JSON record returned by `GET /cat?json=true`.
///
/// Cataas renamed `_id` to `id` at some point; accept both spellings.
#[derive(Debug, Clone, Deserialize)]
struct CatRecord {
    #[serde(alias = "_id")]
    id: String,
}

/// Client for fetching cat cards from Cataas.
#[derive(Debug, Clone)]
pub struct CataasClient {
    http: reqwest::Client,
    base_url: String,
}

impl CataasClient {
    /// Builds a client against the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying TLS backend fails to
    /// initialize.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Builds a client against a custom base URL (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("CatDeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one random cat: record first, then the image bytes derived
    /// from its id.
    pub async fn fetch_one(&self) -> Result<Card> {
        let record: CatRecord = self
            .http
            .get(format!("{}/cat?json=true", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;

        let url = format!("{}/cat/{}", self.base_url, record.id);
        let bytes = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let image = CardImage::from_encoded(bytes.to_vec())?;
        Ok(Card::new(record.id, url, image))
    }

    /// Fetches up to `count` cats, strictly one at a time. Failed items are
    /// logged and omitted; the result may be shorter than `count`.
    pub async fn fetch_batch(&self, count: usize) -> Vec<Card> {
        // Capture an owned clone so the closure's future is `Send` for all
        // lifetimes; capturing `&self` trips rust-lang/rust#110338.
        let client = self.clone();
        collect_batch(count, async move |_| client.fetch_one().await).await
    }
}
