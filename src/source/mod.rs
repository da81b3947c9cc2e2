// SPDX-License-Identifier: MPL-2.0
//! Image source: sequential batch fetching from the Cataas API.
//!
//! The batch loop is intentionally sequential (one request in flight at a
//! time) and tolerant of per-item failures: a failed fetch is logged and
//! skipped, never aborting the rest of the batch.

mod cataas;

pub use cataas::{CataasClient, DEFAULT_BASE_URL};

use crate::deck::Card;
use crate::error::Result;

/// Number of cards fetched for one session.
pub const BATCH_SIZE: usize = 15;

/// Runs `fetch_one` up to `count` times, one at a time, collecting the
/// successes in order. Failures are logged at `warn` and omitted; the
/// result has length `0..=count`.
pub async fn collect_batch<F>(count: usize, mut fetch_one: F) -> Vec<Card>
where
    F: AsyncFnMut(usize) -> Result<Card>,
{
    let mut cards = Vec::with_capacity(count);
    for attempt in 0..count {
        match fetch_one(attempt).await {
            Ok(card) => cards.push(card),
            Err(err) => tracing::warn!(attempt, %err, "failed to fetch cat, skipping"),
        }
    }
    cards
}
