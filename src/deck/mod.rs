// SPDX-License-Identifier: MPL-2.0
//! Deck state: the fetched batch of cards, the cursor over undecided cards,
//! and the list of accepted cards.
//!
//! All mutation funnels through [`Deck::decide`] and [`Deck::restart`] so the
//! session invariants (monotonic cursor, accepted is an order-preserving
//! subsequence of the decided prefix) hold by construction.

mod card;
mod session;

pub use card::{Card, CardImage};
pub use session::{Deck, Decision, Session};
