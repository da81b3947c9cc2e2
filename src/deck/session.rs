// SPDX-License-Identifier: MPL-2.0
//! Session state machine over a fetched batch of cards.

use super::Card;

/// Verdict applied to the card at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// The fixed batch of cards for one session, the cursor marking the next
/// undecided card, and the indices of accepted cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    accepted: Vec<usize>,
}

impl Deck {
    /// Wraps a non-empty batch. Empty batches are handled one level up as
    /// [`Session::Failed`]; a `Deck` always has at least one card.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        debug_assert!(!cards.is_empty());
        Self {
            cards,
            cursor: 0,
            accepted: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The topmost undecided card, or `None` once the deck is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// All undecided cards, current card first.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.cursor.min(self.cards.len())..]
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// Commits a decision for the current card: appends it to the accepted
    /// list on [`Decision::Accept`], then advances the cursor.
    ///
    /// Returns `false` without changing anything when the deck is already
    /// exhausted.
    pub fn decide(&mut self, decision: Decision) -> bool {
        if self.is_exhausted() {
            return false;
        }
        if decision == Decision::Accept {
            self.accepted.push(self.cursor);
        }
        self.cursor += 1;
        true
    }

    /// Resets the cursor and accepted list for a fresh pass over the same
    /// cards. No re-fetch happens.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.accepted.clear();
    }

    /// Accepted cards in encounter order.
    pub fn accepted(&self) -> impl Iterator<Item = &Card> {
        self.accepted.iter().map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

/// Lifecycle of one session, from batch fetch to an interactive deck.
///
/// `Failed` is terminal: an empty batch offers no retry, the user has to
/// relaunch the application. `Active` is never left; restarting replays the
/// same deck.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Loading,
    Failed,
    Active(Deck),
}

impl Session {
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        match self {
            Session::Active(deck) => Some(deck),
            _ => None,
        }
    }

    pub fn deck_mut(&mut self) -> Option<&mut Deck> {
        match self {
            Session::Active(deck) => Some(deck),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardImage;

    fn card(id: &str) -> Card {
        Card::new(
            id,
            format!("https://cataas.com/cat/{id}"),
            CardImage::from_rgba(1, 1, vec![0, 0, 0, 255]),
        )
    }

    fn deck(ids: &[&str]) -> Deck {
        Deck::new(ids.iter().map(|id| card(id)).collect())
    }

    #[test]
    fn new_deck_starts_at_cursor_zero() {
        let deck = deck(&["a", "b"]);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.accepted_count(), 0);
        assert_eq!(deck.current().unwrap().id, "a");
        assert_eq!(deck.remaining().len(), 2);
        assert!(!deck.is_exhausted());
    }

    #[test]
    fn decide_advances_cursor_by_one() {
        let mut deck = deck(&["a", "b"]);
        assert!(deck.decide(Decision::Reject));
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.current().unwrap().id, "b");
        assert_eq!(deck.accepted_count(), 0);
    }

    #[test]
    fn accept_appends_in_encounter_order() {
        let mut deck = deck(&["a", "b", "c"]);
        deck.decide(Decision::Accept);
        deck.decide(Decision::Reject);
        deck.decide(Decision::Accept);
        let ids: Vec<&str> = deck.accepted().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(deck.is_exhausted());
    }

    #[test]
    fn decisions_after_exhaustion_are_no_ops() {
        let mut deck = deck(&["a"]);
        assert!(deck.decide(Decision::Accept));
        assert!(deck.is_exhausted());
        assert!(!deck.decide(Decision::Accept));
        assert!(!deck.decide(Decision::Reject));
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.accepted_count(), 1);
    }

    #[test]
    fn accepted_never_exceeds_cursor() {
        let mut deck = deck(&["a", "b", "c", "d"]);
        for decision in [
            Decision::Accept,
            Decision::Accept,
            Decision::Reject,
            Decision::Accept,
        ] {
            assert!(deck.accepted_count() <= deck.cursor());
            assert!(deck.cursor() <= deck.len());
            deck.decide(decision);
        }
        assert!(deck.accepted_count() <= deck.cursor());
        assert_eq!(deck.cursor(), deck.len());
    }

    #[test]
    fn restart_resets_progress_but_not_cards() {
        let mut deck = deck(&["a", "b"]);
        deck.decide(Decision::Accept);
        deck.decide(Decision::Accept);
        assert!(deck.is_exhausted());

        deck.restart();
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.accepted_count(), 0);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.current().unwrap().id, "a");
    }

    #[test]
    fn remaining_shrinks_with_each_decision() {
        let mut deck = deck(&["a", "b", "c"]);
        assert_eq!(deck.remaining().len(), 3);
        deck.decide(Decision::Reject);
        assert_eq!(deck.remaining().len(), 2);
        assert_eq!(deck.remaining()[0].id, "b");
        deck.decide(Decision::Reject);
        deck.decide(Decision::Reject);
        assert!(deck.remaining().is_empty());
    }

    #[test]
    fn session_default_is_loading() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(session.deck().is_none());
    }

    #[test]
    fn session_active_exposes_deck() {
        let mut session = Session::Active(deck(&["a"]));
        assert!(!session.is_loading());
        assert!(session.deck().is_some());
        session.deck_mut().unwrap().decide(Decision::Accept);
        assert_eq!(session.deck().unwrap().accepted_count(), 1);
    }
}
