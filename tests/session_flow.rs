// SPDX-License-Identifier: MPL-2.0
//! End-to-end session flow: batch collection, deck decisions, summary text.

use catdeck::deck::{Card, CardImage, Deck, Decision, Session};
use catdeck::error::Error;
use catdeck::i18n::I18n;
use catdeck::source::{collect_batch, BATCH_SIZE};

fn card(id: &str) -> Card {
    Card::new(
        id,
        format!("https://cataas.com/cat/{id}"),
        CardImage::from_rgba(1, 1, vec![0, 0, 0, 255]),
    )
}

#[tokio::test]
async fn partial_batch_still_yields_a_playable_session() {
    // 15 attempts, every third one fails: 10 cats survive.
    let cards = collect_batch(BATCH_SIZE, async |i| {
        if i % 3 == 2 {
            Err(Error::Http("connection reset".to_string()))
        } else {
            Ok(card(&format!("cat-{i}")))
        }
    })
    .await;
    assert_eq!(cards.len(), 10);

    let mut session = Session::Active(Deck::new(cards));
    let deck = session.deck_mut().unwrap();
    while !deck.is_exhausted() {
        deck.decide(Decision::Accept);
    }
    assert_eq!(deck.accepted_count(), 10);
}

#[tokio::test]
async fn empty_batch_is_a_failed_session() {
    let cards = collect_batch(BATCH_SIZE, async |_| {
        Err(Error::Http("no route to host".to_string()))
    })
    .await;
    assert!(cards.is_empty());

    // The application maps an empty batch to the terminal failure state.
    let session = if cards.is_empty() {
        Session::Failed
    } else {
        Session::Active(Deck::new(cards))
    };
    assert!(matches!(session, Session::Failed));
    assert!(session.deck().is_none());
}

#[test]
fn three_card_scenario_reports_two_out_of_three() {
    let mut deck = Deck::new(vec![card("a"), card("b"), card("c")]);
    deck.decide(Decision::Accept);
    deck.decide(Decision::Reject);
    deck.decide(Decision::Accept);
    assert!(deck.is_exhausted());

    let ids: Vec<&str> = deck.accepted().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);

    let mut i18n = I18n::new(Some("en-US".to_string()));
    i18n.set_locale("en-US".parse().unwrap());
    let text = i18n.tr_with_args(
        "summary-count",
        &[
            ("count", &deck.accepted_count().to_string()),
            ("total", &deck.len().to_string()),
        ],
    );
    assert!(text.contains("2 out of 3"), "got: {text}");
}

#[test]
fn zero_likes_use_the_qualitative_message() {
    let mut deck = Deck::new(vec![card("a")]);
    deck.decide(Decision::Reject);
    assert!(deck.is_exhausted());
    assert_eq!(deck.accepted_count(), 0);

    let mut i18n = I18n::new(Some("en-US".to_string()));
    i18n.set_locale("en-US".parse().unwrap());
    let text = i18n.tr("summary-empty");
    assert!(text.contains("didn't like any cats"), "got: {text}");
}

#[test]
fn restart_replays_the_same_deck() {
    let mut deck = Deck::new(vec![card("a"), card("b")]);
    deck.decide(Decision::Accept);
    deck.decide(Decision::Reject);
    assert!(deck.is_exhausted());

    deck.restart();
    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.accepted_count(), 0);
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.current().unwrap().id, "a");
}
