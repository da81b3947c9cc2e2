// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for deck operations: a full decision pass and restart.

use catdeck::deck::{Card, CardImage, Deck, Decision};
use catdeck::source::BATCH_SIZE;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn batch() -> Vec<Card> {
    (0..BATCH_SIZE)
        .map(|i| {
            Card::new(
                format!("cat-{i}"),
                format!("https://cataas.com/cat/cat-{i}"),
                CardImage::from_rgba(1, 1, vec![0, 0, 0, 255]),
            )
        })
        .collect()
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck");
    let cards = batch();

    group.bench_function("full_decision_pass", |b| {
        b.iter(|| {
            let mut deck = Deck::new(cards.clone());
            while !deck.is_exhausted() {
                let decision = if deck.cursor() % 2 == 0 {
                    Decision::Accept
                } else {
                    Decision::Reject
                };
                deck.decide(decision);
            }
            black_box(deck.accepted_count());
        });
    });

    group.finish();
}

fn bench_restart(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck");

    let mut deck = Deck::new(batch());
    while !deck.is_exhausted() {
        deck.decide(Decision::Accept);
    }

    group.bench_function("restart", |b| {
        b.iter(|| {
            let mut fresh = deck.clone();
            fresh.restart();
            black_box(fresh.cursor());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_pass, bench_restart);
criterion_main!(benches);
