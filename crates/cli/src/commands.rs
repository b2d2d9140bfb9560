// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation commands.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::Rng;
use std::{
    cmp::Ordering,
    sync::{
        OnceLock,
        atomic::{self, AtomicU64},
    },
    time::Instant,
};

use fivecard_eval::{Card, Deck, Hand, HandRank, Rank};

/// Parses a hand from cards given as text (`AH`) or codes (`51`).
pub fn parse_hand(cards: &[String]) -> Result<Hand> {
    let cards = cards
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    let hand = Hand::new(&cards)?;
    debug!("Parsed hand {hand}");
    Ok(hand)
}

/// Describes a hand with its category, tie-break ranks, and cards.
pub fn describe(hand: &Hand) -> String {
    let tie_break = hand
        .tie_break()
        .fields()
        .iter()
        .take(hand.rank().tie_break_fields())
        .filter_map(|&idx| Rank::from_index(idx))
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{hand} tie-break: {tie_break} (0x{:05x})",
        hand.tie_break().packed()
    )
}

/// Compares two hands and describes the result.
pub fn compare(first: &Hand, second: &Hand) -> String {
    match Hand::compare(first, second) {
        Ordering::Greater => format!("First wins: {first} beats {second}"),
        Ordering::Less => format!("Second wins: {second} beats {first}"),
        Ordering::Equal => format!("Tie: {first} and {second}"),
    }
}

/// Evaluates all 5 cards hands and returns the count for each category.
pub fn count_hands(tasks: usize) -> Result<[u64; HandRank::COUNT]> {
    count_deck_hands(&Deck::default(), Hand::SIZE, tasks)
}

/// Evaluates all k-cards hands in the deck, fails if any hand can't be
/// evaluated.
fn count_deck_hands(deck: &Deck, k: usize, tasks: usize) -> Result<[u64; HandRank::COUNT]> {
    if tasks == 0 {
        bail!("The number of tasks must be positive");
    }

    info!("Evaluating all {k} cards hands with {tasks} tasks");
    let now = Instant::now();

    // Per task counters to avoid contention.
    let task_counters = (0..tasks)
        .map(|_| std::array::from_fn::<_, { HandRank::COUNT }, _>(|_| AtomicU64::new(0)))
        .collect::<Vec<_>>();
    let failed = AtomicU64::new(0);
    let first_error = OnceLock::new();

    let count = |task_id: usize, cards: &[Card]| match Hand::new(cards) {
        Ok(hand) => {
            task_counters[task_id][hand.rank() as usize].fetch_add(1, atomic::Ordering::Relaxed);
        }
        Err(e) => {
            failed.fetch_add(1, atomic::Ordering::Relaxed);
            let _ = first_error.set(e);
        }
    };

    if tasks == 1 {
        deck.for_each(k, |cards| count(0, cards));
    } else {
        deck.par_for_each(tasks, k, count);
    }

    if let Some(e) = first_error.into_inner() {
        bail!(
            "{} hands failed to evaluate: {e}",
            failed.load(atomic::Ordering::Relaxed)
        );
    }

    let counts = std::array::from_fn(|rank| {
        task_counters
            .iter()
            .map(|c| c[rank].load(atomic::Ordering::Relaxed))
            .sum()
    });

    info!("Evaluated all hands in {:.3}s", now.elapsed().as_secs_f64());
    Ok(counts)
}

/// Deals `count` hands from a shuffled deck, sorted from strongest to weakest.
pub fn sample_hands<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Hand>> {
    let mut deck = Deck::new_and_shuffled(rng);
    let mut hands = Vec::with_capacity(count);

    for _ in 0..count {
        let cards = (0..Hand::SIZE)
            .map(|_| deck.deal())
            .collect::<Option<Vec<_>>>()
            .with_context(|| format!("Not enough cards to deal {count} hands"))?;
        hands.push(Hand::new(&cards)?);
    }

    hands.sort_by(|a, b| b.cmp(a));
    Ok(hands)
}
