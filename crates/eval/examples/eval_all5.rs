// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```
//
// add `--features=parallel` to evaluate the hands from 4 threads.

use std::time::Instant;

use fivecard_eval::*;

#[cfg(not(feature = "parallel"))]
fn count_hands() -> [u64; HandRank::COUNT] {
    let mut counts = [0u64; HandRank::COUNT];

    Deck::default().for_each(5, |cards| {
        let hand = Hand::new(cards).expect("deck hands are valid");
        counts[hand.rank() as usize] += 1;
    });

    counts
}

#[cfg(feature = "parallel")]
fn count_hands() -> [u64; HandRank::COUNT] {
    use std::sync::atomic::{AtomicU64, Ordering};

    const NUM_TASKS: usize = 4;

    // Per task counters to avoid contention.
    let task_counters = (0..NUM_TASKS)
        .map(|_| std::array::from_fn::<_, { HandRank::COUNT }, _>(|_| AtomicU64::new(0)))
        .collect::<Vec<_>>();

    Deck::default().par_for_each(NUM_TASKS, 5, |task_id, cards| {
        let hand = Hand::new(cards).expect("deck hands are valid");
        task_counters[task_id][hand.rank() as usize].fetch_add(1, Ordering::Relaxed);
    });

    std::array::from_fn(|rank| {
        task_counters
            .iter()
            .map(|c| c[rank].load(Ordering::Relaxed))
            .sum()
    })
}

#[rustfmt::skip]
fn main() {
    let now = Instant::now();
    let counts = count_hands();

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
