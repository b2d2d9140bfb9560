// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Card, Deck, for_each_combination};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k. Hands are split between tasks by
    /// their first card, task `t` gets the hands whose first card position
    /// modulo `num_tasks` is `t`.
    ///
    /// Panics if k is not 1 <= k <= 7 or if num_tasks is zero.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0, "num_tasks > 0");

        let n = self.cards.len();
        if k > n {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut h = Vec::with_capacity(k);
                    for first in (task_id..=(n - k)).step_by(num_tasks) {
                        let rest = &self.cards[first + 1..];
                        for_each_combination(rest.len(), k - 1, |positions| {
                            h.clear();
                            h.push(self.cards[first]);
                            h.extend(positions.iter().map(|&pos| rest[pos]));
                            f(task_id, &h);
                        });
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn par_for_each_counts() {
        let deck = Deck::default();

        for (k, expected) in [(1, 52), (2, 1_326), (3, 22_100), (5, 2_598_960)] {
            let counter = AtomicU64::new(0);
            deck.par_for_each(4, k, |task_id, hand| {
                assert!(task_id < 4);
                assert_eq!(hand.len(), k);
                counter.fetch_add(1, Ordering::Relaxed);
            });
            assert_eq!(counter.load(Ordering::Relaxed), expected);
        }
    }

    #[test]
    fn par_for_each_more_tasks_than_cards() {
        let deck = Deck::default();

        let counter = AtomicU64::new(0);
        deck.par_for_each(64, 2, |_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 1_326);
    }
}
