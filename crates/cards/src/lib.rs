// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard playing cards types.
//!
//! Each of the 52 cards is identified by a code in the 0..=51 range, the rank
//! is the code modulo 13 and the suit is the code divided by 13:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit};
//! let ac = Card::from_code(51).unwrap();
//! assert_eq!(ac, Card::new(Rank::Ace, Suit::Clubs));
//! assert_eq!(ac.to_string(), "AC");
//!
//! // Codes outside the deck are rejected.
//! assert!(Card::from_code(52).is_err());
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the closure `task_id` can be used to store per task data to
//! reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use fivecard_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardError, Rank, Suit};

mod deck;
pub use deck::Deck;
