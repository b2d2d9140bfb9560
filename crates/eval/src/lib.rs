// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker hand evaluator.
//!
//! The evaluator classifies five cards hands into the standard Poker
//! categories and gives them a total order, hands can be created from cards,
//! from card codes in the 0..=51 range, or parsed from text:
//!
//! ```
//! # use fivecard_eval::*;
//! let royal = Hand::from_codes(&[51, 50, 49, 48, 47]).unwrap();
//! assert_eq!(royal.rank(), HandRank::StraightFlush);
//!
//! let full_house = "AH AS AD KC KH".parse::<Hand>().unwrap();
//! assert_eq!(full_house.rank(), HandRank::FullHouse);
//! assert!(royal > full_house);
//!
//! // Invalid input is rejected before evaluation.
//! assert!(matches!(
//!     Hand::from_codes(&[10, 10, 1, 2, 3]),
//!     Err(HandError::DuplicateCard { .. })
//! ));
//! ```
//!
//! Hands have no shared state so they can be evaluated from many threads, see
//! the `eval_all5` example.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Hand, HandError, HandRank, HandValue, TieBreak};

// Reexport cards types.
pub use fivecard_cards::{Card, CardError, Deck, Rank, Suit};
