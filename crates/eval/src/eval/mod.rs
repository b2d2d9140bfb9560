// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A [Hand] is created from five distinct cards and it is classified once into
//! one of the nine [HandRank] categories. Hands within the same category are
//! ranked by a [TieBreak] that packs up to five ranks:
//!
//! | Category        | Tie-break fields                          |
//! |-----------------|-------------------------------------------|
//! | Straight Flush  | top rank, Five for the wheel (A 5 4 3 2)  |
//! | Four of a Kind  | quads rank                                |
//! | Full House      | trips rank, pair rank                     |
//! | Flush           | the five ranks in descending order        |
//! | Straight        | top rank, Five for the wheel              |
//! | Three of a Kind | trips rank                                |
//! | Two Pair        | high pair rank, low pair rank             |
//! | One Pair        | pair rank                                 |
//! | High Card       | the five ranks in descending order        |

mod hand;
pub use hand::{Hand, HandError};

mod value;
pub use value::{HandRank, HandValue, TieBreak};
