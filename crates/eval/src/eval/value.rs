// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength categories and tie-break encoding.
use serde::{Deserialize, Serialize};
use std::fmt;

use fivecard_cards::Rank;

/// The strength category of a hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, no straight, no flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 9;

    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The number of [TieBreak] fields used by this category.
    pub fn tie_break_fields(&self) -> usize {
        match self {
            HandRank::Flush | HandRank::HighCard => 5,
            HandRank::FullHouse | HandRank::TwoPair => 2,
            HandRank::StraightFlush
            | HandRank::FourOfAKind
            | HandRank::Straight
            | HandRank::ThreeOfAKind
            | HandRank::OnePair => 1,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{s}")
    }
}

/// Ranks used to break ties between hands with the same [HandRank].
///
/// The ranks are packed in a 20 bits integer with 4 bits per field, field 0 is
/// the most significant:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|xxxx0000|11112222|33334444|
///   +--------+--------+--------+--------+
/// ```
///
/// Unused trailing fields are zero, so comparing the packed values compares
/// the fields in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TieBreak(u32);

impl TieBreak {
    /// The number of fields.
    pub const FIELDS: usize = 5;

    const FIELD_BITS: usize = 4;

    /// Creates a tie-break setting field `i` to `ranks[i]`.
    ///
    /// Ranks past the fifth are ignored.
    pub fn new(ranks: &[Rank]) -> Self {
        let packed = ranks
            .iter()
            .take(Self::FIELDS)
            .enumerate()
            .fold(0, |acc, (idx, rank)| acc | (rank.index() as u32) << Self::shift(idx));
        Self(packed)
    }

    /// Returns the rank index stored in the given field or None if the index
    /// is not in 0..5.
    pub fn field(&self, index: usize) -> Option<u8> {
        (index < Self::FIELDS).then(|| ((self.0 >> Self::shift(index)) & 0xF) as u8)
    }

    /// Returns all fields, the most significant first.
    pub fn fields(&self) -> [u8; TieBreak::FIELDS] {
        std::array::from_fn(|idx| ((self.0 >> Self::shift(idx)) & 0xF) as u8)
    }

    /// The packed integer value.
    pub fn packed(&self) -> u32 {
        self.0
    }

    #[inline]
    fn shift(index: usize) -> usize {
        (Self::FIELDS - 1 - index) * Self::FIELD_BITS
    }
}

/// A hand value, hands are compared by rank first and then by tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tie_break: TieBreak,
}

impl HandValue {
    pub(crate) fn new(rank: HandRank, tie_break: TieBreak) -> Self {
        Self { rank, tie_break }
    }

    /// The hand strength category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks within the category.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_fields() {
        let tb = TieBreak::new(&[Rank::Ace, Rank::King]);
        assert_eq!(tb.packed(), 0xCB000);
        assert_eq!(tb.field(0), Some(12));
        assert_eq!(tb.field(1), Some(11));
        assert_eq!(tb.field(2), Some(0));
        assert_eq!(tb.field(5), None);

        let tb = TieBreak::new(&[Rank::Ace, Rank::King, Rank::Nine, Rank::Seven, Rank::Trey]);
        assert_eq!(tb.packed(), 0xCB751);
        assert_eq!(tb.fields(), [12, 11, 7, 5, 1]);

        assert_eq!(TieBreak::default().fields(), [0; 5]);
        assert!(TieBreak::new(&[Rank::Ace]).packed() < 1 << 20);
    }

    #[test]
    fn tie_break_ordering() {
        let high = TieBreak::new(&[Rank::Ace, Rank::Deuce]);
        let low = TieBreak::new(&[Rank::King, Rank::Ace]);
        assert!(high > low);

        let high = TieBreak::new(&[Rank::Ace, Rank::King, Rank::Nine, Rank::Seven, Rank::Trey]);
        let low = TieBreak::new(&[Rank::Ace, Rank::King, Rank::Nine, Rank::Seven, Rank::Deuce]);
        assert!(high > low);
    }

    #[test]
    fn value_ordering() {
        // Category dominates the tie-break.
        let flush = HandValue::new(HandRank::Flush, TieBreak::new(&[Rank::Seven]));
        let straight = HandValue::new(HandRank::Straight, TieBreak::new(&[Rank::Ace]));
        assert!(flush > straight);

        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), HandRank::COUNT);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
        assert_eq!(HandRank::Flush.tie_break_fields(), 5);
        assert_eq!(HandRank::TwoPair.tie_break_fields(), 2);
        assert_eq!(HandRank::OnePair.tie_break_fields(), 1);
    }
}
