// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use log::{debug, trace};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

use fivecard_cards::{Card, CardError, Rank};

use super::value::{HandRank, HandValue, TieBreak};

/// Errors produced when building a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// One of the cards is invalid.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The hand doesn't have exactly five cards.
    #[error("a hand needs exactly {} cards, got {count}", Hand::SIZE)]
    CardCount {
        /// The number of cards given.
        count: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card {card}")]
    DuplicateCard {
        /// The repeated card.
        card: Card,
    },
}

/// A five cards Poker hand.
///
/// The hand is classified once when created, hands compare by [HandValue]
/// so two hands are equal when they have the same strength even if their
/// cards differ.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    /// The cards sorted by descending rank.
    cards: [Card; 5],
    value: HandValue,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five distinct cards in any order.
    pub fn new(cards: &[Card]) -> Result<Hand, HandError> {
        let Ok(mut cards) = <[Card; Hand::SIZE]>::try_from(cards) else {
            debug!("Rejected hand with {} cards", cards.len());
            return Err(HandError::CardCount { count: cards.len() });
        };

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                debug!("Rejected hand with duplicate card {card}");
                return Err(HandError::DuplicateCard { card: *card });
            }
        }

        // Same rank cards are ordered by code so that the layout doesn't
        // depend on the input order.
        cards.sort_unstable_by(|a, b| b.cmp_rank(a).then_with(|| b.code().cmp(&a.code())));

        let value = classify(&cards);
        trace!("{} {:?}", value.rank(), cards);

        Ok(Self { cards, value })
    }

    /// Creates a hand from five card codes in the 0..=51 range.
    pub fn from_codes(codes: &[u32]) -> Result<Hand, HandError> {
        if codes.len() != Hand::SIZE {
            debug!("Rejected hand with {} codes", codes.len());
            return Err(HandError::CardCount { count: codes.len() });
        }

        let cards = codes
            .iter()
            .map(|&code| Card::from_code(code))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    /// The hand strength category.
    pub fn rank(&self) -> HandRank {
        self.value.rank()
    }

    /// The ranks used to break ties between hands of the same category.
    pub fn tie_break(&self) -> TieBreak {
        self.value.tie_break()
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand cards sorted by descending rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Compares two hands, returns Greater if `a` is stronger than `b`.
    pub fn compare(a: &Hand, b: &Hand) -> Ordering {
        a.value.cmp(&b.value)
    }

    /// Returns the strongest hand, or None if there are no hands. With equal
    /// hands the last one is returned.
    pub fn best_of(hands: &[Hand]) -> Option<&Hand> {
        hands.iter().max()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        Hand::compare(self, other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank())?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Parses a hand from five whitespace separated cards (`AH KH QH JH TH`).
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(&cards)
    }
}

/// Classifies five distinct cards sorted by descending rank.
fn classify(cards: &[Card; Hand::SIZE]) -> HandValue {
    let ranks = cards.map(|c| c.rank());
    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high(&ranks);

    let mut groups = [(0u8, Rank::Deuce); Hand::SIZE];
    let num_groups = rank_groups(&ranks, &mut groups);

    let (rank, tie_break) = match (straight, is_flush, &groups[..num_groups]) {
        (Some(high), true, _) => (HandRank::StraightFlush, TieBreak::new(&[high])),
        (_, _, [(4, quad), ..]) => (HandRank::FourOfAKind, TieBreak::new(&[*quad])),
        (_, _, [(3, trips), (2, pair)]) => (HandRank::FullHouse, TieBreak::new(&[*trips, *pair])),
        (_, true, _) => (HandRank::Flush, TieBreak::new(&ranks)),
        (Some(high), _, _) => (HandRank::Straight, TieBreak::new(&[high])),
        (_, _, [(3, trips), ..]) => (HandRank::ThreeOfAKind, TieBreak::new(&[*trips])),
        (_, _, [(2, high), (2, low), ..]) => (HandRank::TwoPair, TieBreak::new(&[*high, *low])),
        (_, _, [(2, pair), ..]) => (HandRank::OnePair, TieBreak::new(&[*pair])),
        _ => (HandRank::HighCard, TieBreak::new(&ranks)),
    };

    HandValue::new(rank, tie_break)
}

/// Returns the straight top rank for descending ranks, the wheel
/// (A 5 4 3 2) is a Five high straight.
fn straight_high(ranks: &[Rank; Hand::SIZE]) -> Option<Rank> {
    const WHEEL: [Rank; Hand::SIZE] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];

    if ranks.windows(2).all(|w| w[0].index() == w[1].index() + 1) {
        Some(ranks[0])
    } else if *ranks == WHEEL {
        Some(Rank::Five)
    } else {
        None
    }
}

/// Groups equal adjacent ranks as (count, rank) pairs sorted by descending
/// count and then by descending rank, returns the number of groups.
fn rank_groups(ranks: &[Rank; Hand::SIZE], groups: &mut [(u8, Rank); Hand::SIZE]) -> usize {
    let mut len = 0;
    for &rank in ranks {
        if len > 0 && groups[len - 1].1 == rank {
            groups[len - 1].0 += 1;
        } else {
            groups[len] = (1, rank);
            len += 1;
        }
    }

    // Stable sort keeps the descending rank order within the same count.
    groups[..len].sort_by(|a, b| b.0.cmp(&a.0));
    len
}
