// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing card definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Errors produced when building a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card code is not in the 0..=51 range.
    #[error("card code {code} is out of range, expected 0..=51")]
    OutOfRange {
        /// The rejected code.
        code: u32,
    },
    /// The card text is not a valid card.
    #[error("invalid card {0:?}")]
    Parse(String),
}

/// A playing card.
///
/// A card is identified by a code in the 0..=51 range, the rank is the code
/// modulo 13 and the suit is the code divided by 13:
///
/// ```text
///   code  0..=12  Hearts   (2H, 3H, .., AH)
///   code 13..=25  Spades   (2S, 3S, .., AS)
///   code 26..=38  Diamonds (2D, 3D, .., AD)
///   code 39..=51  Clubs    (2C, 3C, .., AC)
/// ```
///
/// Two cards are equal only if they have the same code, use [Card::cmp_rank]
/// to order cards by rank.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u8);

impl Card {
    /// The number of distinct cards.
    pub const COUNT: u32 = 52;

    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * Rank::COUNT + rank as u8)
    }

    /// Create a card from its code.
    pub fn from_code(code: u32) -> Result<Card, CardError> {
        if code < Self::COUNT {
            Ok(Self(code as u8))
        } else {
            Err(CardError::OutOfRange { code })
        }
    }

    /// This card unique code.
    pub fn code(&self) -> u32 {
        self.0 as u32
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 % Rank::COUNT) as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 / Rank::COUNT) as usize]
    }

    /// Compares two cards by rank only, cards with the same rank and a
    /// different suit compare as equal.
    #[inline]
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Returns the card long name, for example `Ace of Hearts`.
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Card::from_code(code)
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.code()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Parses a card from its short form (`AH`, `td`) or from its code (`51`).
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let code = s.parse::<u32>().map_err(|_| CardError::Parse(s.to_string()))?;
            return Card::from_code(code);
        }

        let mut chars = s.chars();
        let card = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => Rank::from_char(r)
                .zip(Suit::from_char(c))
                .map(|(rank, suit)| Card::new(rank, suit)),
            _ => None,
        };

        card.ok_or_else(|| CardError::Parse(s.to_string()))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: u8 = 13;

    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for the given index, 0 is Deuce and 12 is Ace.
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ALL.get(index as usize).copied()
    }

    /// The rank index, 0 is Deuce and 12 is Ace.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no strength, the discriminant follows the card code layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    /// Returns all suits in code order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();

        for code in 0..Card::COUNT {
            let card = Card::from_code(code).unwrap();
            assert_eq!(card.code(), code);
            assert_eq!(card.rank() as u32, code % 13);
            assert_eq!(card.suit() as u32, code / 13);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card);
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Card::COUNT as usize);

        let ah = Card::from_code(12).unwrap();
        assert_eq!((ah.rank(), ah.suit()), (Rank::Ace, Suit::Hearts));

        let ds = Card::from_code(13).unwrap();
        assert_eq!((ds.rank(), ds.suit()), (Rank::Deuce, Suit::Spades));

        let td = Card::from_code(34).unwrap();
        assert_eq!((td.rank(), td.suit()), (Rank::Ten, Suit::Diamonds));

        let ac = Card::from_code(51).unwrap();
        assert_eq!((ac.rank(), ac.suit()), (Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn card_out_of_range() {
        assert_eq!(
            Card::from_code(52),
            Err(CardError::OutOfRange { code: 52 })
        );
        assert!(Card::from_code(u32::MAX).is_err());
        assert!(Card::try_from(100u32).is_err());
    }

    #[test]
    fn card_rank_ordering() {
        let kh = Card::new(Rank::King, Suit::Hearts);
        let kc = Card::new(Rank::King, Suit::Clubs);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let ds = Card::new(Rank::Deuce, Suit::Spades);

        assert_eq!(kh.cmp_rank(&kc), Ordering::Equal);
        assert_ne!(kh, kc);
        assert_eq!(kh.cmp_rank(&ad), Ordering::Less);
        assert_eq!(ad.cmp_rank(&ds), Ordering::Greater);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.name(), "King of Diamonds");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Trey, Suit::Hearts);
        assert_eq!(c.name(), "Three of Hearts");
        assert_eq!(format!("{c:?}"), "Card(3H)");
    }

    #[test]
    fn card_from_str() {
        for code in 0..Card::COUNT {
            let card = Card::from_code(code).unwrap();
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
            assert_eq!(code.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!(
            "52".parse::<Card>(),
            Err(CardError::OutOfRange { code: 52 })
        );
        assert!("".parse::<Card>().is_err());
        assert!("1H".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("AHS".parse::<Card>().is_err());
        assert!("99999999999".parse::<Card>().is_err());
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(serde_json::to_string(&card).unwrap(), "51");
        assert_eq!(serde_json::from_str::<Card>("51").unwrap(), card);
        assert!(serde_json::from_str::<Card>("52").is_err());
    }

    #[test]
    fn rank_index() {
        for (idx, rank) in Rank::ranks().enumerate() {
            assert_eq!(rank.index() as usize, idx);
            assert_eq!(Rank::from_index(idx as u8), Some(rank));
        }

        assert_eq!(Rank::from_index(13), None);
        assert_eq!(Suit::suits().count(), 4);
    }
}
