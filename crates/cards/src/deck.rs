// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of playing cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let mut h = Vec::with_capacity(k);
        for_each_combination(self.cards.len(), k, |positions| {
            h.clear();
            h.extend(positions.iter().map(|&pos| self.cards[pos]));
            f(&h);
        });
    }

    /// Calls the `f` closure for `n` random k-cards hands.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<R, F>(&self, n: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..n {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Calls `f` with the positions of each k-subset of 0..n in lexicographic order.
fn for_each_combination<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    let mut positions = (0..k).collect::<Vec<_>>();
    loop {
        f(&positions);

        // The rightmost position that has not reached its last value.
        let Some(i) = (0..k).rposition(|i| positions[i] != i + n - k) else {
            return;
        };

        positions[i] += 1;
        for j in (i + 1)..k {
            positions[j] = positions[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_default_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        for (code, card) in deck.into_iter().enumerate() {
            assert_eq!(card.code() as usize, code);
        }
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut cards = HashSet::default();

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn combinations() {
        let mut subsets = Vec::new();
        for_each_combination(4, 2, |p| subsets.push(p.to_vec()));
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );

        let mut count = 0;
        for_each_combination(3, 0, |p| {
            assert!(p.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);

        for_each_combination(2, 3, |_| panic!("k > n"));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        let mut counter = 0;
        deck.sample(10, 5, &mut rng, |hand| {
            assert_eq!(hand.len(), 5);
            let unique = hand.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5);
            counter += 1;
        });
        assert_eq!(counter, 10);
    }
}
