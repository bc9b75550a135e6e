//! Ordered deck of cards.
//!
//! Backed by a persistent `im::Vector`, so cloning a deck to branch a
//! simulation is O(1) and draws from the front stay cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{AnyCard, Card, CardKind};
use crate::core::rng::{shuffle_with, RandomSource};

use super::hand::Hand;

/// Ordered, mutable sequence of cards.
///
/// Insertion order is draw order until the deck is shuffled. Names are
/// not unique.
///
/// ```
/// use datadeck::cards::{Creature, Rarity};
/// use datadeck::zones::Deck;
///
/// let mut deck = Deck::new();
/// deck.add_card(Creature::new("Rat", 2, Rarity::Common, 1, 3).unwrap());
/// deck.add_card(Creature::new("Troll", 6, Rarity::Rare, 6, 7).unwrap());
///
/// assert_eq!(deck.draw_card().map(|c| c.name().to_string()), Some("Rat".into()));
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<AnyCard>,
}

/// Aggregate numbers for a deck.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total_cards: usize,
    pub creatures: usize,
    pub spells: usize,
    pub artifacts: usize,
    /// Elite and tournament cards.
    pub others: usize,
    /// Mean cost to one decimal place, ties to even. 0 for an empty deck.
    pub avg_cost: f64,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the back.
    pub fn add_card(&mut self, card: impl Into<AnyCard>) {
        self.cards.push_back(card.into());
    }

    /// Remove the first card named `name`.
    ///
    /// Returns false, leaving the deck untouched, if there is none.
    pub fn remove_card(&mut self, name: &str) -> bool {
        match self.cards.iter().position(|card| card.name() == name) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Take the front card, or `None` when the deck is empty.
    pub fn draw_card(&mut self) -> Option<AnyCard> {
        let card = self.cards.pop_front();
        if let Some(card) = &card {
            debug!(card = card.name(), remaining = self.cards.len(), "card drawn");
        }
        card
    }

    /// Uniformly permute the deck in place.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let cards = &mut self.cards;
        shuffle_with(rng, cards.len(), |i, j| cards.swap(i, j));
    }

    #[must_use]
    pub fn deck_stats(&self) -> DeckStats {
        let mut stats = DeckStats {
            total_cards: self.cards.len(),
            creatures: 0,
            spells: 0,
            artifacts: 0,
            others: 0,
            avg_cost: 0.0,
        };
        let mut total_cost = 0u64;
        for card in &self.cards {
            total_cost += u64::from(card.cost());
            match card.kind() {
                CardKind::Creature => stats.creatures += 1,
                CardKind::Spell => stats.spells += 1,
                CardKind::Artifact => stats.artifacts += 1,
                CardKind::Elite | CardKind::Tournament => stats.others += 1,
            }
        }
        if stats.total_cards > 0 {
            stats.avg_cost = round_tenths_half_even(total_cost, stats.total_cards as u64);
        }
        stats
    }

    /// Cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = &AnyCard> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// `total / count` to one decimal place, exact ties to the even tenth.
fn round_tenths_half_even(total: u64, count: u64) -> f64 {
    let scaled = total * 10;
    let mut tenths = scaled / count;
    let twice_rem = (scaled % count) * 2;
    if twice_rem > count || (twice_rem == count && tenths % 2 == 1) {
        tenths += 1;
    }
    tenths as f64 / 10.0
}

impl FromIterator<AnyCard> for Deck {
    fn from_iter<I: IntoIterator<Item = AnyCard>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Creatures, then spells, then artifacts.
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        hand.into_cards().collect()
    }
}
