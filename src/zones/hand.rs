//! The acting side's hand, split by card kind.

use serde::{Deserialize, Serialize};

use crate::cards::{AnyCard, Artifact, Creature, Spell};

/// Cards available to play, kept per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub creatures: Vec<Creature>,
    pub spells: Vec<Spell>,
    pub artifacts: Vec<Artifact>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of cards across every kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len() + self.spells.len() + self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the first card named `name`, looking at creatures, then
    /// spells, then artifacts. Returns whether a card was removed.
    pub fn remove_first_named(&mut self, name: &str) -> bool {
        if let Some(i) = self.creatures.iter().position(|c| c.name() == name) {
            self.creatures.remove(i);
            return true;
        }
        if let Some(i) = self.spells.iter().position(|c| c.name() == name) {
            self.spells.remove(i);
            return true;
        }
        if let Some(i) = self.artifacts.iter().position(|c| c.name() == name) {
            self.artifacts.remove(i);
            return true;
        }
        false
    }

    /// Every card, creatures first, then spells, then artifacts.
    pub fn into_cards(self) -> impl Iterator<Item = AnyCard> {
        self.creatures
            .into_iter()
            .map(AnyCard::from)
            .chain(self.spells.into_iter().map(AnyCard::from))
            .chain(self.artifacts.into_iter().map(AnyCard::from))
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.creatures.clear();
        self.spells.clear();
        self.artifacts.clear();
    }
}
