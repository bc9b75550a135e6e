//! Aggressive strategy: spend the whole hand on the weakest enemies.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cards::{Artifact, Card, Creature, Spell, SpellEffect, Unit, SPELL_MAGNITUDE};
use crate::combat::Targetable;
use crate::core::StrategyError;
use crate::zones::Hand;

use super::{GameStrategy, TurnReport};

/// Display name reported by the engine.
pub const AGGRESSIVE_STRATEGY_NAME: &str = "AggressiveStrategy";

/// Plays creatures before spells before artifacts, cheapest first, each
/// at the weakest target still alive.
///
/// Creatures hit for their attack and damage spells for 3, both as raw
/// health loss. Other cards are played for their cost and deal nothing.
/// The turn stops once every target is dead.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressiveStrategy;

impl AggressiveStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// A borrowed hand card.
#[derive(Clone, Copy)]
enum HandCard<'a> {
    Creature(&'a Creature),
    Spell(&'a Spell),
    Artifact(&'a Artifact),
}

impl<'a> HandCard<'a> {
    fn sort_key(self) -> (u8, u32) {
        match self {
            HandCard::Creature(c) => (0, c.cost()),
            HandCard::Spell(c) => (1, c.cost()),
            HandCard::Artifact(c) => (2, c.cost()),
        }
    }

    fn name(self) -> &'a str {
        match self {
            HandCard::Creature(c) => c.name(),
            HandCard::Spell(c) => c.name(),
            HandCard::Artifact(c) => c.name(),
        }
    }

    fn cost(self) -> u32 {
        self.sort_key().1
    }

    /// Hit `target` with raw damage, if this card deals any.
    fn strike(self, target: &mut Unit) -> Option<u32> {
        match self {
            HandCard::Creature(c) => Some(c.attack_target(target).dealt),
            HandCard::Spell(c) if c.effect() == SpellEffect::Damage => {
                target.lose_health(SPELL_MAGNITUDE);
                Some(SPELL_MAGNITUDE.unsigned_abs() as u32)
            }
            HandCard::Spell(_) | HandCard::Artifact(_) => None,
        }
    }
}

fn flatten(hand: &Hand) -> Vec<HandCard<'_>> {
    hand.creatures
        .iter()
        .map(HandCard::Creature)
        .chain(hand.spells.iter().map(HandCard::Spell))
        .chain(hand.artifacts.iter().map(HandCard::Artifact))
        .collect()
}

impl GameStrategy for AggressiveStrategy {
    fn name(&self) -> &str {
        AGGRESSIVE_STRATEGY_NAME
    }

    fn execute_turn(
        &self,
        hand: &Hand,
        battlefield: &mut [Unit],
    ) -> Result<TurnReport, StrategyError> {
        let mut cards = flatten(hand);
        if cards.is_empty() || battlefield.is_empty() {
            return Ok(TurnReport::empty());
        }

        let targets = self.prioritize_targets(battlefield);
        cards.sort_by_key(|card| card.sort_key());

        let mut report = TurnReport::empty();
        let mut hit: FxHashSet<String> = FxHashSet::default();
        let mut cursor = 0;

        for card in cards {
            while cursor < targets.len() && !battlefield[targets[cursor]].is_alive() {
                cursor += 1;
            }
            let Some(&index) = targets.get(cursor) else {
                break;
            };

            report.cards_played.push(card.name().to_string());
            report.mana_used += card.cost();

            let target = &mut battlefield[index];
            if let Some(damage) = card.strike(target) {
                report.damage_dealt += u64::from(damage);
                let name = target.name();
                if !hit.contains(name) {
                    hit.insert(name.to_string());
                    report.targets_attacked.push(name.to_string());
                }
            }
        }

        debug!(
            played = report.cards_played.len(),
            mana = report.mana_used,
            damage = report.damage_dealt,
            "aggressive turn executed"
        );
        Ok(report)
    }

    /// Weakest first. Ties keep battlefield order.
    fn prioritize_targets(&self, battlefield: &[Unit]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..battlefield.len()).collect();
        order.sort_by_key(|&i| battlefield[i].health());
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ArtifactEffect, Rarity};

    fn creature(name: &str, cost: i64, attack: i64, health: i64) -> Creature {
        Creature::new(name, cost, Rarity::Common, attack, health).unwrap()
    }

    fn enemy(name: &str, health: i64) -> Unit {
        creature(name, 1, 1, health).into()
    }

    #[test]
    fn test_empty_inputs() {
        let strategy = AggressiveStrategy::new();
        let hand = Hand {
            creatures: vec![creature("Rat", 2, 1, 3)],
            ..Hand::default()
        };
        assert_eq!(strategy.execute_turn(&hand, &mut []).unwrap(), TurnReport::empty());

        let mut field = vec![enemy("Orc", 3)];
        assert_eq!(
            strategy.execute_turn(&Hand::new(), &mut field).unwrap(),
            TurnReport::empty()
        );
        assert_eq!(field[0].health(), 3);
    }

    #[test]
    fn test_play_order_and_targeting() {
        let strategy = AggressiveStrategy::new();
        let hand = Hand {
            creatures: vec![creature("Troll", 6, 6, 7), creature("Rat", 2, 1, 3)],
            spells: vec![Spell::new("Fireball", 3, Rarity::Common, SpellEffect::Damage).unwrap()],
            artifacts: vec![Artifact::new("Mana", 7, Rarity::Rare, 1, ArtifactEffect::Mana).unwrap()],
        };
        let mut field = vec![enemy("Ogre", 20), enemy("Imp", 1)];

        let report = strategy.execute_turn(&hand, &mut field).unwrap();

        // Rat kills Imp, the rest goes into Ogre.
        assert_eq!(report.cards_played, vec!["Rat", "Troll", "Fireball", "Mana"]);
        assert_eq!(report.mana_used, 18);
        assert_eq!(report.damage_dealt, 10);
        assert_eq!(report.targets_attacked.as_slice(), &["Imp".to_string(), "Ogre".to_string()]);
        assert_eq!(field[0].health(), 11);
        assert_eq!(field[1].health(), 0);
    }

    #[test]
    fn test_stops_when_targets_exhausted() {
        let strategy = AggressiveStrategy::new();
        let hand = Hand {
            creatures: vec![creature("Dragon", 8, 7, 12), creature("Goblin", 4, 3, 6)],
            ..Hand::default()
        };
        let mut field = vec![enemy("Imp", 2)];

        let report = strategy.execute_turn(&hand, &mut field).unwrap();

        assert_eq!(report.cards_played, vec!["Goblin"]);
        assert_eq!(report.damage_dealt, 3);
    }

    #[test]
    fn test_skips_dead_targets() {
        let strategy = AggressiveStrategy::new();
        let hand = Hand {
            creatures: vec![creature("Rat", 2, 1, 3)],
            ..Hand::default()
        };
        let mut field = vec![enemy("Ghost", 5), enemy("Imp", 4)];
        field[0].lose_health(10);

        let report = strategy.execute_turn(&hand, &mut field).unwrap();

        assert_eq!(report.targets_attacked.as_slice(), &["Imp".to_string()]);
        assert_eq!(field[1].health(), 3);
    }

    #[test]
    fn test_targets_listed_once_per_name() {
        let strategy = AggressiveStrategy::new();
        let hand = Hand {
            creatures: vec![creature("Troll", 6, 6, 7), creature("Rat", 2, 1, 3)],
            ..Hand::default()
        };
        let mut field = vec![enemy("Orc", 1), enemy("Orc", 9)];

        let report = strategy.execute_turn(&hand, &mut field).unwrap();

        // Rat kills the first Orc, Troll hits the second.
        assert_eq!(report.cards_played, vec!["Rat", "Troll"]);
        assert_eq!(report.targets_attacked.as_slice(), &["Orc".to_string()]);
        assert_eq!(field[0].health(), 0);
        assert_eq!(field[1].health(), 3);
    }

    #[test]
    fn test_priority_is_stable() {
        let field = vec![enemy("A", 4), enemy("B", 2), enemy("C", 4), enemy("D", 1)];
        assert_eq!(AggressiveStrategy.prioritize_targets(&field), vec![3, 1, 0, 2]);
    }
}
