//! The fantasy card factory.

use tracing::debug;

use crate::cards::{Artifact, Creature, Spell};
use crate::core::{choose, CardError, RandomSource};
use crate::zones::Hand;

use super::tables::{
    fantasy_artifacts, fantasy_creatures, fantasy_spells, ArtifactStats, CreatureStats, SpellStats,
    StatTable,
};
use super::{CardFactory, SupportedTypes};

/// Factory over the fantasy stat tables.
///
/// ```
/// use datadeck::core::GameRng;
/// use datadeck::factory::{CardFactory, FantasyCardFactory};
///
/// let mut factory = FantasyCardFactory::new();
/// let dragon = factory.create_creature("Dragon").unwrap();
/// assert_eq!((dragon.attack_power(), dragon.health()), (7, 12));
///
/// let mut rng = GameRng::new(7);
/// let hand = factory.create_themed_deck(2, &mut rng).unwrap();
/// assert_eq!(hand.creatures.len(), 2);
/// assert_eq!(factory.cards_created(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct FantasyCardFactory {
    creatures: StatTable<CreatureStats>,
    spells: StatTable<SpellStats>,
    artifacts: StatTable<ArtifactStats>,
    created: usize,
}

impl Default for FantasyCardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FantasyCardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            creatures: fantasy_creatures(),
            spells: fantasy_spells(),
            artifacts: fantasy_artifacts(),
            created: 0,
        }
    }

    fn random_creature(&mut self, rng: &mut dyn RandomSource) -> Result<Creature, CardError> {
        let name = random_name(&self.creatures, rng);
        self.create_creature(name)
    }

    fn random_spell(&mut self, rng: &mut dyn RandomSource) -> Result<Spell, CardError> {
        let name = random_name(&self.spells, rng);
        self.create_spell(name)
    }

    fn random_artifact(&mut self, rng: &mut dyn RandomSource) -> Result<Artifact, CardError> {
        let name = random_name(&self.artifacts, rng);
        self.create_artifact(name)
    }
}

/// An empty table yields an empty name, which construction rejects.
fn random_name<S: Clone + Default>(table: &StatTable<S>, rng: &mut dyn RandomSource) -> &'static str {
    choose(rng, table.names()).copied().unwrap_or_default()
}

impl CardFactory for FantasyCardFactory {
    fn create_creature(&mut self, name: &str) -> Result<Creature, CardError> {
        let stats = self.creatures.lookup(name);
        let card = Creature::new(
            name,
            i64::from(stats.cost),
            stats.rarity,
            i64::from(stats.attack),
            stats.health,
        )?;
        self.created += 1;
        debug!(card = name, kind = "creature", "card created");
        Ok(card)
    }

    fn create_spell(&mut self, name: &str) -> Result<Spell, CardError> {
        let stats = self.spells.lookup(name);
        let card = Spell::new(name, i64::from(stats.cost), stats.rarity, stats.effect)?;
        self.created += 1;
        debug!(card = name, kind = "spell", "card created");
        Ok(card)
    }

    fn create_artifact(&mut self, name: &str) -> Result<Artifact, CardError> {
        let stats = self.artifacts.lookup(name);
        let card = Artifact::new(
            name,
            i64::from(stats.cost),
            stats.rarity,
            i64::from(stats.durability),
            stats.effect,
        )?;
        self.created += 1;
        debug!(card = name, kind = "artifact", "card created");
        Ok(card)
    }

    /// For `size >= 3` the creature count is drawn from `2..=size`, the
    /// spell count from `1..=rest`. If anything is left after that, one
    /// artifact is added and every leftover slot becomes another
    /// creature, so such a deck holds `size + 1` cards.
    fn create_themed_deck(
        &mut self,
        size: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Hand, CardError> {
        let mut hand = Hand::new();
        if size < 3 {
            for _ in 0..size {
                hand.creatures.push(self.random_creature(rng)?);
            }
            return Ok(hand);
        }

        let creature_count = rng.range_inclusive(2, size);
        for _ in 0..creature_count {
            hand.creatures.push(self.random_creature(rng)?);
        }

        let spell_budget = size - creature_count;
        if spell_budget == 0 {
            return Ok(hand);
        }
        let spell_count = rng.range_inclusive(1, spell_budget);
        for _ in 0..spell_count {
            hand.spells.push(self.random_spell(rng)?);
        }

        let artifact_budget = spell_budget - spell_count;
        if artifact_budget >= 1 {
            hand.artifacts.push(self.random_artifact(rng)?);
            for _ in 0..artifact_budget {
                hand.creatures.push(self.random_creature(rng)?);
            }
        }

        debug!(
            size,
            creatures = hand.creatures.len(),
            spells = hand.spells.len(),
            artifacts = hand.artifacts.len(),
            "themed deck composed"
        );
        Ok(hand)
    }

    fn supported_types(&self) -> SupportedTypes {
        let owned =
            |names: &[&str]| -> Vec<String> { names.iter().map(|n| n.to_string()).collect() };
        SupportedTypes {
            creatures: owned(self.creatures.names()),
            spells: owned(self.spells.names()),
            artifacts: owned(self.artifacts.names()),
        }
    }

    fn cards_created(&self) -> usize {
        self.created
    }
}
