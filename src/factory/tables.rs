//! Stat tables backing the card factories.
//!
//! Each table maps a card name to its fixed stats and remembers the
//! order names were registered in, so random picks are reproducible
//! for a given random source.

use rustc_hash::FxHashMap;

use crate::cards::{ArtifactEffect, Rarity, SpellEffect};

/// Stats of a creature table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureStats {
    pub cost: u32,
    pub rarity: Rarity,
    pub attack: u32,
    pub health: i64,
}

/// Stats of a spell table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellStats {
    pub cost: u32,
    pub rarity: Rarity,
    pub effect: SpellEffect,
}

/// Stats of an artifact table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactStats {
    pub cost: u32,
    pub rarity: Rarity,
    pub durability: u32,
    pub effect: ArtifactEffect,
}

impl Default for CreatureStats {
    fn default() -> Self {
        Self {
            cost: 1,
            rarity: Rarity::Common,
            attack: 1,
            health: 1,
        }
    }
}

impl Default for SpellStats {
    fn default() -> Self {
        Self {
            cost: 1,
            rarity: Rarity::Common,
            effect: SpellEffect::Damage,
        }
    }
}

impl Default for ArtifactStats {
    fn default() -> Self {
        Self {
            cost: 1,
            rarity: Rarity::Common,
            durability: 1,
            effect: ArtifactEffect::Mana,
        }
    }
}

/// Name-keyed stat lookup.
///
/// ```
/// use datadeck::factory::{CreatureStats, StatTable};
///
/// let mut table = StatTable::new();
/// table.register("Rat", CreatureStats { attack: 1, health: 3, ..CreatureStats::default() });
///
/// assert_eq!(table.get("Rat").map(|s| s.health), Some(3));
/// assert_eq!(table.lookup("Gremlin"), CreatureStats::default());
/// ```
#[derive(Clone, Debug)]
pub struct StatTable<S> {
    stats: FxHashMap<&'static str, S>,
    names: Vec<&'static str>,
}

impl<S> Default for StatTable<S> {
    fn default() -> Self {
        Self {
            stats: FxHashMap::default(),
            names: Vec::new(),
        }
    }
}

impl<S: Clone + Default> StatTable<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry. Re-registering a name replaces its stats but
    /// keeps its original position.
    pub fn register(&mut self, name: &'static str, stats: S) {
        if self.stats.insert(name, stats).is_none() {
            self.names.push(name);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&S> {
        self.stats.get(name)
    }

    /// Stats for `name`, or the minimal default for an unknown name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> S {
        self.get(name).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.stats.contains_key(name)
    }

    /// Names in registration order.
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn creature(cost: u32, rarity: Rarity, attack: u32, health: i64) -> CreatureStats {
    CreatureStats { cost, rarity, attack, health }
}

fn spell(cost: u32, rarity: Rarity, effect: SpellEffect) -> SpellStats {
    SpellStats { cost, rarity, effect }
}

/// The fantasy creature roster.
#[must_use]
pub fn fantasy_creatures() -> StatTable<CreatureStats> {
    let mut table = StatTable::new();
    table.register("Dragon", creature(8, Rarity::Legendary, 7, 12));
    table.register("Goblin", creature(4, Rarity::Common, 3, 6));
    table.register("Rat", creature(2, Rarity::Common, 1, 3));
    table.register("Skeleton", creature(4, Rarity::Uncommon, 4, 5));
    table.register("Zombie", creature(3, Rarity::Common, 1, 5));
    table.register("Worm", creature(1, Rarity::Common, 1, 1));
    table.register("Troll", creature(6, Rarity::Rare, 6, 7));
    table.register("Licorn", creature(5, Rarity::Epic, 2, 15));
    table.register("Clown", creature(5, Rarity::Rare, 5, 5));
    table.register("Vampire", creature(12, Rarity::Legendary, 4, 16));
    table.register("The Doom Slayer", creature(25, Rarity::Unique, 66, 66));
    table
}

/// The fantasy spell book.
#[must_use]
pub fn fantasy_spells() -> StatTable<SpellStats> {
    let mut table = StatTable::new();
    table.register("Fireball", spell(3, Rarity::Common, SpellEffect::Damage));
    table.register("Lightning Bolt", spell(4, Rarity::Rare, SpellEffect::Damage));
    table.register("Nuclear Bomb", spell(7, Rarity::Legendary, SpellEffect::Damage));
    table.register("Freeze", spell(3, Rarity::Uncommon, SpellEffect::Debuff));
    table.register("Magic Missile", spell(2, Rarity::Uncommon, SpellEffect::Damage));
    table.register("Demon Invokation", spell(6, Rarity::Legendary, SpellEffect::Damage));
    table.register("Heal Potion", spell(2, Rarity::Common, SpellEffect::Heal));
    table.register("Grandma's Cookie", spell(3, Rarity::Common, SpellEffect::Heal));
    table
}

/// The fantasy artifacts.
#[must_use]
pub fn fantasy_artifacts() -> StatTable<ArtifactStats> {
    let mut table = StatTable::new();
    table.register(
        "Mana",
        ArtifactStats {
            cost: 7,
            rarity: Rarity::Rare,
            durability: 1,
            effect: ArtifactEffect::Mana,
        },
    );
    table.register(
        "Goblin's Crown",
        ArtifactStats {
            cost: 7,
            rarity: Rarity::Legendary,
            durability: 1,
            effect: ArtifactEffect::Goblin,
        },
    );
    table
}
