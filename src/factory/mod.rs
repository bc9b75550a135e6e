//! Card factories.
//!
//! A `CardFactory` builds cards by name from fixed stat tables and
//! composes themed decks. Unknown names are not an error: they get the
//! minimal default stats (cost 1, common).
//!
//! ## Key Types
//!
//! - `CardFactory`: Object-safe factory contract held by the engine
//! - `FantasyCardFactory`: Factory over the fantasy tables
//! - `StatTable`: Name-keyed stat lookup
//! - `SupportedTypes`: Names a factory knows, per kind

pub mod fantasy;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::cards::{Artifact, Creature, Spell};
use crate::core::{CardError, RandomSource};
use crate::zones::Hand;

pub use fantasy::FantasyCardFactory;
pub use tables::{ArtifactStats, CreatureStats, SpellStats, StatTable};

/// Card names a factory knows, per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypes {
    pub creatures: Vec<String>,
    pub spells: Vec<String>,
    pub artifacts: Vec<String>,
}

/// Builds cards by name and composes themed decks.
pub trait CardFactory {
    /// Build a creature. Fails only if `name` is empty.
    fn create_creature(&mut self, name: &str) -> Result<Creature, CardError>;

    /// Build a spell. Fails only if `name` is empty.
    fn create_spell(&mut self, name: &str) -> Result<Spell, CardError>;

    /// Build an artifact. Fails only if `name` is empty.
    fn create_artifact(&mut self, name: &str) -> Result<Artifact, CardError>;

    /// Compose a random deck of roughly `size` cards.
    ///
    /// Sizes 1 and 2 are all creatures. From 3 up, at least two cards
    /// are creatures and at most one is an artifact.
    fn create_themed_deck(
        &mut self,
        size: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Hand, CardError>;

    /// Names this factory knows, per kind.
    fn supported_types(&self) -> SupportedTypes;

    /// Number of cards built so far.
    fn cards_created(&self) -> usize;
}
