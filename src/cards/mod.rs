//! Card kinds and the common card contract.
//!
//! ## Key Types
//!
//! - `CardInfo`: Validated identity (name, cost, rarity)
//! - `Card`: Contract every kind implements (`play`, `card_info`, ...)
//! - `Creature`, `Spell`, `Artifact`: Basic kinds
//! - `EliteCard`: Combatant and spellcaster
//! - `TournamentCard`: Combatant with a record and a rating
//! - `AnyCard`: Any kind, for decks and hands
//! - `Unit`: Battlefield kinds, targetable by attacks and spells

pub mod any;
pub mod artifact;
pub mod card;
pub mod creature;
pub mod elite;
pub mod spell;
pub mod tournament;

pub use any::{AnyCard, Unit};
pub use artifact::{Artifact, ArtifactEffect, MANA_CRYSTAL_BONUS};
pub use card::{Card, CardInfo, CardKind, CardSummary, PlayContext, PlayEffect, PlayOutcome, Rarity};
pub use creature::{Creature, GOBLIN_TOKEN_NAME};
pub use elite::{EliteCard, CAST_SPELL_COST, CAST_SPELL_DAMAGE, ELITE_MANA_POOL};
pub use spell::{Spell, SpellEffect, ATTACK_MODIFIER, SPELL_MAGNITUDE};
pub use tournament::{TournamentCard, TournamentRecord};
