//! # datadeck
//!
//! A small card-combat and tournament simulation engine.
//!
//! ## Design Principles
//!
//! 1. **Capabilities, not hierarchies**: A card kind implements the
//!    capability traits it has (`Combatant`, `Spellcaster`, `Rankable`).
//!    Whether a target can defend is resolved once, where damage lands.
//!
//! 2. **Injectable randomness**: Shuffles and themed decks take a
//!    `RandomSource`, so tests can seed or script every draw.
//!
//! 3. **Negative outcomes are values**: An empty draw, an unaffordable
//!    card or a failed strategy are returned, not raised. Errors are
//!    reserved for invalid input.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, error types
//! - `combat`: Capability traits and damage resolution
//! - `cards`: Card contract and the concrete card kinds
//! - `zones`: Deck, hand and battlefield
//! - `factory`: Table-driven card factories and themed decks
//! - `strategy`: Turn strategies
//! - `engine`: Turn-by-turn game sessions
//! - `tournament`: Matches, ratings and leaderboards

pub mod core;
pub mod combat;
pub mod cards;
pub mod zones;
pub mod factory;
pub mod strategy;
pub mod engine;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    CardError, GameRng, GameRngState, MatchError, RandomSource, RegistrationError, ScriptedRng,
    SimulationConfig, StrategyError,
};

pub use crate::combat::{Combatant, DamageFloor, Rankable, Spellcaster, Targetable};

pub use crate::cards::{
    AnyCard, Artifact, ArtifactEffect, Card, CardInfo, CardKind, CardSummary, Creature, EliteCard,
    PlayContext, PlayEffect, PlayOutcome, Rarity, Spell, SpellEffect, TournamentCard, Unit,
};

pub use crate::zones::{Battlefield, Deck, DeckStats, Hand};

pub use crate::factory::{CardFactory, FantasyCardFactory, SupportedTypes};

pub use crate::strategy::{AggressiveStrategy, GameStrategy, TurnReport};

pub use crate::engine::{EngineStatus, GameEngine, TurnOutcome};

pub use crate::tournament::{MatchResult, PlatformStatus, TournamentPlatform, TournamentReport};
