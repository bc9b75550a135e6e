//! Error types.
//!
//! Only genuine failures live here. Expected negative outcomes (an empty
//! deck, an unaffordable card, a card that is not in the deck) are plain
//! values returned by the operations themselves.

use thiserror::Error;

/// A card could not be constructed or played.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card name must not be empty")]
    EmptyName,

    #[error("tournament id must not be empty")]
    EmptyId,

    #[error("cost must be a non-negative integer, got {0}")]
    NegativeCost(i64),

    #[error("health must be strictly positive, got {0}")]
    NonPositiveHealth(i64),

    #[error("attack must be non-negative, got {0}")]
    NegativeAttack(i64),

    #[error("defense must be non-negative, got {0}")]
    NegativeDefense(i64),

    #[error("durability must be non-negative, got {0}")]
    NegativeDurability(i64),

    #[error("rarity label must not be empty")]
    InvalidRarity,

    #[error("`{0}` is not a valid spell effect")]
    UnknownSpellEffect(String),

    #[error("`{0}` is not a valid artifact effect")]
    UnknownArtifactEffect(String),

    /// A required key of the play context was not supplied.
    #[error("required input `{0}` is missing")]
    MissingInput(&'static str),

    #[error("incoming damage must be non-negative, got {0}")]
    NegativeDamage(i64),
}

/// A strategy could not complete its turn.
///
/// The engine converts these into an empty turn report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("battlefield entry `{0}` cannot be targeted")]
    InvalidTarget(String),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error("strategy failed: {0}")]
    Other(String),
}

/// The tournament roster rejected a membership change.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("`{name}` is not a tournament card")]
    NotTournamentCard { name: String },

    #[error("a card with id `{0}` is already registered")]
    DuplicateId(String),

    #[error("no card with id `{0}` is registered")]
    NotRegistered(String),
}

/// A match could not be scheduled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("no cards are registered")]
    EmptyRoster,

    #[error("card id `{0}` is not registered")]
    UnknownCard(String),

    #[error("card `{0}` cannot be matched against itself")]
    SelfMatch(String),
}
