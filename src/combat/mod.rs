//! Combat capabilities and damage resolution.
//!
//! Cards opt into behaviour by implementing capability traits rather than
//! inheriting it:
//!
//! - `Targetable`: has a name and health, can be damaged or buffed
//! - `Combatant`: can attack and defend (with a damage floor)
//! - `Spellcaster`: can cast spells and channel mana
//! - `Rankable`: has a win/loss record and a rating
//!
//! Whether a target can defend is resolved once, in `strike`, through
//! `Targetable::as_defender`. Callers never probe for capabilities.

pub mod capabilities;
pub mod report;
pub mod resolve;

pub use capabilities::{Combatant, Rankable, Spellcaster, Targetable};
pub use report::{
    AttackReport, CastReport, ChannelReport, CombatStats, CombatType, DefenseReport, MagicStats,
    RankInfo,
};
pub use resolve::{rating_for, resolve_defense, strike, DamageFloor, Strike, RATING_STEP, STARTING_RATING};
