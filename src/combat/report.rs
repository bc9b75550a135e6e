//! Result records produced by combat operations.

use serde::{Deserialize, Serialize};

/// How an attack was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatType {
    Melee,
}

/// Outcome of `Combatant::attack`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: String,
    pub target: String,
    /// Damage the attack carried.
    pub damage: u32,
    /// Health the target actually lost after its defense.
    pub dealt: u32,
    pub combat_type: CombatType,
}

/// Outcome of `Combatant::defend`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseReport {
    pub defender: String,
    pub incoming: u32,
    pub damage_taken: u32,
    pub damage_blocked: u32,
    pub still_alive: bool,
}

/// Snapshot of a combatant's numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: u32,
    pub defense: u32,
    pub health: i64,
}

/// Outcome of `Spellcaster::cast_spell`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastReport {
    pub caster: String,
    pub spell: String,
    pub targets: Vec<String>,
    pub mana_used: u32,
}

/// Outcome of `Spellcaster::channel_mana`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channeled: u32,
    pub total_mana: u32,
}

/// Snapshot of a spellcaster's numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicStats {
    pub total_mana: u32,
    pub spell_power: u32,
}

/// Rating and record of a rankable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    pub rating: u32,
    pub wins: u32,
    pub losses: u32,
}
