//! Capability traits a card kind may implement.

use crate::core::CardError;

use super::report::{
    AttackReport, CastReport, ChannelReport, CombatStats, CombatType, DefenseReport, MagicStats,
    RankInfo,
};
use super::resolve::{strike, DamageFloor};

/// Anything that can be the target of an attack or a spell.
pub trait Targetable {
    /// Display name, used in reports.
    fn name(&self) -> &str;

    /// Current health. May be zero or negative once the entity is dead.
    fn health(&self) -> i64;

    /// Alive while health is strictly positive.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Subtract health without any defense.
    fn lose_health(&mut self, amount: i64);

    /// Add health.
    fn gain_health(&mut self, amount: i64);

    /// Change the attack stat. Saturates at 0.
    fn adjust_attack(&mut self, delta: i64);

    /// The defend capability, if this entity has one.
    fn as_defender(&mut self) -> Option<&mut dyn Combatant> {
        None
    }
}

/// Attack and defend capability.
pub trait Combatant: Targetable {
    /// Damage this combatant deals per attack.
    fn attack_power(&self) -> u32;

    /// Flat damage reduction applied by `defend`.
    fn defense(&self) -> u32;

    /// Minimum damage that always gets through `defend`.
    fn damage_floor(&self) -> DamageFloor;

    /// Apply an already validated amount of incoming damage.
    fn absorb(&mut self, incoming: u32) -> DefenseReport;

    /// Attack a target with this combatant's attack power.
    ///
    /// Damage is routed through the target's defense when it has one,
    /// otherwise it is subtracted from health directly.
    fn attack(&self, target: &mut dyn Targetable) -> AttackReport {
        let damage = self.attack_power();
        let outcome = strike(target, damage);
        AttackReport {
            attacker: self.name().to_string(),
            target: target.name().to_string(),
            damage,
            dealt: outcome.dealt(),
            combat_type: CombatType::Melee,
        }
    }

    /// Defend against incoming damage.
    ///
    /// Fails if `incoming` is negative. Damage taken is
    /// `max(floor, incoming - defense)`.
    fn defend(&mut self, incoming: i64) -> Result<DefenseReport, CardError> {
        let incoming = u32::try_from(incoming).map_err(|_| CardError::NegativeDamage(incoming))?;
        Ok(self.absorb(incoming))
    }

    /// Current combat numbers.
    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.attack_power(),
            defense: self.defense(),
            health: self.health(),
        }
    }
}

/// Spell casting capability.
pub trait Spellcaster {
    /// Cast a named spell on every target.
    fn cast_spell(&self, spell: &str, targets: &mut [&mut dyn Targetable]) -> CastReport;

    /// Channel mana into the caster's pool.
    fn channel_mana(&mut self, amount: u32) -> ChannelReport;

    /// Current magic numbers.
    fn magic_stats(&self) -> MagicStats;
}

/// Ranking capability.
pub trait Rankable {
    /// Recompute and store the rating from the cumulative record.
    fn calculate_rating(&mut self) -> u32;

    /// Add wins to the record.
    fn update_wins(&mut self, wins: u32);

    /// Add losses to the record.
    fn update_losses(&mut self, losses: u32);

    /// Rating and record.
    fn rank_info(&self) -> RankInfo;
}
