//! Elite cards: a card that is both a combatant and a spellcaster.

use serde::{Deserialize, Serialize};

use crate::combat::{
    resolve_defense, strike, CastReport, ChannelReport, Combatant, DamageFloor, DefenseReport,
    MagicStats, Spellcaster, Targetable,
};
use crate::core::CardError;

use super::card::{check_mana, Card, CardInfo, CardKind, CardSummary, PlayContext, PlayEffect, PlayOutcome, Rarity};
use super::creature::saturating_attack;

/// Mana an elite starts with.
pub const ELITE_MANA_POOL: u32 = 7;

/// Damage dealt to each target by `cast_spell`.
pub const CAST_SPELL_DAMAGE: u32 = 3;

/// Mana reported as spent by `cast_spell`.
pub const CAST_SPELL_COST: u32 = 4;

/// An elite card.
///
/// Defends with the basic damage floor: enough defense blocks a hit
/// completely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteCard {
    info: CardInfo,
    attack: u32,
    health: i64,
    defense: u32,
    mana: u32,
}

impl EliteCard {
    /// ```
    /// use datadeck::cards::{EliteCard, Rarity};
    ///
    /// let warrior = EliteCard::new("Arcane Warrior", 6, Rarity::Common, 5, 42, 3).unwrap();
    /// assert_eq!(warrior.defense(), 3);
    /// ```
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        attack: i64,
        health: i64,
        defense: i64,
    ) -> Result<Self, CardError> {
        let info = CardInfo::new(name, cost, rarity)?;
        if health <= 0 {
            return Err(CardError::NonPositiveHealth(health));
        }
        let attack = u32::try_from(attack).map_err(|_| CardError::NegativeAttack(attack))?;
        let defense = u32::try_from(defense).map_err(|_| CardError::NegativeDefense(defense))?;
        Ok(Self {
            info,
            attack,
            health,
            defense,
            mana: ELITE_MANA_POOL,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }
}

impl Card for EliteCard {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn kind(&self) -> CardKind {
        CardKind::Elite
    }

    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError> {
        if let Some(refused) = check_mana(self, ctx)? {
            return Ok(refused);
        }
        ctx.targets_mut()?;
        Ok(PlayOutcome::Played {
            card: self.name().to_string(),
            mana_used: self.cost(),
            effect: PlayEffect::Summoned,
        })
    }

    fn card_info(&self) -> CardSummary {
        CardSummary {
            attack: Some(self.attack),
            health: Some(self.health),
            defense: Some(self.defense),
            ..CardSummary::base(
                &self.info,
                CardKind::Elite,
                &["Card", "Combatant", "Spellcaster"],
            )
        }
    }
}

impl Targetable for EliteCard {
    fn name(&self) -> &str {
        self.info.name()
    }

    fn health(&self) -> i64 {
        self.health
    }

    fn lose_health(&mut self, amount: i64) {
        self.health -= amount;
    }

    fn gain_health(&mut self, amount: i64) {
        self.health += amount;
    }

    fn adjust_attack(&mut self, delta: i64) {
        self.attack = saturating_attack(self.attack, delta);
    }

    fn as_defender(&mut self) -> Option<&mut dyn Combatant> {
        Some(self)
    }
}

impl Combatant for EliteCard {
    fn attack_power(&self) -> u32 {
        self.attack
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn damage_floor(&self) -> DamageFloor {
        DamageFloor::Basic
    }

    fn absorb(&mut self, incoming: u32) -> DefenseReport {
        let floor = self.damage_floor();
        resolve_defense(self.info.name(), &mut self.health, self.defense, floor, incoming)
    }
}

impl Spellcaster for EliteCard {
    fn cast_spell(&self, spell: &str, targets: &mut [&mut dyn Targetable]) -> CastReport {
        let names = targets
            .iter_mut()
            .map(|target| {
                strike(&mut **target, CAST_SPELL_DAMAGE);
                target.name().to_string()
            })
            .collect();
        CastReport {
            caster: self.name().to_string(),
            spell: spell.to_string(),
            targets: names,
            mana_used: CAST_SPELL_COST,
        }
    }

    fn channel_mana(&mut self, amount: u32) -> ChannelReport {
        self.mana = self.mana.saturating_add(amount);
        ChannelReport {
            channeled: amount,
            total_mana: self.mana,
        }
    }

    fn magic_stats(&self) -> MagicStats {
        MagicStats {
            total_mana: self.mana,
            spell_power: CAST_SPELL_DAMAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Creature;

    fn warrior() -> EliteCard {
        EliteCard::new("Arcane Warrior", 6, Rarity::Common, 5, 42, 3).unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            EliteCard::new("X", 1, Rarity::Common, 1, 5, -2),
            Err(CardError::NegativeDefense(-2))
        );
        assert_eq!(
            EliteCard::new("X", 1, Rarity::Common, -1, 5, 2),
            Err(CardError::NegativeAttack(-1))
        );
        assert_eq!(
            EliteCard::new("X", 1, Rarity::Common, 1, -5, 2),
            Err(CardError::NonPositiveHealth(-5))
        );
    }

    #[test]
    fn test_attack_unarmored_creature() {
        let warrior = warrior();
        let mut goblin = Creature::new("Goblin", 2, Rarity::Common, 4, 10).unwrap();

        let report = warrior.attack(&mut goblin);

        assert_eq!(report.damage, 5);
        assert_eq!(report.dealt, 5);
        assert_eq!(goblin.health(), 5);
    }

    #[test]
    fn test_attack_routes_through_defense() {
        let attacker = warrior();
        let mut defender = EliteCard::new("Shield Bearer", 4, Rarity::Rare, 2, 20, 3).unwrap();

        let report = attacker.attack(&mut defender);

        assert_eq!(report.dealt, 2);
        assert_eq!(defender.health(), 18);
    }

    #[test]
    fn test_basic_defense_can_block_fully() {
        let mut warrior = warrior();
        let report = warrior.defend(2).unwrap();
        assert_eq!(report.damage_taken, 0);
        assert_eq!(warrior.health(), 42);
        assert!(report.still_alive);

        assert_eq!(warrior.defend(-1), Err(CardError::NegativeDamage(-1)));
    }

    #[test]
    fn test_cast_spell_hits_every_target() {
        let warrior = warrior();
        let mut goblin = Creature::new("Goblin", 2, Rarity::Common, 4, 10).unwrap();
        let mut rat = Creature::new("Rat", 2, Rarity::Common, 1, 4).unwrap();

        let report = {
            let mut targets: [&mut dyn Targetable; 2] = [&mut goblin, &mut rat];
            warrior.cast_spell("Fireball", &mut targets)
        };

        assert_eq!(report.targets, vec!["Goblin".to_string(), "Rat".to_string()]);
        assert_eq!(report.mana_used, CAST_SPELL_COST);
        assert_eq!(goblin.health(), 7);
        assert_eq!(rat.health(), 1);
    }

    #[test]
    fn test_channel_mana_grows_pool() {
        let mut warrior = warrior();
        let report = warrior.channel_mana(3);
        assert_eq!(report, ChannelReport { channeled: 3, total_mana: 10 });
        assert_eq!(warrior.magic_stats().total_mana, 10);
    }

    #[test]
    fn test_play_requires_targets() {
        let mut warrior = warrior();
        assert_eq!(
            warrior.play(&mut PlayContext::new().with_mana(10)),
            Err(CardError::MissingInput("targets"))
        );

        let outcome = warrior
            .play(&mut PlayContext::new().with_mana(10).with_targets(Vec::new()))
            .unwrap();
        assert!(outcome.is_played());
    }

    #[test]
    fn test_card_info_lists_interfaces() {
        let info = warrior().card_info();
        assert_eq!(info.kind, CardKind::Elite);
        assert_eq!(info.interfaces, vec!["Card", "Combatant", "Spellcaster"]);
        assert_eq!(info.defense, Some(3));
    }
}
