//! Creature cards: attack and health.

use serde::{Deserialize, Serialize};

use crate::combat::{AttackReport, CombatType, Targetable};
use crate::core::CardError;

use super::card::{check_mana, Card, CardInfo, CardKind, CardSummary, PlayContext, PlayEffect, PlayOutcome, Rarity};

/// Name of the token summoned by goblin artifacts.
pub const GOBLIN_TOKEN_NAME: &str = "Goblin";

/// A creature.
///
/// Health is mutated by combat and may drop to zero or below; the
/// creature is then dead but stays wherever it is until its owner
/// removes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    info: CardInfo,
    attack: u32,
    health: i64,
}

impl Creature {
    /// Build a creature. Attack must be non-negative, health strictly
    /// positive.
    ///
    /// ```
    /// use datadeck::cards::{Creature, Rarity};
    ///
    /// let dragon = Creature::new("Fire Dragon", 5, Rarity::Legendary, 7, 5).unwrap();
    /// assert_eq!(dragon.attack_power(), 7);
    /// assert!(Creature::new("Ghost", 1, Rarity::Common, 1, 0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        attack: i64,
        health: i64,
    ) -> Result<Self, CardError> {
        let info = CardInfo::new(name, cost, rarity)?;
        if health <= 0 {
            return Err(CardError::NonPositiveHealth(health));
        }
        let attack = u32::try_from(attack).map_err(|_| CardError::NegativeAttack(attack))?;
        Ok(Self { info, attack, health })
    }

    /// 1/1 goblin token.
    pub(crate) fn goblin_token() -> Self {
        Self {
            info: CardInfo::token(GOBLIN_TOKEN_NAME, 1),
            attack: 1,
            health: 1,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    #[must_use]
    pub fn attack_power(&self) -> u32 {
        self.attack
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Hit a target for this creature's attack, ignoring any defense.
    pub fn attack_target(&self, target: &mut dyn Targetable) -> AttackReport {
        target.lose_health(i64::from(self.attack));
        AttackReport {
            attacker: self.name().to_string(),
            target: target.name().to_string(),
            damage: self.attack,
            dealt: self.attack,
            combat_type: CombatType::Melee,
        }
    }
}

impl Card for Creature {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn kind(&self) -> CardKind {
        CardKind::Creature
    }

    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError> {
        if let Some(refused) = check_mana(self, ctx)? {
            return Ok(refused);
        }
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
            ..CardSummary::base(&self.info, CardKind::Creature, &["Card"])
        }
    }
}

impl Targetable for Creature {
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
}

/// Apply a signed delta to an attack stat without going below 0.
pub(crate) fn saturating_attack(attack: u32, delta: i64) -> u32 {
    let adjusted = (i64::from(attack) + delta).max(0);
    u32::try_from(adjusted).unwrap_or(u32::MAX)
}
