//! Spell cards: one effect kind with a fixed magnitude.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::Targetable;
use crate::core::CardError;

use super::card::{check_mana, Card, CardInfo, CardKind, CardSummary, PlayContext, PlayEffect, PlayOutcome, Rarity};

/// Health moved by damage and heal spells.
pub const SPELL_MAGNITUDE: i64 = 3;

/// Attack moved by buff and debuff spells.
pub const ATTACK_MODIFIER: i64 = 1;

/// What a spell does to each of its targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellEffect {
    /// -3 health.
    Damage,
    /// +3 health.
    Heal,
    /// +1 attack.
    Buff,
    /// -1 attack, never below 0.
    Debuff,
}

impl SpellEffect {
    /// Apply this effect to one target.
    pub fn apply(self, target: &mut dyn Targetable) {
        match self {
            SpellEffect::Damage => target.lose_health(SPELL_MAGNITUDE),
            SpellEffect::Heal => target.gain_health(SPELL_MAGNITUDE),
            SpellEffect::Buff => target.adjust_attack(ATTACK_MODIFIER),
            SpellEffect::Debuff => target.adjust_attack(-ATTACK_MODIFIER),
        }
    }

    /// Card text for the effect.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            SpellEffect::Damage => "Deal 3 damage to target",
            SpellEffect::Heal => "Heal 3 health",
            SpellEffect::Buff => "Increase attack by 1",
            SpellEffect::Debuff => "Decrease attack of target by 1",
        }
    }
}

impl FromStr for SpellEffect {
    type Err = CardError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "damage" => Ok(SpellEffect::Damage),
            "heal" => Ok(SpellEffect::Heal),
            "buff" => Ok(SpellEffect::Buff),
            "debuff" => Ok(SpellEffect::Debuff),
            other => Err(CardError::UnknownSpellEffect(other.to_string())),
        }
    }
}

impl fmt::Display for SpellEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpellEffect::Damage => "damage",
            SpellEffect::Heal => "heal",
            SpellEffect::Buff => "buff",
            SpellEffect::Debuff => "debuff",
        };
        f.write_str(label)
    }
}

/// A spell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    info: CardInfo,
    effect: SpellEffect,
}

impl Spell {
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        effect: SpellEffect,
    ) -> Result<Self, CardError> {
        let info = CardInfo::new(name, cost, rarity)?;
        Ok(Self { info, effect })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    #[must_use]
    pub fn effect(&self) -> SpellEffect {
        self.effect
    }

    /// Apply the effect to every target, returning their names.
    pub fn resolve_effect(&self, targets: &mut [&mut dyn Targetable]) -> Vec<String> {
        targets
            .iter_mut()
            .map(|target| {
                self.effect.apply(&mut **target);
                target.name().to_string()
            })
            .collect()
    }
}

impl Card for Spell {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn kind(&self) -> CardKind {
        CardKind::Spell
    }

    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError> {
        if let Some(refused) = check_mana(self, ctx)? {
            return Ok(refused);
        }
        let targets = ctx.targets_mut()?;
        let affected = self.resolve_effect(targets);
        Ok(PlayOutcome::Played {
            card: self.name().to_string(),
            mana_used: self.cost(),
            effect: PlayEffect::SpellResolved {
                effect: self.effect,
                targets: affected,
            },
        })
    }

    fn card_info(&self) -> CardSummary {
        CardSummary {
            effect: Some(self.effect.to_string()),
            ..CardSummary::base(&self.info, CardKind::Spell, &["Card"])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Creature;

    fn rat() -> Creature {
        Creature::new("Rat", 2, Rarity::Common, 1, 4).unwrap()
    }

    #[test]
    fn test_effect_parsing() {
        assert_eq!("heal".parse::<SpellEffect>(), Ok(SpellEffect::Heal));
        assert_eq!(
            "explode".parse::<SpellEffect>(),
            Err(CardError::UnknownSpellEffect("explode".into()))
        );
    }

    #[test]
    fn test_each_effect_magnitude() {
        let mut target = rat();

        SpellEffect::Damage.apply(&mut target);
        assert_eq!(target.health(), 1);

        SpellEffect::Heal.apply(&mut target);
        assert_eq!(target.health(), 4);

        SpellEffect::Buff.apply(&mut target);
        assert_eq!(target.attack_power(), 2);

        SpellEffect::Debuff.apply(&mut target);
        SpellEffect::Debuff.apply(&mut target);
        SpellEffect::Debuff.apply(&mut target);
        assert_eq!(target.attack_power(), 0);
    }

    #[test]
    fn test_play_hits_all_targets() {
        let mut bolt = Spell::new("Lightning Bolt", 3, Rarity::Common, SpellEffect::Damage).unwrap();
        let mut a = rat();
        let mut b = Creature::new("Skeleton", 2, Rarity::Common, 3, 7).unwrap();

        let outcome = {
            let mut ctx = PlayContext::new()
                .with_mana(5)
                .with_targets(vec![&mut a, &mut b]);
            bolt.play(&mut ctx).unwrap()
        };

        assert_eq!(
            outcome,
            PlayOutcome::Played {
                card: "Lightning Bolt".into(),
                mana_used: 3,
                effect: PlayEffect::SpellResolved {
                    effect: SpellEffect::Damage,
                    targets: vec!["Rat".into(), "Skeleton".into()],
                },
            }
        );
        assert_eq!(a.health(), 1);
        assert_eq!(b.health(), 4);
    }

    #[test]
    fn test_play_requires_targets() {
        let mut bolt = Spell::new("Lightning Bolt", 3, Rarity::Common, SpellEffect::Damage).unwrap();
        let result = bolt.play(&mut PlayContext::new().with_mana(5));
        assert_eq!(result, Err(CardError::MissingInput("targets")));
    }

    #[test]
    fn test_unaffordable_spell_does_nothing() {
        let mut bolt = Spell::new("Lightning Bolt", 3, Rarity::Common, SpellEffect::Damage).unwrap();
        let mut a = rat();

        let outcome = {
            let mut ctx = PlayContext::new().with_mana(1).with_targets(vec![&mut a]);
            bolt.play(&mut ctx).unwrap()
        };

        assert!(!outcome.is_played());
        assert_eq!(a.health(), 4);
    }
}
