//! Artifact cards: durability plus one activated ability.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CardError;
use crate::zones::Deck;

use super::card::{check_mana, Card, CardInfo, CardKind, CardSummary, PlayContext, PlayEffect, PlayOutcome, Rarity};
use super::creature::Creature;

/// Mana granted by a mana artifact.
pub const MANA_CRYSTAL_BONUS: u32 = 1;

/// The ability an artifact activates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactEffect {
    /// Grants bonus mana.
    Mana,
    /// Adds a goblin token to a deck.
    Goblin,
}

impl FromStr for ArtifactEffect {
    type Err = CardError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "mana" => Ok(ArtifactEffect::Mana),
            "goblin" => Ok(ArtifactEffect::Goblin),
            other => Err(CardError::UnknownArtifactEffect(other.to_string())),
        }
    }
}

impl fmt::Display for ArtifactEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArtifactEffect::Mana => "mana",
            ArtifactEffect::Goblin => "goblin",
        })
    }
}

/// An artifact.
///
/// Durability is recorded but no operation consumes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    info: CardInfo,
    durability: u32,
    effect: ArtifactEffect,
}

impl Artifact {
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        durability: i64,
        effect: ArtifactEffect,
    ) -> Result<Self, CardError> {
        let info = CardInfo::new(name, cost, rarity)?;
        let durability =
            u32::try_from(durability).map_err(|_| CardError::NegativeDurability(durability))?;
        Ok(Self { info, durability, effect })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    #[must_use]
    pub fn durability(&self) -> u32 {
        self.durability
    }

    #[must_use]
    pub fn effect(&self) -> ArtifactEffect {
        self.effect
    }

    /// Trigger the artifact's ability.
    ///
    /// Goblin artifacts need a deck to put the token into.
    pub fn activate_ability(&self, deck: Option<&mut Deck>) -> Result<PlayEffect, CardError> {
        match self.effect {
            ArtifactEffect::Mana => Ok(PlayEffect::ManaBonus(MANA_CRYSTAL_BONUS)),
            ArtifactEffect::Goblin => {
                let deck = deck.ok_or(CardError::MissingInput("deck"))?;
                let token = Creature::goblin_token();
                let name = token.name().to_string();
                deck.add_card(token);
                debug!(artifact = self.name(), token = %name, "token added to deck");
                Ok(PlayEffect::TokenCreated(name))
            }
        }
    }
}

impl Card for Artifact {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn kind(&self) -> CardKind {
        CardKind::Artifact
    }

    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError> {
        if let Some(refused) = check_mana(self, ctx)? {
            return Ok(refused);
        }
        let effect = self.activate_ability(ctx.deck.as_deref_mut())?;
        Ok(PlayOutcome::Played {
            card: self.name().to_string(),
            mana_used: self.cost(),
            effect,
        })
    }

    fn card_info(&self) -> CardSummary {
        CardSummary {
            durability: Some(self.durability),
            effect: Some(self.effect.to_string()),
            ..CardSummary::base(&self.info, CardKind::Artifact, &["Card"])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crown() -> Artifact {
        Artifact::new("Goblin Crown", 4, Rarity::Rare, 1, ArtifactEffect::Goblin).unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Artifact::new("Mana Crystal", 2, Rarity::Common, -1, ArtifactEffect::Mana),
            Err(CardError::NegativeDurability(-1))
        );
        assert!(Artifact::new("Mana Crystal", 2, Rarity::Common, 0, ArtifactEffect::Mana).is_ok());
        assert_eq!(
            "fire".parse::<ArtifactEffect>(),
            Err(CardError::UnknownArtifactEffect("fire".into()))
        );
    }

    #[test]
    fn test_mana_artifact() {
        let mut crystal =
            Artifact::new("Mana Crystal", 2, Rarity::Common, 1, ArtifactEffect::Mana).unwrap();
        let outcome = crystal.play(&mut PlayContext::new().with_mana(2)).unwrap();
        assert_eq!(
            outcome,
            PlayOutcome::Played {
                card: "Mana Crystal".into(),
                mana_used: 2,
                effect: PlayEffect::ManaBonus(MANA_CRYSTAL_BONUS),
            }
        );
    }

    #[test]
    fn test_goblin_artifact_adds_token() {
        let mut deck = Deck::new();
        let mut crown = crown();

        let outcome = crown
            .play(&mut PlayContext::new().with_mana(10).with_deck(&mut deck))
            .unwrap();

        assert!(matches!(
            outcome,
            PlayOutcome::Played { effect: PlayEffect::TokenCreated(ref name), .. } if name == "Goblin"
        ));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.deck_stats().creatures, 1);
    }

    #[test]
    fn test_goblin_artifact_requires_deck() {
        let mut crown = crown();
        assert_eq!(
            crown.play(&mut PlayContext::new().with_mana(10)),
            Err(CardError::MissingInput("deck"))
        );
    }
}
