//! The common card contract.
//!
//! Every card kind carries a validated `CardInfo` (name, cost, rarity)
//! and implements `Card`. What a card does when played is kind-specific
//! and driven by a `PlayContext` holding the inputs that kind needs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::{DefenseReport, Targetable};
use crate::core::CardError;
use crate::zones::Deck;

use super::spell::SpellEffect;

/// Card rarity.
///
/// The well-known tiers have their own variants; any other non-empty
/// label is kept verbatim as `Custom`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Unique,
    Custom(String),
}

impl FromStr for Rarity {
    type Err = CardError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        let rarity = match label.to_ascii_lowercase().as_str() {
            "" => return Err(CardError::InvalidRarity),
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            "unique" => Rarity::Unique,
            _ => Rarity::Custom(label.to_string()),
        };
        Ok(rarity)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unique => "Unique",
            Rarity::Custom(label) => label,
        };
        f.write_str(label)
    }
}

/// Kind tag of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Creature,
    Spell,
    Artifact,
    Elite,
    Tournament,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardKind::Creature => "Creature",
            CardKind::Spell => "Spell",
            CardKind::Artifact => "Artifact",
            CardKind::Elite => "Elite",
            CardKind::Tournament => "Tournament",
        };
        f.write_str(label)
    }
}

/// Identity fields shared by every card.
///
/// Validated once at construction and never re-checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInfo {
    name: String,
    cost: u32,
    rarity: Rarity,
}

impl CardInfo {
    /// Validate and build card identity.
    ///
    /// ```
    /// use datadeck::cards::{CardInfo, Rarity};
    ///
    /// assert!(CardInfo::new("Fire Dragon", 5, Rarity::Legendary).is_ok());
    /// assert!(CardInfo::new("Fire Dragon", -1, Rarity::Legendary).is_err());
    /// ```
    pub fn new(name: impl Into<String>, cost: i64, rarity: Rarity) -> Result<Self, CardError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CardError::EmptyName);
        }
        let cost = u32::try_from(cost).map_err(|_| CardError::NegativeCost(cost))?;
        if let Rarity::Custom(label) = &rarity {
            if label.trim().is_empty() {
                return Err(CardError::InvalidRarity);
            }
        }
        Ok(Self { name, cost, rarity })
    }

    /// Identity for a card the engine creates itself.
    pub(crate) fn token(name: &str, cost: u32) -> Self {
        Self {
            name: name.to_string(),
            cost,
            rarity: Rarity::Common,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[must_use]
    pub fn rarity(&self) -> &Rarity {
        &self.rarity
    }
}

/// Inputs a card may read when played.
///
/// Each kind reads only the keys it needs; a needed key that is `None`
/// fails the play with `CardError::MissingInput`.
#[derive(Default)]
pub struct PlayContext<'a> {
    /// Mana available to pay the card's cost.
    pub mana_left: Option<i64>,
    /// Entities affected by the card.
    pub targets: Option<Vec<&'a mut dyn Targetable>>,
    /// Deck that receives summoned tokens.
    pub deck: Option<&'a mut Deck>,
    /// Damage a tournament card must defend against.
    pub incoming_damage: Option<i64>,
}

impl<'a> PlayContext<'a> {
    /// Empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mana(mut self, mana: i64) -> Self {
        self.mana_left = Some(mana);
        self
    }

    #[must_use]
    pub fn with_targets(mut self, targets: Vec<&'a mut dyn Targetable>) -> Self {
        self.targets = Some(targets);
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: &'a mut Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    #[must_use]
    pub fn with_incoming_damage(mut self, damage: i64) -> Self {
        self.incoming_damage = Some(damage);
        self
    }

    /// Mana available, or a missing-input error.
    pub fn mana(&self) -> Result<i64, CardError> {
        self.mana_left.ok_or(CardError::MissingInput("mana_left"))
    }

    /// Targets, or a missing-input error.
    pub fn targets_mut(&mut self) -> Result<&mut Vec<&'a mut dyn Targetable>, CardError> {
        self.targets.as_mut().ok_or(CardError::MissingInput("targets"))
    }

    /// Deck, or a missing-input error.
    pub fn deck_mut(&mut self) -> Result<&mut Deck, CardError> {
        self.deck.as_deref_mut().ok_or(CardError::MissingInput("deck"))
    }

    /// Incoming damage, or a missing-input error.
    pub fn incoming(&self) -> Result<i64, CardError> {
        self.incoming_damage.ok_or(CardError::MissingInput("incoming_damage"))
    }
}

/// What playing a card did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayEffect {
    /// The card entered the battlefield.
    Summoned,
    /// A spell resolved against the named targets.
    SpellResolved { effect: SpellEffect, targets: Vec<String> },
    /// Bonus mana granted by an artifact.
    ManaBonus(u32),
    /// A token creature was added to the deck.
    TokenCreated(String),
    /// A tournament card defended against incoming damage.
    Defended(DefenseReport),
}

/// Result of `Card::play`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    Played {
        card: String,
        mana_used: u32,
        effect: PlayEffect,
    },
    /// Not enough mana. A normal outcome, not an error.
    InsufficientMana {
        card: String,
        cost: u32,
        available: i64,
    },
}

impl PlayOutcome {
    #[must_use]
    pub fn is_played(&self) -> bool {
        matches!(self, PlayOutcome::Played { .. })
    }
}

/// Serializable description of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub name: String,
    pub cost: u32,
    pub rarity: String,
    pub kind: CardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Capability traits the card implements.
    pub interfaces: Vec<String>,
}

impl CardSummary {
    pub(crate) fn base(info: &CardInfo, kind: CardKind, interfaces: &[&str]) -> Self {
        Self {
            name: info.name().to_string(),
            cost: info.cost(),
            rarity: info.rarity().to_string(),
            kind,
            attack: None,
            health: None,
            defense: None,
            effect: None,
            durability: None,
            id: None,
            interfaces: interfaces.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Common card contract.
pub trait Card {
    /// Identity fields.
    fn info(&self) -> &CardInfo;

    /// Kind tag.
    fn kind(&self) -> CardKind;

    /// Mana cost.
    fn cost(&self) -> u32 {
        self.info().cost()
    }

    /// True iff `available` covers the cost.
    fn is_playable(&self, available: i64) -> bool {
        available >= i64::from(self.cost())
    }

    /// Play the card against the given context.
    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError>;

    /// Describe the card.
    fn card_info(&self) -> CardSummary;
}

/// Shared mana gate used by the `play` implementations.
///
/// `Ok(Some(_))` is the insufficient-mana outcome to return as is.
pub(crate) fn check_mana<C: Card + ?Sized>(
    card: &C,
    ctx: &PlayContext<'_>,
) -> Result<Option<PlayOutcome>, CardError> {
    let available = ctx.mana()?;
    if card.is_playable(available) {
        Ok(None)
    } else {
        Ok(Some(PlayOutcome::InsufficientMana {
            card: card.info().name().to_string(),
            cost: card.cost(),
            available,
        }))
    }
}
