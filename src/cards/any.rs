//! Tagged card variants for heterogeneous collections.
//!
//! Decks and hands hold `AnyCard`; battlefields hold `Unit`, the subset
//! of kinds that can sit on the board and be attacked.

use serde::{Deserialize, Serialize};

use crate::combat::{Combatant, Targetable};
use crate::core::CardError;

use super::artifact::Artifact;
use super::card::{Card, CardInfo, CardKind, CardSummary, PlayContext, PlayOutcome};
use super::creature::Creature;
use super::elite::EliteCard;
use super::spell::Spell;
use super::tournament::TournamentCard;

/// Any card kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyCard {
    Creature(Creature),
    Spell(Spell),
    Artifact(Artifact),
    Elite(EliteCard),
    Tournament(TournamentCard),
}

impl AnyCard {
    #[must_use]
    pub fn name(&self) -> &str {
        self.info().name()
    }

    /// The battlefield form of this card, if it has one.
    #[must_use]
    pub fn into_unit(self) -> Option<Unit> {
        match self {
            AnyCard::Creature(c) => Some(Unit::Creature(c)),
            AnyCard::Elite(c) => Some(Unit::Elite(c)),
            AnyCard::Tournament(c) => Some(Unit::Tournament(c)),
            AnyCard::Spell(_) | AnyCard::Artifact(_) => None,
        }
    }

    #[must_use]
    pub fn as_tournament(&self) -> Option<&TournamentCard> {
        match self {
            AnyCard::Tournament(card) => Some(card),
            _ => None,
        }
    }

    fn as_card(&self) -> &dyn Card {
        match self {
            AnyCard::Creature(c) => c,
            AnyCard::Spell(c) => c,
            AnyCard::Artifact(c) => c,
            AnyCard::Elite(c) => c,
            AnyCard::Tournament(c) => c,
        }
    }

    fn as_card_mut(&mut self) -> &mut dyn Card {
        match self {
            AnyCard::Creature(c) => c,
            AnyCard::Spell(c) => c,
            AnyCard::Artifact(c) => c,
            AnyCard::Elite(c) => c,
            AnyCard::Tournament(c) => c,
        }
    }
}

impl Card for AnyCard {
    fn info(&self) -> &CardInfo {
        self.as_card().info()
    }

    fn kind(&self) -> CardKind {
        self.as_card().kind()
    }

    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError> {
        self.as_card_mut().play(ctx)
    }

    fn card_info(&self) -> CardSummary {
        self.as_card().card_info()
    }
}

impl From<Creature> for AnyCard {
    fn from(card: Creature) -> Self {
        AnyCard::Creature(card)
    }
}

impl From<Spell> for AnyCard {
    fn from(card: Spell) -> Self {
        AnyCard::Spell(card)
    }
}

impl From<Artifact> for AnyCard {
    fn from(card: Artifact) -> Self {
        AnyCard::Artifact(card)
    }
}

impl From<EliteCard> for AnyCard {
    fn from(card: EliteCard) -> Self {
        AnyCard::Elite(card)
    }
}

impl From<TournamentCard> for AnyCard {
    fn from(card: TournamentCard) -> Self {
        AnyCard::Tournament(card)
    }
}

/// A card on the battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Creature(Creature),
    Elite(EliteCard),
    Tournament(TournamentCard),
}

impl Unit {
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Unit::Creature(_) => CardKind::Creature,
            Unit::Elite(_) => CardKind::Elite,
            Unit::Tournament(_) => CardKind::Tournament,
        }
    }

    /// Attack and defense numbers, for units that fight back.
    #[must_use]
    pub fn as_combatant(&self) -> Option<&dyn Combatant> {
        match self {
            Unit::Creature(_) => None,
            Unit::Elite(c) => Some(c),
            Unit::Tournament(c) => Some(c),
        }
    }

    fn target(&self) -> &dyn Targetable {
        match self {
            Unit::Creature(c) => c,
            Unit::Elite(c) => c,
            Unit::Tournament(c) => c,
        }
    }

    fn target_mut(&mut self) -> &mut dyn Targetable {
        match self {
            Unit::Creature(c) => c,
            Unit::Elite(c) => c,
            Unit::Tournament(c) => c,
        }
    }
}

impl Targetable for Unit {
    fn name(&self) -> &str {
        self.target().name()
    }

    fn health(&self) -> i64 {
        self.target().health()
    }

    fn lose_health(&mut self, amount: i64) {
        self.target_mut().lose_health(amount);
    }

    fn gain_health(&mut self, amount: i64) {
        self.target_mut().gain_health(amount);
    }

    fn adjust_attack(&mut self, delta: i64) {
        self.target_mut().adjust_attack(delta);
    }

    fn as_defender(&mut self) -> Option<&mut dyn Combatant> {
        self.target_mut().as_defender()
    }
}

impl From<Creature> for Unit {
    fn from(card: Creature) -> Self {
        Unit::Creature(card)
    }
}

impl From<EliteCard> for Unit {
    fn from(card: EliteCard) -> Self {
        Unit::Elite(card)
    }
}

impl From<TournamentCard> for Unit {
    fn from(card: TournamentCard) -> Self {
        Unit::Tournament(card)
    }
}
