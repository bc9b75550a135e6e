//! Tournament roster and match scheduling.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{AnyCard, TournamentCard};
use crate::combat::{Combatant, Rankable, Targetable};
use crate::core::{MatchError, RegistrationError};

/// Outcome of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: String,
    pub winner_id: String,
    pub loser: String,
    pub loser_id: String,
    pub winner_rating: u32,
    pub loser_rating: u32,
    /// Number of times the first card struck.
    pub rounds: u32,
}

/// Whether any match has been played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformStatus {
    Active,
    Inactive,
}

impl fmt::Display for PlatformStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlatformStatus::Active => "active",
            PlatformStatus::Inactive => "inactive",
        })
    }
}

/// Platform-wide summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub total_cards: usize,
    pub matches_played: u32,
    /// Mean rating rounded to the nearest integer. 0 with no cards.
    pub average_rating: u32,
    pub platform_status: PlatformStatus,
}

/// Roster of tournament cards and the matches between them.
///
/// ```
/// use datadeck::cards::{Rarity, TournamentCard};
/// use datadeck::tournament::TournamentPlatform;
///
/// let mut platform = TournamentPlatform::new();
/// platform.register_card(TournamentCard::new("Fire Dragon", 6, Rarity::Legendary, 6, 7, 3, "dragon_001").unwrap().into()).unwrap();
/// platform.register_card(TournamentCard::new("Ice Wizard", 5, Rarity::Rare, 4, 12, 1, "wizard_001").unwrap().into()).unwrap();
///
/// let result = platform.create_match("dragon_001", "wizard_001").unwrap();
/// assert_eq!(result.winner, "Fire Dragon");
/// assert_eq!((result.winner_rating, result.loser_rating), (1216, 1184));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TournamentPlatform {
    roster: Vec<TournamentCard>,
    matches_played: u32,
}

impl TournamentPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the roster.
    ///
    /// Only tournament cards are accepted, and ids must be unique.
    pub fn register_card(&mut self, card: AnyCard) -> Result<(), RegistrationError> {
        let card = match card {
            AnyCard::Tournament(card) => card,
            other => {
                return Err(RegistrationError::NotTournamentCard {
                    name: other.name().to_string(),
                })
            }
        };
        if self.position(card.id()).is_some() {
            return Err(RegistrationError::DuplicateId(card.id().to_string()));
        }
        info!(card = card.name(), id = card.id(), "card registered");
        self.roster.push(card);
        Ok(())
    }

    /// Remove a card from the roster and hand it back.
    pub fn unregister_card(&mut self, id: &str) -> Result<TournamentCard, RegistrationError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistrationError::NotRegistered(id.to_string()))?;
        let card = self.roster.remove(index);
        info!(card = card.name(), id, "card unregistered");
        Ok(card)
    }

    /// Fight a match between two registered cards.
    ///
    /// `first` strikes first every round. Fails without touching any
    /// card if the roster is empty, an id is unknown, or both ids are
    /// the same.
    pub fn create_match(&mut self, first: &str, second: &str) -> Result<MatchResult, MatchError> {
        if self.roster.is_empty() {
            return Err(MatchError::EmptyRoster);
        }
        let a = self
            .position(first)
            .ok_or_else(|| MatchError::UnknownCard(first.to_string()))?;
        let b = self
            .position(second)
            .ok_or_else(|| MatchError::UnknownCard(second.to_string()))?;
        if a == b {
            return Err(MatchError::SelfMatch(first.to_string()));
        }

        let (attacker, defender) = pair_mut(&mut self.roster, a, b);
        attacker.reset_health();
        defender.reset_health();

        let mut rounds = 0;
        loop {
            rounds += 1;
            attacker.attack(defender);
            if !defender.is_alive() {
                break;
            }
            defender.attack(attacker);
            if !attacker.is_alive() {
                break;
            }
        }

        let (winner, loser) = if attacker.is_alive() {
            (attacker, defender)
        } else {
            (defender, attacker)
        };
        winner.update_wins(1);
        loser.update_losses(1);
        let winner_rating = winner.calculate_rating();
        let loser_rating = loser.calculate_rating();
        self.matches_played += 1;

        let result = MatchResult {
            winner: winner.name().to_string(),
            winner_id: winner.id().to_string(),
            loser: loser.name().to_string(),
            loser_id: loser.id().to_string(),
            winner_rating,
            loser_rating,
            rounds,
        };
        info!(
            winner = %result.winner,
            loser = %result.loser,
            rounds,
            winner_rating,
            loser_rating,
            "match played"
        );
        Ok(result)
    }

    /// Roster by rating, highest first. Ties keep registration order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&TournamentCard> {
        let mut ranked: Vec<&TournamentCard> = self.roster.iter().collect();
        ranked.sort_by(|x, y| y.rating().cmp(&x.rating()));
        ranked
    }

    #[must_use]
    pub fn tournament_report(&self) -> TournamentReport {
        let total_cards = self.roster.len();
        let average_rating = if total_cards == 0 {
            0
        } else {
            let sum: u64 = self.roster.iter().map(|c| u64::from(c.rating())).sum();
            (sum as f64 / total_cards as f64).round() as u32
        };
        TournamentReport {
            total_cards,
            matches_played: self.matches_played,
            average_rating,
            platform_status: if self.matches_played > 0 {
                PlatformStatus::Active
            } else {
                PlatformStatus::Inactive
            },
        }
    }

    /// A registered card by id.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&TournamentCard> {
        self.roster.iter().find(|c| c.id() == id)
    }

    /// Registered cards in registration order.
    #[must_use]
    pub fn roster(&self) -> &[TournamentCard] {
        &self.roster
    }

    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.roster.iter().position(|c| c.id() == id)
    }
}

/// Two distinct elements of a slice, mutably, in argument order.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
