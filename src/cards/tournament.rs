//! Tournament cards: combatants with a persistent win/loss record.

use serde::{Deserialize, Serialize};

use crate::combat::{
    rating_for, resolve_defense, Combatant, DamageFloor, DefenseReport, RankInfo, Rankable,
    Targetable, STARTING_RATING,
};
use crate::core::CardError;

use super::card::{Card, CardInfo, CardKind, CardSummary, PlayContext, PlayEffect, PlayOutcome, Rarity};
use super::creature::saturating_attack;

/// A tournament-grade card.
///
/// Defends with the tournament damage floor, so every hit costs at least
/// one health and matches always terminate. `max_health` is captured at
/// construction and restored before every match; the record and rating
/// carry over between matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentCard {
    info: CardInfo,
    id: String,
    attack: u32,
    health: i64,
    max_health: i64,
    defense: u32,
    wins: u32,
    losses: u32,
    rating: u32,
}

impl TournamentCard {
    /// ```
    /// use datadeck::cards::{Rarity, TournamentCard};
    ///
    /// let dragon = TournamentCard::new("Fire Dragon", 6, Rarity::Legendary, 6, 7, 3, "dragon_001").unwrap();
    /// assert_eq!(dragon.rating(), 1200);
    /// assert_eq!(dragon.max_health(), 7);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        attack: i64,
        health: i64,
        defense: i64,
        id: impl Into<String>,
    ) -> Result<Self, CardError> {
        let info = CardInfo::new(name, cost, rarity)?;
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CardError::EmptyId);
        }
        if health <= 0 {
            return Err(CardError::NonPositiveHealth(health));
        }
        let attack = u32::try_from(attack).map_err(|_| CardError::NegativeAttack(attack))?;
        let defense = u32::try_from(defense).map_err(|_| CardError::NegativeDefense(defense))?;
        Ok(Self {
            info,
            id,
            attack,
            health,
            max_health: health,
            defense,
            wins: 0,
            losses: 0,
            rating: STARTING_RATING,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// Unique match id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i64 {
        self.max_health
    }

    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Rating as of the last `calculate_rating`.
    #[must_use]
    pub fn rating(&self) -> u32 {
        self.rating
    }

    /// Restore health to the construction-time snapshot.
    pub fn reset_health(&mut self) {
        self.health = self.max_health;
    }

    /// Win/loss record.
    #[must_use]
    pub fn tournament_stats(&self) -> TournamentRecord {
        TournamentRecord {
            wins: self.wins,
            losses: self.losses,
        }
    }
}

/// Win/loss record of a tournament card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub wins: u32,
    pub losses: u32,
}

impl Card for TournamentCard {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn kind(&self) -> CardKind {
        CardKind::Tournament
    }

    /// Playing a tournament card means defending against
    /// `incoming_damage`; no mana is spent.
    fn play(&mut self, ctx: &mut PlayContext<'_>) -> Result<PlayOutcome, CardError> {
        let report = self.defend(ctx.incoming()?)?;
        Ok(PlayOutcome::Played {
            card: self.name().to_string(),
            mana_used: 0,
            effect: PlayEffect::Defended(report),
        })
    }

    fn card_info(&self) -> CardSummary {
        CardSummary {
            attack: Some(self.attack),
            health: Some(self.health),
            defense: Some(self.defense),
            id: Some(self.id.clone()),
            ..CardSummary::base(
                &self.info,
                CardKind::Tournament,
                &["Card", "Combatant", "Rankable"],
            )
        }
    }
}

impl Targetable for TournamentCard {
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

impl Combatant for TournamentCard {
    fn attack_power(&self) -> u32 {
        self.attack
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn damage_floor(&self) -> DamageFloor {
        DamageFloor::Tournament
    }

    fn absorb(&mut self, incoming: u32) -> DefenseReport {
        let floor = self.damage_floor();
        resolve_defense(self.info.name(), &mut self.health, self.defense, floor, incoming)
    }
}

impl Rankable for TournamentCard {
    fn calculate_rating(&mut self) -> u32 {
        self.rating = rating_for(self.wins, self.losses);
        self.rating
    }

    fn update_wins(&mut self, wins: u32) {
        self.wins = self.wins.saturating_add(wins);
    }

    fn update_losses(&mut self, losses: u32) {
        self.losses = self.losses.saturating_add(losses);
    }

    fn rank_info(&self) -> RankInfo {
        RankInfo {
            rating: self.rating,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragon() -> TournamentCard {
        TournamentCard::new("Fire Dragon", 6, Rarity::Legendary, 6, 7, 3, "dragon_001").unwrap()
    }

    fn wizard() -> TournamentCard {
        TournamentCard::new("Ice Wizard", 5, Rarity::Rare, 4, 12, 1, "wizard_001").unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            TournamentCard::new("X", 1, Rarity::Common, 1, 1, 1, ""),
            Err(CardError::EmptyId)
        );
        assert_eq!(
            TournamentCard::new("X", -1, Rarity::Common, 1, 1, 1, "x"),
            Err(CardError::NegativeCost(-1))
        );
    }

    #[test]
    fn test_defend_with_floor_one() {
        let mut wizard = TournamentCard::new("W", 1, Rarity::Common, 1, 10, 3, "w").unwrap();
        let report = wizard.defend(5).unwrap();
        assert_eq!(report.damage_taken, 2);
        assert_eq!(wizard.health(), 8);

        let report = wizard.defend(0).unwrap();
        assert_eq!(report.damage_taken, 1);
        assert_eq!(wizard.health(), 7);

        assert_eq!(wizard.defend(-4), Err(CardError::NegativeDamage(-4)));
        assert_eq!(wizard.health(), 7);
    }

    #[test]
    fn test_attack_routes_through_defense() {
        let dragon = dragon();
        let mut wizard = wizard();

        let report = dragon.attack(&mut wizard);

        assert_eq!(report.damage, 6);
        assert_eq!(report.dealt, 5);
        assert_eq!(wizard.health(), 7);
    }

    #[test]
    fn test_reset_health() {
        let mut wizard = wizard();
        wizard.lose_health(20);
        assert!(!wizard.is_alive());
        wizard.reset_health();
        assert_eq!(wizard.health(), 12);
    }

    #[test]
    fn test_rating_recomputed_from_record() {
        let mut dragon = dragon();
        dragon.update_wins(3);
        dragon.update_losses(1);
        assert_eq!(dragon.calculate_rating(), 1232);
        // Calling again does not compound.
        assert_eq!(dragon.calculate_rating(), 1232);
        assert_eq!(
            dragon.rank_info(),
            RankInfo { rating: 1232, wins: 3, losses: 1 }
        );
        assert_eq!(dragon.tournament_stats(), TournamentRecord { wins: 3, losses: 1 });
    }

    #[test]
    fn test_play_defends() {
        let mut wizard = wizard();
        let outcome = wizard.play(&mut PlayContext::new().with_incoming_damage(4)).unwrap();
        match outcome {
            PlayOutcome::Played { effect: PlayEffect::Defended(report), mana_used, .. } => {
                assert_eq!(report.damage_taken, 3);
                assert_eq!(mana_used, 0);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(
            wizard.play(&mut PlayContext::new().with_mana(10)),
            Err(CardError::MissingInput("incoming_damage"))
        );
    }
}
