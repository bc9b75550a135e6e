//! Tournament platform integration tests.

use datadeck::cards::{EliteCard, Rarity, TournamentCard};
use datadeck::combat::{Rankable, Targetable};
use datadeck::core::{MatchError, RegistrationError};
use datadeck::tournament::{PlatformStatus, TournamentPlatform};
use proptest::prelude::*;

fn entrant(name: &str, attack: i64, health: i64, defense: i64, id: &str) -> TournamentCard {
    TournamentCard::new(name, 5, Rarity::Rare, attack, health, defense, id).unwrap()
}

fn seeded_platform() -> TournamentPlatform {
    let mut platform = TournamentPlatform::new();
    for card in [
        entrant("Fire Dragon", 6, 7, 3, "dragon_001"),
        entrant("Ice Wizard", 4, 12, 1, "wizard_001"),
        entrant("The Greatest Duck", 18, 18, 18, "duck_01"),
        entrant("Rat", 1, 1, 1, "rat_01"),
    ] {
        platform.register_card(card.into()).unwrap();
    }
    platform
}

// =============================================================================
// Registration
// =============================================================================

/// Non-tournament cards are refused with a reason, not a panic.
#[test]
fn test_rejects_non_tournament_cards() {
    let mut platform = TournamentPlatform::new();
    let elite = EliteCard::new("Arcane Warrior", 6, Rarity::Common, 5, 42, 3).unwrap();

    let err = platform.register_card(elite.into()).unwrap_err();

    assert_eq!(err, RegistrationError::NotTournamentCard { name: "Arcane Warrior".into() });
    assert!(platform.roster().is_empty());
}

/// Unregistering removes the card from later matches.
#[test]
fn test_unregistered_card_cannot_fight() {
    let mut platform = seeded_platform();
    platform.unregister_card("rat_01").unwrap();

    assert_eq!(
        platform.create_match("rat_01", "duck_01"),
        Err(MatchError::UnknownCard("rat_01".into()))
    );
    assert_eq!(platform.roster().len(), 3);
}

// =============================================================================
// Matches
// =============================================================================

/// Failed matches leave every card untouched.
#[test]
fn test_failed_matches_do_not_mutate() {
    let mut platform = seeded_platform();
    let before: Vec<_> = platform.roster().to_vec();

    assert_eq!(
        platform.create_match("duck_01", "duck_01"),
        Err(MatchError::SelfMatch("duck_01".into()))
    );
    assert_eq!(
        platform.create_match("ghost", "duck_01"),
        Err(MatchError::UnknownCard("ghost".into()))
    );

    assert_eq!(platform.roster(), before.as_slice());
    assert_eq!(platform.matches_played(), 0);
}

/// Health is restored before each match; the record persists.
#[test]
fn test_health_resets_between_matches() {
    let mut platform = seeded_platform();

    // The dragon strikes first and can only chip floor damage off the duck.
    platform.create_match("dragon_001", "duck_01").unwrap();
    assert_eq!(platform.card("duck_01").unwrap().health(), 17);

    platform.create_match("duck_01", "wizard_001").unwrap();

    let duck = platform.card("duck_01").unwrap();
    assert_eq!(duck.wins(), 2);
    assert_eq!(duck.rating(), 1232);
    assert_eq!(duck.health(), 18);
    assert_eq!(platform.card("dragon_001").unwrap().losses(), 1);
}

/// A high-defense card still takes one damage per hit, so matches end.
#[test]
fn test_floor_damage_guarantees_termination() {
    let mut platform = TournamentPlatform::new();
    platform.register_card(entrant("Wall", 0, 3, 100, "wall").into()).unwrap();
    platform.register_card(entrant("Pebble", 0, 3, 100, "pebble").into()).unwrap();

    let result = platform.create_match("wall", "pebble").unwrap();

    // Wall hits first: pebble 2, wall 2, pebble 1, wall 1, pebble 0.
    assert_eq!(result.winner_id, "wall");
    assert_eq!(result.rounds, 3);
}

/// Full round robin: leaderboard and report stay consistent.
#[test]
fn test_round_robin_report() {
    let mut platform = seeded_platform();
    let ids: Vec<String> = platform.roster().iter().map(|c| c.id().to_string()).collect();

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            platform.create_match(a, b).unwrap();
        }
    }

    let leaderboard = platform.leaderboard();
    assert_eq!(leaderboard[0].id(), "duck_01");
    assert!(leaderboard.windows(2).all(|w| w[0].rating() >= w[1].rating()));

    let total_wins: u32 = platform.roster().iter().map(|c| c.wins()).sum();
    let total_losses: u32 = platform.roster().iter().map(|c| c.losses()).sum();
    assert_eq!(total_wins, 6);
    assert_eq!(total_losses, 6);

    let report = platform.tournament_report();
    assert_eq!(report.total_cards, 4);
    assert_eq!(report.matches_played, 6);
    assert_eq!(report.average_rating, 1200);
    assert_eq!(report.platform_status, PlatformStatus::Active);
}

/// The empty platform reports zeros and is inactive.
#[test]
fn test_empty_report() {
    let report = TournamentPlatform::new().tournament_report();
    assert_eq!(report.total_cards, 0);
    assert_eq!(report.average_rating, 0);
    assert_eq!(report.platform_status, PlatformStatus::Inactive);
}

/// Ties keep registration order on the leaderboard.
#[test]
fn test_leaderboard_ties_are_stable() {
    let platform = seeded_platform();
    let order: Vec<_> = platform.leaderboard().iter().map(|c| c.id()).collect();
    assert_eq!(order, vec!["dragon_001", "wizard_001", "duck_01", "rat_01"]);
}

proptest! {
    /// Ratings depend only on the final record, not on how it was reached.
    #[test]
    fn test_rating_is_pure(steps in prop::collection::vec(any::<bool>(), 0..40), damage in 0i64..50) {
        let mut a = entrant("A", 1, 10, 0, "a");
        let mut b = entrant("B", 1, 10, 0, "b");

        for &won in &steps {
            if won { a.update_wins(1) } else { a.update_losses(1) }
            a.calculate_rating();
        }
        let wins = steps.iter().filter(|w| **w).count() as u32;
        b.lose_health(damage);
        b.update_losses(steps.len() as u32 - wins);
        b.update_wins(wins);

        prop_assert_eq!(a.calculate_rating(), b.calculate_rating());
        let expected = (1200 + (i64::from(wins) - i64::from(steps.len() as u32 - wins)) * 16).max(0);
        prop_assert_eq!(i64::from(a.rating()), expected);
    }
}
