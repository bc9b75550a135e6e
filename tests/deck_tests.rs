//! Deck integration tests.

use datadeck::cards::{AnyCard, Artifact, ArtifactEffect, Card, Creature, Rarity, Spell, SpellEffect};
use datadeck::core::{shuffle_slice, GameRng, ScriptedRng};
use datadeck::zones::Deck;
use proptest::prelude::*;

fn creature(name: &str, cost: i64) -> Creature {
    Creature::new(name, cost, Rarity::Common, 1, 1).unwrap()
}

fn names(deck: &Deck) -> Vec<String> {
    deck.cards().map(|c| c.name().to_string()).collect()
}

// =============================================================================
// Ordering
// =============================================================================

/// Without a shuffle, cards come out in the order they went in.
#[test]
fn test_draw_order_matches_insertion() {
    let mut deck = Deck::new();
    deck.add_card(creature("A", 1));
    deck.add_card(Spell::new("B", 2, Rarity::Common, SpellEffect::Heal).unwrap());

    assert_eq!(deck.draw_card().map(|c| c.name().to_string()), Some("A".into()));
    assert_eq!(deck.draw_card().map(|c| c.name().to_string()), Some("B".into()));
    assert_eq!(deck.draw_card(), None);
}

/// Removing an absent name reports false and changes nothing.
#[test]
fn test_remove_absent_is_noop() {
    let mut deck = Deck::new();
    deck.add_card(creature("Rat", 2));
    let before = deck.clone();

    assert!(!deck.remove_card("Dragon"));
    assert_eq!(deck, before);
}

/// Same seed, same permutation; every card survives the shuffle.
#[test]
fn test_seeded_shuffle_is_reproducible() {
    let build = || -> Deck {
        (0..10)
            .map(|i| AnyCard::from(creature(&format!("C{i}"), i)))
            .collect()
    };
    let mut a = build();
    let mut b = build();
    a.shuffle(&mut GameRng::new(9));
    b.shuffle(&mut GameRng::new(9));

    assert_eq!(a, b);
    let mut sorted = names(&a);
    sorted.sort();
    let mut expected = names(&build());
    expected.sort();
    assert_eq!(sorted, expected);
}

/// A deck and a plain slice with the same seed end up in the same order.
#[test]
fn test_deck_shuffle_matches_slice_shuffle() {
    let labels: Vec<String> = (0..12).map(|i| format!("C{i}")).collect();
    let mut deck: Deck = labels
        .iter()
        .map(|n| AnyCard::from(creature(n, 1)))
        .collect();
    let mut slice = labels.clone();

    deck.shuffle(&mut GameRng::new(31));
    shuffle_slice(&mut GameRng::new(31), &mut slice);

    assert_eq!(names(&deck), slice);
}

/// A zero script leaves a three-card deck rotated left by one.
#[test]
fn test_scripted_shuffle() {
    let mut deck: Deck = ["A", "B", "C"]
        .into_iter()
        .map(|n| AnyCard::from(creature(n, 1)))
        .collect();

    deck.shuffle(&mut ScriptedRng::new([0]));

    // i=2 <-> 0: C B A, then i=1 <-> 0: B C A.
    assert_eq!(names(&deck), vec!["B", "C", "A"]);
}

// =============================================================================
// Stats
// =============================================================================

/// Costs 2, 5 and 3 average to 3.3.
#[test]
fn test_stats_average_cost() {
    let mut deck = Deck::new();
    deck.add_card(creature("A", 2));
    deck.add_card(creature("B", 5));
    deck.add_card(Artifact::new("C", 3, Rarity::Rare, 0, ArtifactEffect::Mana).unwrap());

    let stats = deck.deck_stats();
    assert_eq!(stats.total_cards, 3);
    assert_eq!(stats.creatures, 2);
    assert_eq!(stats.artifacts, 1);
    assert_eq!(stats.avg_cost, 3.3);
}

/// Exact ties at the second decimal round to the even neighbour.
#[test]
fn test_stats_average_ties_round_to_even() {
    let deck_of = |costs: &[i64]| -> Deck {
        costs
            .iter()
            .map(|&cost| AnyCard::from(creature("C", cost)))
            .collect()
    };

    // 1.25 -> 1.2, 1.75 -> 1.8, 1.35 -> 1.4
    assert_eq!(deck_of(&[1, 1, 1, 2]).deck_stats().avg_cost, 1.2);
    assert_eq!(deck_of(&[1, 1, 2, 3]).deck_stats().avg_cost, 1.8);
    let mut costs = vec![0; 19];
    costs.push(27);
    assert_eq!(deck_of(&costs).deck_stats().avg_cost, 1.4);
}

/// An empty deck has an average cost of zero.
#[test]
fn test_stats_empty_deck() {
    let stats = Deck::new().deck_stats();
    assert_eq!(stats.total_cards, 0);
    assert_eq!(stats.avg_cost, 0.0);
}

/// A goblin artifact grows the deck by one creature.
#[test]
fn test_goblin_artifact_feeds_deck() {
    use datadeck::cards::PlayContext;

    let mut deck = Deck::new();
    let mut crown =
        Artifact::new("Goblin's Crown", 7, Rarity::Legendary, 1, ArtifactEffect::Goblin).unwrap();

    let outcome = crown
        .play(&mut PlayContext::new().with_mana(7).with_deck(&mut deck))
        .unwrap();

    assert!(outcome.is_played());
    assert_eq!(names(&deck), vec!["Goblin"]);
}

proptest! {
    /// The average is the mean cost to one decimal place.
    #[test]
    fn test_average_within_rounding(costs in prop::collection::vec(0i64..30, 1..20)) {
        let deck: Deck = costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| AnyCard::from(creature(&format!("C{i}"), cost)))
            .collect();

        let mean = costs.iter().sum::<i64>() as f64 / costs.len() as f64;
        let stats = deck.deck_stats();
        prop_assert!((stats.avg_cost - mean).abs() <= 0.05 + 1e-9);
        prop_assert_eq!(stats.total_cards, costs.len());
        let total: i64 = deck.cards().map(|c| i64::from(c.cost())).sum();
        prop_assert_eq!(total, costs.iter().sum::<i64>());
    }
}
