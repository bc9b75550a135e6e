//! datadeck demo driver.
//!
//! Runs a combat showcase, one engine session with a themed deck, and a
//! round-robin tournament, printing JSON reports along the way.
//!
//! ## Usage
//!
//! ```text
//! datadeck [CONFIG.json]
//! ```
//!
//! The optional config file holds a `SimulationConfig`; missing fields
//! take their defaults.

use std::env;
use std::error::Error;
use std::fs;

use serde::Serialize;
use tracing::{info, warn, Level};

use datadeck::cards::{
    Artifact, ArtifactEffect, Card, Creature, EliteCard, PlayContext, Rarity, TournamentCard,
};
use datadeck::combat::{Combatant, Rankable, Spellcaster, Targetable};
use datadeck::core::{shuffle_slice, GameRng, RandomSource, SimulationConfig};
use datadeck::engine::{GameEngine, TurnOutcome};
use datadeck::factory::{CardFactory, FantasyCardFactory};
use datadeck::strategy::AggressiveStrategy;
use datadeck::tournament::TournamentPlatform;
use datadeck::zones::Deck;

type DemoResult<T = ()> = Result<T, Box<dyn Error>>;

fn print_json<T: Serialize>(label: &str, value: &T) -> DemoResult {
    println!("{label}:\n{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config() -> DemoResult<SimulationConfig> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let config = SimulationConfig::from_json(&text)?;
            info!(%path, "loaded config");
            Ok(config)
        }
        None => Ok(SimulationConfig::default()),
    }
}

/// Elite card against a few creatures.
fn combat_showcase() -> DemoResult {
    println!("=== Ability System ===\n");

    let mut warrior = EliteCard::new("Arcane Warrior", 6, Rarity::Common, 5, 42, 3)?;
    let mut goblin = Creature::new("Goblin", 2, Rarity::Common, 4, 10)?;
    let mut rat = Creature::new("Rat", 2, Rarity::Common, 1, 4)?;
    let mut skeleton = Creature::new("Skeleton", 2, Rarity::Common, 3, 7)?;

    print_json("Elite card", &warrior.card_info())?;

    {
        let targets: Vec<&mut dyn Targetable> = vec![&mut goblin, &mut rat, &mut skeleton];
        let mut ctx = PlayContext::new().with_mana(50).with_targets(targets);
        print_json("Play", &warrior.play(&mut ctx)?)?;
    }

    print_json("Attack", &warrior.attack(&mut goblin))?;
    print_json("Defense", &warrior.defend(i64::from(goblin.attack_power()))?)?;

    {
        let mut targets: Vec<&mut dyn Targetable> = vec![&mut goblin, &mut rat];
        print_json("Spell cast", &warrior.cast_spell("Fireball", &mut targets))?;
    }
    print_json("Mana channel", &warrior.channel_mana(3))?;
    print_json("Combat stats", &warrior.combat_stats())?;

    info!(goblin = goblin.health(), rat = rat.health(), warrior = warrior.health(), "showcase done");
    Ok(())
}

/// Themed deck against two enemies, turn by turn.
fn engine_session(config: &SimulationConfig, rng: &mut GameRng) -> DemoResult {
    println!("\n=== Game Engine ===\n");

    let mut engine = GameEngine::new(
        Box::new(FantasyCardFactory::new()),
        Box::new(AggressiveStrategy::new()),
    );
    print_json("Available types", &engine.factory_mut().supported_types())?;

    let size = rng.range_inclusive(config.min_deck_size, config.max_deck_size);
    let dealt = engine.deal_themed_hand(size, rng)?;
    info!(requested = size, dealt, "themed hand dealt");

    let mut deck = Deck::from(engine.hand().clone());
    deck.shuffle(rng);
    let mut crown =
        Artifact::new("Goblin's Crown", 7, Rarity::Legendary, 1, ArtifactEffect::Goblin)?;
    crown.play(&mut PlayContext::new().with_mana(10).with_deck(&mut deck))?;
    print_json("Deck stats", &deck.deck_stats())?;

    engine
        .battlefield_mut()
        .push(Creature::new("The White Dragon", 8, "Holographic".parse()?, 3, 10)?.into());
    engine
        .battlefield_mut()
        .push(Creature::new("Enemy Player", 3, Rarity::Common, 1, 10)?.into());

    for _ in 0..config.max_turns {
        match engine.simulate_turn() {
            TurnOutcome::Completed(report) => {
                let stalled = report.is_empty();
                print_json("Turn", &report)?;
                if stalled {
                    warn!("strategy played nothing, stopping");
                    break;
                }
            }
            outcome => {
                info!(?outcome, "session over");
                break;
            }
        }
    }

    print_json("Engine status", &engine.engine_status())?;
    Ok(())
}

fn entrants(rng: &mut GameRng) -> DemoResult<Vec<TournamentCard>> {
    let mut random_stat = |high: usize| rng.range_inclusive(1, high) as i64;
    let remy = (random_stat(12), random_stat(22), random_stat(10));
    let manu = (random_stat(12), random_stat(22), random_stat(10));

    Ok(vec![
        TournamentCard::new("Fire Dragon", 6, Rarity::Legendary, 6, 7, 3, "dragon_001")?,
        TournamentCard::new("Ice Wizard", 5, Rarity::Rare, 4, 12, 1, "wizard_001")?,
        TournamentCard::new("Obelix", 10, Rarity::Unique, 1000, 800, 40, "obelix_01")?,
        TournamentCard::new("The Greatest Duck", 3, Rarity::Legendary, 18, 18, 18, "duck_01")?,
        TournamentCard::new("Remy the Rat Slayer", 10, Rarity::Unique, remy.0, remy.1, remy.2, "remy_01")?,
        TournamentCard::new("Manu the Trainer", 10, Rarity::Unique, manu.0, manu.1, manu.2, "manu_01")?,
        TournamentCard::new("Rat", 1, Rarity::Common, 1, 1, 1, "rat_01")?,
    ])
}

/// Round robin, in random order, between every entrant that is not injured.
fn tournament(config: &SimulationConfig, rng: &mut GameRng) -> DemoResult {
    println!("\n=== Tournament Platform ===\n");

    let mut platform = TournamentPlatform::new();
    print_json("Platform report", &platform.tournament_report())?;

    for card in entrants(rng)? {
        print_json("Registering", &card.card_info())?;
        platform.register_card(card.into())?;
    }

    let ids: Vec<String> = platform.roster().iter().map(|c| c.id().to_string()).collect();
    let mut participants = Vec::new();
    for id in ids {
        if rng.chance(config.injury_chance) {
            let card = platform.unregister_card(&id)?;
            warn!(card = card.name(), "injured, withdrawn from the tournament");
        } else {
            participants.push(id);
        }
    }

    shuffle_slice(rng, &mut participants);
    for (i, first) in participants.iter().enumerate() {
        for second in &participants[i + 1..] {
            let result = platform.create_match(first, second)?;
            print_json("Match result", &result)?;
        }
    }

    println!("\nLeaderboard:");
    for (rank, card) in platform.leaderboard().iter().enumerate() {
        let info = card.rank_info();
        println!(
            "{}. {} - Rating: {} ({}-{})",
            rank + 1,
            card.name(),
            info.rating,
            info.wins,
            info.losses
        );
    }
    print_json("Platform report", &platform.tournament_report())?;
    Ok(())
}

fn main() -> DemoResult {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = load_config()?;
    let root = GameRng::new(config.seed);

    combat_showcase()?;
    engine_session(&config, &mut root.for_context("engine"))?;
    tournament(&config, &mut root.for_context("tournament"))?;
    Ok(())
}
