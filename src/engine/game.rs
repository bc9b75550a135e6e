//! Game engine session.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::combat::Targetable;
use crate::core::{CardError, RandomSource};
use crate::factory::CardFactory;
use crate::strategy::{GameStrategy, TurnReport};
use crate::zones::{Battlefield, Hand};

/// Result of one `simulate_turn` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The strategy ran and the session advanced one turn.
    Completed(TurnReport),
    /// Nothing left to attack. No turn was consumed.
    NoEnemies,
    /// Nothing left to play. No turn was consumed.
    NoCards,
    /// The strategy failed. No turn was consumed and state is unchanged.
    StrategyFailed(String),
}

impl TurnOutcome {
    /// The turn report, empty unless the turn completed.
    #[must_use]
    pub fn report(&self) -> TurnReport {
        match self {
            TurnOutcome::Completed(report) => report.clone(),
            _ => TurnReport::empty(),
        }
    }

    /// True for the outcomes that end a session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::NoEnemies | TurnOutcome::NoCards)
    }
}

/// Session summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub turns_simulated: u32,
    pub strategy_name: String,
    pub total_damage: u64,
    pub cards_generated: usize,
}

/// A game session driven by a strategy.
///
/// ```
/// use datadeck::cards::{Creature, Rarity};
/// use datadeck::engine::{GameEngine, TurnOutcome};
/// use datadeck::factory::FantasyCardFactory;
/// use datadeck::strategy::AggressiveStrategy;
///
/// let mut engine = GameEngine::new(
///     Box::new(FantasyCardFactory::new()),
///     Box::new(AggressiveStrategy::new()),
/// );
/// assert_eq!(engine.simulate_turn(), TurnOutcome::NoEnemies);
///
/// engine.battlefield_mut().push(Creature::new("Orc", 3, Rarity::Common, 2, 4).unwrap().into());
/// engine.hand_mut().creatures.push(Creature::new("Troll", 6, Rarity::Rare, 6, 7).unwrap());
///
/// let outcome = engine.simulate_turn();
/// assert_eq!(outcome.report().damage_dealt, 6);
/// assert!(engine.battlefield().is_empty());
/// assert_eq!(engine.engine_status().turns_simulated, 1);
/// ```
pub struct GameEngine {
    factory: Box<dyn CardFactory>,
    strategy: Box<dyn GameStrategy>,
    turn: u32,
    total_damage: u64,
    hand: Hand,
    battlefield: Battlefield,
}

impl GameEngine {
    /// Bind a factory and a strategy to a fresh session.
    #[must_use]
    pub fn new(factory: Box<dyn CardFactory>, strategy: Box<dyn GameStrategy>) -> Self {
        Self {
            factory,
            strategy,
            turn: 0,
            total_damage: 0,
            hand: Hand::new(),
            battlefield: Battlefield::new(),
        }
    }

    /// Rebind both collaborators and reset the session.
    pub fn configure(&mut self, factory: Box<dyn CardFactory>, strategy: Box<dyn GameStrategy>) {
        *self = Self::new(factory, strategy);
    }

    /// Run exactly one turn.
    pub fn simulate_turn(&mut self) -> TurnOutcome {
        if self.battlefield.is_empty() {
            warn!(turn = self.turn, "no enemies left");
            return TurnOutcome::NoEnemies;
        }
        if self.hand.is_empty() {
            warn!(turn = self.turn, "no cards left in hand");
            return TurnOutcome::NoCards;
        }

        // The strategy works on a copy; a failed turn must not leave damage behind.
        let mut field = self.battlefield.clone();
        let report = match self.strategy.execute_turn(&self.hand, &mut field) {
            Ok(report) => report,
            Err(err) => {
                warn!(strategy = self.strategy.name(), error = %err, "strategy execution failed");
                return TurnOutcome::StrategyFailed(err.to_string());
            }
        };

        field.retain(|unit| unit.is_alive());
        self.battlefield = field;
        for name in &report.cards_played {
            self.hand.remove_first_named(name);
        }
        self.turn += 1;
        self.total_damage += report.damage_dealt;

        debug!(
            turn = self.turn,
            played = report.cards_played.len(),
            damage = report.damage_dealt,
            enemies_left = self.battlefield.len(),
            "turn simulated"
        );
        TurnOutcome::Completed(report)
    }

    /// Add a themed deck from the bound factory to the hand.
    ///
    /// Returns the number of cards added.
    pub fn deal_themed_hand(
        &mut self,
        size: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, CardError> {
        let dealt = self.factory.create_themed_deck(size, rng)?;
        let count = dealt.len();
        self.hand.creatures.extend(dealt.creatures);
        self.hand.spells.extend(dealt.spells);
        self.hand.artifacts.extend(dealt.artifacts);
        Ok(count)
    }

    #[must_use]
    pub fn engine_status(&self) -> EngineStatus {
        EngineStatus {
            turns_simulated: self.turn,
            strategy_name: self.strategy.name().to_string(),
            total_damage: self.total_damage,
            cards_generated: self.factory.cards_created(),
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[must_use]
    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    pub fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    pub fn factory_mut(&mut self) -> &mut dyn CardFactory {
        self.factory.as_mut()
    }

    #[must_use]
    pub fn strategy(&self) -> &dyn GameStrategy {
        self.strategy.as_ref()
    }
}
