//! Turn strategies.
//!
//! A strategy decides, for one turn, which cards in the hand to play and
//! which battlefield units they hit. It mutates unit health directly and
//! reports what it did; cleaning up the hand and dropping dead units is
//! the engine's job.
//!
//! ## Key Types
//!
//! - `GameStrategy`: Strategy contract held by the engine
//! - `AggressiveStrategy`: Cheapest creatures first at the weakest target
//! - `TurnReport`: What one turn did

pub mod aggressive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Unit;
use crate::core::StrategyError;
use crate::zones::Hand;

pub use aggressive::AggressiveStrategy;

/// What one turn did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Card names in play order.
    pub cards_played: Vec<String>,
    pub mana_used: u32,
    /// Distinct names of units that took damage, in first-hit order.
    pub targets_attacked: SmallVec<[String; 4]>,
    pub damage_dealt: u64,
}

impl TurnReport {
    /// A turn that did nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards_played.is_empty()
    }
}

/// Decides and executes one turn.
pub trait GameStrategy {
    /// Display name.
    fn name(&self) -> &str;

    /// Play a turn from `hand` against `battlefield`.
    ///
    /// The hand is left untouched. Units may be left dead.
    fn execute_turn(&self, hand: &Hand, battlefield: &mut [Unit])
        -> Result<TurnReport, StrategyError>;

    /// Battlefield indices in the order this strategy attacks them.
    fn prioritize_targets(&self, battlefield: &[Unit]) -> Vec<usize>;
}
