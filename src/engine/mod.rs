//! Turn-by-turn game engine.
//!
//! The engine binds a `CardFactory` and a `GameStrategy` and owns the
//! session state: the acting side's hand and the opposing battlefield.
//! Each `simulate_turn` call runs exactly one turn. There is no turn
//! limit; callers that want one keep their own count.

pub mod game;

pub use game::{EngineStatus, GameEngine, TurnOutcome};
