//! Core building blocks shared by every other module: randomness,
//! configuration and error types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SimulationConfig;
pub use error::{CardError, MatchError, RegistrationError, StrategyError};
pub use rng::{choose, shuffle_slice, shuffle_with, GameRng, GameRngState, RandomSource, ScriptedRng};
