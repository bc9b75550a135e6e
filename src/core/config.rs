//! Simulation configuration.
//!
//! The library core is driven entirely by explicit arguments; this
//! configuration parameterizes the demo driver built on top of it so a
//! run is reproducible from a single value.

use serde::{Deserialize, Serialize};

/// Parameters for a full simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Root seed for every random stream of the run.
    /// Same seed produces the same decks, shuffles and withdrawals.
    pub seed: u64,

    /// Smallest themed deck the driver may request.
    pub min_deck_size: usize,

    /// Largest themed deck the driver may request (inclusive).
    pub max_deck_size: usize,

    /// Turns after which the driver stops calling `simulate_turn`.
    /// The engine has no guard of its own.
    pub max_turns: u32,

    /// Probability that a tournament entrant withdraws before the
    /// round robin starts.
    pub injury_chance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_deck_size: 1,
            max_deck_size: 16,
            max_turns: 20,
            injury_chance: 1.0 / 11.0,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the themed deck size range (inclusive).
    #[must_use]
    pub fn with_deck_sizes(mut self, min: usize, max: usize) -> Self {
        self.min_deck_size = min;
        self.max_deck_size = max;
        self.normalized()
    }

    /// Set the driver's turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set the withdrawal probability.
    #[must_use]
    pub fn with_injury_chance(mut self, chance: f64) -> Self {
        self.injury_chance = chance;
        self
    }

    /// Swap an inverted deck size range into order.
    fn normalized(mut self) -> Self {
        if self.min_deck_size > self.max_deck_size {
            std::mem::swap(&mut self.min_deck_size, &mut self.max_deck_size);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.min_deck_size, 1);
        assert_eq!(config.max_deck_size, 16);
        assert_eq!(config.max_turns, 20);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulationConfig::default()
            .with_seed(7)
            .with_deck_sizes(10, 3)
            .with_max_turns(5)
            .with_injury_chance(0.0);

        assert_eq!(config.seed, 7);
        assert_eq!((config.min_deck_size, config.max_deck_size), (3, 10));
        assert_eq!(config.max_turns, 5);
        assert_eq!(config.injury_chance, 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json(r#"{ "seed": 9, "max_turns": 3 }"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_turns, 3);
        assert_eq!(config.max_deck_size, 16);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SimulationConfig::from_json("{ seed: ").is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SimulationConfig::default().with_seed(123);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = SimulationConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
