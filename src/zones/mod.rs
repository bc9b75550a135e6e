//! Card containers.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered draw pile (FIFO draw, first-match removal)
//! - `Hand`: Cards split by kind (creatures, spells, artifacts)
//! - `Battlefield`: Opposing units in an engine session

pub mod deck;
pub mod hand;

pub use deck::{Deck, DeckStats};
pub use hand::Hand;

/// Opposing units. Dead units stay until their owner drops them.
pub type Battlefield = Vec<crate::cards::Unit>;
