//! Tournament platform.
//!
//! Registered tournament cards fight one-on-one matches. Health resets
//! before every match; wins, losses and ratings carry over.
//!
//! ## Key Types
//!
//! - `TournamentPlatform`: Roster, matches, leaderboard
//! - `MatchResult`: Outcome of one match
//! - `TournamentReport`: Platform-wide summary

pub mod platform;

pub use platform::{MatchResult, PlatformStatus, TournamentPlatform, TournamentReport};
