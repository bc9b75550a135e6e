//! Damage resolution and rating arithmetic.

use serde::{Deserialize, Serialize};

use super::capabilities::Targetable;
use super::report::DefenseReport;

/// Rating every rankable card starts with.
pub const STARTING_RATING: u32 = 1200;

/// Rating points per net win.
pub const RATING_STEP: i64 = 16;

/// Minimum damage a defender always takes.
///
/// The two kinds are distinct on purpose: basic combatants can fully
/// absorb a hit, tournament-grade combatants always lose at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageFloor {
    /// Floor 0: defense may block everything.
    Basic,
    /// Floor 1: at least one point always gets through.
    Tournament,
}

impl DamageFloor {
    /// The minimum damage value.
    #[must_use]
    pub const fn minimum(self) -> u32 {
        match self {
            DamageFloor::Basic => 0,
            DamageFloor::Tournament => 1,
        }
    }
}

/// How a strike landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strike {
    /// The target defended itself.
    Defended(DefenseReport),
    /// The target has no defense and lost raw health.
    Unarmored { damage: u32 },
}

impl Strike {
    /// Health the target actually lost.
    #[must_use]
    pub fn dealt(&self) -> u32 {
        match self {
            Strike::Defended(report) => report.damage_taken,
            Strike::Unarmored { damage } => *damage,
        }
    }
}

/// Deliver `damage` to a target.
///
/// Targets with a defend capability resolve it themselves; everything
/// else loses raw health.
pub fn strike(target: &mut dyn Targetable, damage: u32) -> Strike {
    match target.as_defender() {
        Some(defender) => Strike::Defended(defender.absorb(damage)),
        None => {
            target.lose_health(i64::from(damage));
            Strike::Unarmored { damage }
        }
    }
}

/// Apply `max(floor, incoming - defense)` to `health`.
pub fn resolve_defense(
    defender: &str,
    health: &mut i64,
    defense: u32,
    floor: DamageFloor,
    incoming: u32,
) -> DefenseReport {
    let damage = incoming.saturating_sub(defense).max(floor.minimum());
    *health -= i64::from(damage);
    DefenseReport {
        defender: defender.to_string(),
        incoming,
        damage_taken: damage,
        damage_blocked: incoming.saturating_sub(damage),
        still_alive: *health > 0,
    }
}

/// Rating for a cumulative record: `1200 + (wins - losses) * 16`, never
/// below 0.
///
/// Recomputed from the totals on every call, so two cards with the same
/// record always share a rating.
#[must_use]
pub fn rating_for(wins: u32, losses: u32) -> u32 {
    let net = i64::from(wins) - i64::from(losses);
    let rating = i64::from(STARTING_RATING) + net * RATING_STEP;
    u32::try_from(rating.max(0)).unwrap_or(u32::MAX)
}
