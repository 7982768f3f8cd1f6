//! Canonical combat constants
//!
//! Formula-level ratios are expressed as integer numerator/denominator
//! pairs so every floor happens in integer arithmetic, never through a
//! float round-trip.

/// Effectiveness multiplies attack power by 3/2 (the canonical 1.5x)
pub const EFFECTIVENESS_NUM: i32 = 3;
pub const EFFECTIVENESS_DEN: i32 = 2;

/// A defensive tile scales the targeted defense stat by 13/10 (1.3x)
pub const DEFENSIVE_TILE_NUM: i32 = 13;
pub const DEFENSIVE_TILE_DEN: i32 = 10;

/// Staff weapons without a normalize tag deal half post-defense damage
pub const STAFF_PENALTY_DIVISOR: i32 = 2;

/// Signed damage percent from color advantage
pub const TRIANGLE_ADVANTAGE_PERCENT: i32 = 20;

/// Signed damage percent from a forced affinity
pub const AFFINITY_PERCENT: i32 = 20;

/// Speed gap that grants a natural follow-up turn
pub const FOLLOW_UP_SPEED_GAP: i32 = 5;
