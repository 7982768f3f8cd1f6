//! Engine tuning configuration with documented constants
//!
//! The numbers an exchange is balanced around are collected here with
//! explanations of their purpose. Fixed lookup tables (color triangle,
//! neutralization pairs) are static data in their own modules, not config.

use crate::combat::constants;

/// Tuning knobs for exchange resolution
///
/// The defaults are the canonical values; hosts that want a different
/// pacing (slower follow-ups, flatter triangle) override fields and pass
/// the config into `resolve_exchange`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Speed gap required for a natural follow-up turn
    ///
    /// The faster participant gains an extra turn when its modified speed
    /// exceeds the opponent's by at least this much. Guaranteed-follow-up
    /// and prevent-follow-up tags override the gap check entirely.
    pub follow_up_speed_gap: i32,

    /// Signed damage percent granted by color advantage (+/-)
    ///
    /// Applied additively with affinity before the effectiveness
    /// multiplier. 20 means an advantaged attacker swings at 120% attack
    /// power and a disadvantaged one at 80%.
    pub triangle_advantage_percent: i32,

    /// Signed damage percent layered on top by a forced affinity (+/-)
    ///
    /// Affinity amplifies whatever the triangle already says, so with both
    /// at 20 an advantaged attacker with affinity reaches 140%.
    pub affinity_percent: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            follow_up_speed_gap: constants::FOLLOW_UP_SPEED_GAP,
            triangle_advantage_percent: constants::TRIANGLE_ADVANTAGE_PERCENT,
            affinity_percent: constants::AFFINITY_PERCENT,
        }
    }
}
