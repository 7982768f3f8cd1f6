//! Damage formula: raw and post-reduction damage
//!
//! Two pure operations, split so specials can inspect pre-reduction damage
//! before final mitigation applies. All arithmetic is integer; percents are
//! signed whole numbers (advantage +20 means +20% attack power).

use crate::combat::constants::{
    DEFENSIVE_TILE_DEN, DEFENSIVE_TILE_NUM, EFFECTIVENESS_DEN, EFFECTIVENESS_NUM,
    STAFF_PENALTY_DIVISOR,
};

/// Inputs to the raw damage formula
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDamageInput {
    pub atk: i32,
    /// Signed percent from color advantage (typically +/-20)
    pub advantage: i32,
    /// Signed percent from forced affinity (typically +/-20)
    pub affinity: i32,
    /// Applies the 1.5x effectiveness multiplier
    pub effective: bool,
    /// The targeted defense stat (def or res, possibly the lower of the two)
    pub def: i32,
    /// Defender stands on a defensive tile
    pub defensive_terrain: bool,
    /// Bonus percent on attack power, offset from zero (0 = no change)
    pub damage_increase_percent: i32,
    /// Flat bonus added to attack power, before defense subtraction
    pub flat_increase: i32,
    /// Unnormalized staff weapon: halve the post-defense result
    pub staff_penalty: bool,
}

/// Compute raw (pre-mitigation) damage
///
/// Steps:
/// 1. attack power = floor(atk * (1 + advantage + affinity) * effectiveness)
///    as a single integer floor
/// 2. flat increase adds to attack power (after the multiplier, so it is
///    clamped with the rest but never scaled by advantage)
/// 3. percentage increase scales attack power, floored
/// 4. defense is scaled 1.3x on a defensive tile, floored
/// 5. result = max(0, attack power - scaled defense), halved for an
///    unnormalized staff
pub fn raw_damage(input: &RawDamageInput) -> i32 {
    let multiplier_percent = 100 + input.advantage + input.affinity;

    let mut power = if input.effective {
        input.atk * multiplier_percent * EFFECTIVENESS_NUM / (100 * EFFECTIVENESS_DEN)
    } else {
        input.atk * multiplier_percent / 100
    };

    power += input.flat_increase;

    if input.damage_increase_percent != 0 {
        power = power * (100 + input.damage_increase_percent) / 100;
    }

    let scaled_def = if input.defensive_terrain {
        input.def * DEFENSIVE_TILE_NUM / DEFENSIVE_TILE_DEN
    } else {
        input.def
    };

    let mut damage = (power - scaled_def).max(0);

    if input.staff_penalty {
        damage /= STAFF_PENALTY_DIVISOR;
    }

    damage
}

/// Apply post-formula mitigation
///
/// `damage_percent` starts at 100 (no mitigation) and has been reduced
/// multiplicatively by each active percentage reduction; `flat_reduction`
/// is the accumulated flat reduction. Percentage mitigation floors before
/// the flat subtraction; the result never goes below zero.
pub fn final_damage(raw: i32, flat_reduction: i32, damage_percent: i32) -> i32 {
    (raw * damage_percent / 100 - flat_reduction).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(atk: i32, def: i32) -> RawDamageInput {
        RawDamageInput {
            atk,
            def,
            ..Default::default()
        }
    }

    #[test]
    fn test_neutral_inputs_reduce_to_atk_minus_def() {
        for (atk, def) in [(36, 40), (50, 0), (0, 10), (31, 30)] {
            assert_eq!(raw_damage(&plain(atk, def)), (atk - def).max(0));
        }
    }

    #[test]
    fn test_advantage_and_affinity_are_additive() {
        // 38 * 1.4 = 53.2 -> 53, minus 25 = 28
        let input = RawDamageInput {
            advantage: 20,
            affinity: 20,
            ..plain(38, 25)
        };
        assert_eq!(raw_damage(&input), 28);
    }

    #[test]
    fn test_effectiveness_compounds_with_advantage() {
        // 44 * 1.2 * 1.5 = 79.2 -> 79, minus 9 = 70
        let input = RawDamageInput {
            advantage: 20,
            effective: true,
            ..plain(44, 9)
        };
        assert_eq!(raw_damage(&input), 70);
    }

    #[test]
    fn test_defensive_terrain_scales_defense_floored() {
        // 22 * 1.3 = 28.6 -> 28, 69 - 28 = 41
        let input = RawDamageInput {
            defensive_terrain: true,
            ..plain(69, 22)
        };
        assert_eq!(raw_damage(&input), 41);
    }

    #[test]
    fn test_flat_increase_applies_before_defense() {
        let input = RawDamageInput {
            flat_increase: 10,
            ..plain(47, 40)
        };
        assert_eq!(raw_damage(&input), 17);
    }

    #[test]
    fn test_disadvantage_reduces_attack_power() {
        // 40 * 0.8 = 32, minus 20 = 12
        let input = RawDamageInput {
            advantage: -20,
            ..plain(40, 20)
        };
        assert_eq!(raw_damage(&input), 12);
    }

    #[test]
    fn test_never_negative() {
        let input = RawDamageInput {
            advantage: -20,
            affinity: -20,
            ..plain(10, 500)
        };
        assert_eq!(raw_damage(&input), 0);
    }

    // Characterization: the increase percent is an offset from zero.
    #[test]
    fn test_damage_increase_percent_zero_is_identity() {
        let mut input = plain(40, 10);
        input.damage_increase_percent = 0;
        assert_eq!(raw_damage(&input), 30);
    }

    #[test]
    fn test_damage_increase_percent_scales_attack_power() {
        // (40 * 1.5 = 60) - 10 = 50
        let mut input = plain(40, 10);
        input.damage_increase_percent = 50;
        assert_eq!(raw_damage(&input), 50);

        // Floors: 33 * 1.5 = 49.5 -> 49, minus 10 = 39
        let mut input = plain(33, 10);
        input.damage_increase_percent = 50;
        assert_eq!(raw_damage(&input), 39);
    }

    // Characterization: the staff penalty halves the post-defense result.
    #[test]
    fn test_staff_penalty_halves_after_defense() {
        let mut input = plain(30, 9);
        input.staff_penalty = true;
        // (30 - 9) / 2 = 10.5 -> 10
        assert_eq!(raw_damage(&input), 10);
    }

    #[test]
    fn test_final_damage_floors_percent_before_flat() {
        // 25 * 70% = 17.5 -> 17, minus 5 = 12
        assert_eq!(final_damage(25, 5, 70), 12);
    }

    #[test]
    fn test_final_damage_never_negative() {
        assert_eq!(final_damage(3, 10, 100), 0);
        assert_eq!(final_damage(0, 0, 100), 0);
    }

    #[test]
    fn test_final_damage_full_percent_is_identity() {
        assert_eq!(final_damage(42, 0, 100), 42);
    }
}
