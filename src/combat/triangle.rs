//! Color triangle: relationship lookup, advantage, affinity
//!
//! Categorical lookup only. Red > Green > Blue > Red; colorless is neutral
//! against everything.

use crate::core::types::WeaponColor;

/// Outcome of comparing two weapon colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRelation {
    Advantage,
    Disadvantage,
    Neutral,
}

/// Fixed triangle lookup from the first color's point of view
pub fn color_relationship(a: WeaponColor, b: WeaponColor) -> ColorRelation {
    use ColorRelation::*;
    use WeaponColor::*;

    match (a, b) {
        (Red, Green) | (Green, Blue) | (Blue, Red) => Advantage,
        (Green, Red) | (Blue, Green) | (Red, Blue) => Disadvantage,
        (Colorless, _) | (_, Colorless) => Neutral,
        (Red, Red) | (Blue, Blue) | (Green, Green) => Neutral,
    }
}

/// Signed advantage percent for the attacker
pub fn advantage_percent(
    attacker: WeaponColor,
    defender: WeaponColor,
    triangle_percent: i32,
) -> i32 {
    match color_relationship(attacker, defender) {
        ColorRelation::Advantage => triangle_percent,
        ColorRelation::Disadvantage => -triangle_percent,
        ColorRelation::Neutral => 0,
    }
}

/// Signed affinity percent for the attacker
///
/// A guaranteed-affinity tag forces the bonus for its holder regardless of
/// colors; an applied-affinity tag on either side amplifies whatever the
/// triangle already says. Neutralize-affinity tags have already been
/// resolved away before this is called, so only surviving tags matter.
pub fn affinity_percent(
    relation: ColorRelation,
    attacker_guaranteed: bool,
    defender_guaranteed: bool,
    either_applied: bool,
    affinity: i32,
) -> i32 {
    if attacker_guaranteed {
        return affinity;
    }
    if defender_guaranteed {
        return -affinity;
    }
    if either_applied {
        return match relation {
            ColorRelation::Advantage => affinity,
            ColorRelation::Disadvantage => -affinity,
            ColorRelation::Neutral => 0,
        };
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use WeaponColor::*;

    #[test]
    fn test_triangle_cycle() {
        assert_eq!(color_relationship(Red, Green), ColorRelation::Advantage);
        assert_eq!(color_relationship(Green, Blue), ColorRelation::Advantage);
        assert_eq!(color_relationship(Blue, Red), ColorRelation::Advantage);

        assert_eq!(color_relationship(Green, Red), ColorRelation::Disadvantage);
        assert_eq!(color_relationship(Blue, Green), ColorRelation::Disadvantage);
        assert_eq!(color_relationship(Red, Blue), ColorRelation::Disadvantage);
    }

    #[test]
    fn test_colorless_is_always_neutral() {
        for color in [Red, Blue, Green, Colorless] {
            assert_eq!(color_relationship(Colorless, color), ColorRelation::Neutral);
            assert_eq!(color_relationship(color, Colorless), ColorRelation::Neutral);
        }
    }

    #[test]
    fn test_same_color_is_neutral() {
        for color in [Red, Blue, Green] {
            assert_eq!(color_relationship(color, color), ColorRelation::Neutral);
        }
    }

    #[test]
    fn test_advantage_percent_signs() {
        assert_eq!(advantage_percent(Red, Green, 20), 20);
        assert_eq!(advantage_percent(Green, Red, 20), -20);
        assert_eq!(advantage_percent(Red, Red, 20), 0);
    }

    #[test]
    fn test_guaranteed_affinity_overrides_colors() {
        assert_eq!(
            affinity_percent(ColorRelation::Neutral, true, false, false, 20),
            20
        );
        assert_eq!(
            affinity_percent(ColorRelation::Advantage, false, true, false, 20),
            -20
        );
    }

    #[test]
    fn test_applied_affinity_amplifies_triangle() {
        assert_eq!(
            affinity_percent(ColorRelation::Advantage, false, false, true, 20),
            20
        );
        assert_eq!(
            affinity_percent(ColorRelation::Disadvantage, false, false, true, 20),
            -20
        );
        assert_eq!(
            affinity_percent(ColorRelation::Neutral, false, false, true, 20),
            0
        );
    }

    #[test]
    fn test_no_forcing_tags_means_no_affinity() {
        assert_eq!(
            affinity_percent(ColorRelation::Advantage, false, false, false, 20),
            0
        );
    }
}
