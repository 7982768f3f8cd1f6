//! Effectiveness evaluation
//!
//! A weapon is effective against a foe when one of its marked targets
//! matches the foe's movement or weapon class and the foe carries no
//! immunity for that target.

use crate::core::types::{EffectiveTarget, MoveKind, WeaponKind};

/// Does any marked target apply against this foe?
pub fn is_effective(
    targets: &[EffectiveTarget],
    foe_move: MoveKind,
    foe_weapon: WeaponKind,
    foe_immunities: &[EffectiveTarget],
) -> bool {
    targets.iter().any(|target| {
        let matches_foe = match target {
            EffectiveTarget::Movement(kind) => *kind == foe_move,
            EffectiveTarget::Weapon(kind) => *kind == foe_weapon,
        };
        matches_foe && !foe_immunities.contains(target)
    })
}
