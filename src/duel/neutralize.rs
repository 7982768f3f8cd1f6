//! Modifier neutralization: paired offense/defense cancellation
//!
//! Runs once before the round loop. The mappings are fixed, file-scope
//! tables; entries are evaluated in declaration order, each in both
//! directions, so resolution is deterministic even when several
//! neutralizations touch the same unit.

use crate::duel::tags::{ModifierKind, ModifierSet};

/// 1-to-1 cancellations: the neutralizer and one instance of its target
/// are removed as a pair, never partially
pub const PAIRWISE: &[(ModifierKind, ModifierKind)] = &[
    (
        ModifierKind::PreventCounterattack,
        ModifierKind::Counterattack,
    ),
    (
        ModifierKind::NeutralizeAffinity,
        ModifierKind::GuaranteedAffinity,
    ),
    (
        ModifierKind::NeutralizeAffinity,
        ModifierKind::AppliedAffinity,
    ),
    (
        ModifierKind::PreventTargetLowestDefense,
        ModifierKind::TargetLowestDefense,
    ),
    (
        ModifierKind::NeutralizeStaffNormalize,
        ModifierKind::StaffDamageNormalize,
    ),
    (
        ModifierKind::NeutralizeAccelerateSpecial,
        ModifierKind::AccelerateSpecial,
    ),
    (
        ModifierKind::NeutralizeSlowSpecial,
        ModifierKind::SlowSpecial,
    ),
];

/// Many-to-one cancellations: a single neutralizer strips every instance
/// of the target kind from the opposing side and survives itself
pub const MANY_TO_ONE: &[(ModifierKind, ModifierKind)] = &[
    (ModifierKind::NeutralizeMapBuffs, ModifierKind::MapBuff),
    (
        ModifierKind::PreventDamageReduction,
        ModifierKind::DamageReduction,
    ),
];

fn cancel_pair(holder: &mut ModifierSet, foe: &mut ModifierSet, table_entry: (ModifierKind, ModifierKind)) {
    let (neutralizer, target) = table_entry;
    if holder.has(neutralizer) && foe.has(target) {
        holder.remove_first(neutralizer);
        foe.remove_first(target);
    }
}

/// Resolve all neutralizations between the two sides
pub fn resolve_neutralization(side_a: &mut ModifierSet, side_b: &mut ModifierSet) {
    for &entry in PAIRWISE {
        cancel_pair(side_a, side_b, entry);
        cancel_pair(side_b, side_a, entry);
    }

    for &(neutralizer, target) in MANY_TO_ONE {
        if side_a.has(neutralizer) {
            side_b.remove_all(target);
        }
        if side_b.has(neutralizer) {
            side_a.remove_all(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::tags::{Modifier, ModifierScope, StatKind};

    #[test]
    fn test_pairwise_removes_one_from_each_side() {
        let mut a = ModifierSet::new();
        let mut b = ModifierSet::new();
        a.attach(Modifier::PreventCounterattack);
        b.attach(Modifier::Counterattack);
        b.attach(Modifier::Counterattack);

        resolve_neutralization(&mut a, &mut b);

        assert!(!a.has(ModifierKind::PreventCounterattack));
        assert_eq!(b.count(ModifierKind::Counterattack), 1);
    }

    #[test]
    fn test_pairwise_needs_both_sides() {
        let mut a = ModifierSet::new();
        let mut b = ModifierSet::new();
        a.attach(Modifier::NeutralizeAffinity);

        resolve_neutralization(&mut a, &mut b);

        // Nothing to cancel against; the neutralizer stays put
        assert!(a.has(ModifierKind::NeutralizeAffinity));
    }

    #[test]
    fn test_neutralize_affinity_hits_guaranteed_before_applied() {
        let mut a = ModifierSet::new();
        let mut b = ModifierSet::new();
        a.attach(Modifier::NeutralizeAffinity);
        b.attach(Modifier::GuaranteedAffinity);
        b.attach(Modifier::AppliedAffinity);

        resolve_neutralization(&mut a, &mut b);

        // One neutralizer cancels exactly one pair, in table order
        assert!(!b.has(ModifierKind::GuaranteedAffinity));
        assert!(b.has(ModifierKind::AppliedAffinity));
    }

    #[test]
    fn test_many_to_one_strips_all_instances() {
        let mut a = ModifierSet::new();
        let mut b = ModifierSet::new();
        a.attach(Modifier::PreventDamageReduction);
        b.attach(Modifier::DamageReduction {
            amount: 5,
            percent: 0,
            scope: ModifierScope::Persistent,
        });
        b.attach(Modifier::DamageReduction {
            amount: 0,
            percent: 30,
            scope: ModifierScope::Round,
        });

        resolve_neutralization(&mut a, &mut b);

        assert!(!b.has(ModifierKind::DamageReduction));
        // Many-to-one neutralizers survive resolution
        assert!(a.has(ModifierKind::PreventDamageReduction));
    }

    #[test]
    fn test_map_buff_strip_is_directional() {
        let mut a = ModifierSet::new();
        let mut b = ModifierSet::new();
        a.attach(Modifier::NeutralizeMapBuffs);
        a.attach(Modifier::MapBuff {
            stat: StatKind::Atk,
            amount: 4,
        });
        b.attach(Modifier::MapBuff {
            stat: StatKind::Def,
            amount: 6,
        });

        resolve_neutralization(&mut a, &mut b);

        // Only the opposing side is stripped
        assert!(a.has(ModifierKind::MapBuff));
        assert!(!b.has(ModifierKind::MapBuff));
    }

    #[test]
    fn test_both_directions_resolve_in_one_pass() {
        let mut a = ModifierSet::new();
        let mut b = ModifierSet::new();
        a.attach(Modifier::Counterattack);
        a.attach(Modifier::PreventCounterattack);
        b.attach(Modifier::Counterattack);
        b.attach(Modifier::PreventCounterattack);

        resolve_neutralization(&mut a, &mut b);

        assert!(!a.has(ModifierKind::Counterattack));
        assert!(!b.has(ModifierKind::Counterattack));
        assert!(!a.has(ModifierKind::PreventCounterattack));
        assert!(!b.has(ModifierKind::PreventCounterattack));
    }
}
