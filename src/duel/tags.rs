//! Modifier tags: the fixed catalog of effect kinds the engine reads
//!
//! A tag is an attached record naming an effect kind plus optional numeric
//! fields or a target reference. Skills attach and detach tags; the engine
//! itself attaches a few during setup (slow-special from guard, converted
//! map buffs) and consumes round-scoped tags exactly once per use.

use serde::{Deserialize, Serialize};

use crate::core::types::{EffectiveTarget, UnitId};

/// Which stat a buff/debuff touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Atk,
    Spd,
    Def,
    Res,
}

/// Whether a damage modifier persists or is consumed after one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierScope {
    Persistent,
    Round,
}

/// An attached modifier record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// Flat and/or percentage damage increase for the holder's attacks
    DamageIncrease {
        amount: i32,
        percent: i32,
        scope: ModifierScope,
    },
    /// Flat and/or percentage damage reduction when the holder defends
    DamageReduction {
        amount: i32,
        percent: i32,
        scope: ModifierScope,
    },
    /// In-combat stat buff
    CombatBuff { stat: StatKind, amount: i32 },
    /// In-combat stat debuff
    CombatDebuff { stat: StatKind, amount: i32 },
    /// Map-phase stat buff, visible to neutralize-map-buffs
    MapBuff { stat: StatKind, amount: i32 },
    /// Holder may counterattack regardless of range
    Counterattack,
    /// Holder's foe cannot counterattack
    PreventCounterattack,
    /// Sweep-style marker a skill attaches to its foe; setup converts it
    /// into PreventCounterattack on the unit it names
    CounterattackPreventionSource { beneficiary: UnitId },
    /// Holder's attacks target the lower of the foe's def/res
    TargetLowestDefense,
    PreventTargetLowestDefense,
    GuaranteedFollowUp,
    PreventFollowUp,
    /// Staff weapon deals full (unhalved) damage
    StaffDamageNormalize,
    NeutralizeStaffNormalize,
    /// Affinity bonus forced for the holder regardless of colors
    GuaranteedAffinity,
    /// Affinity applied in the direction the triangle already points
    AppliedAffinity,
    NeutralizeAffinity,
    /// Foe's special charges slower (granted by guard during setup)
    SlowSpecial,
    AccelerateSpecial,
    NeutralizeAccelerateSpecial,
    NeutralizeSlowSpecial,
    /// Strips every damage-reduction tag from the foe
    PreventDamageReduction,
    /// Converts the foe's map buffs into equal-and-opposite debuffs
    NeutralizeMapBuffs,
    Guard,
    /// Holder survives one otherwise-lethal hit at 1 hp
    ForceSurvival,
    /// Marker left behind after force-survival fires, prevents repeat use
    ForcedSurvival,
    /// Heal applied to the holder after it deals damage; consumed on use
    Heal {
        amount: i32,
        percent_of_damage: i32,
    },
    /// Immunity against one effectiveness target
    EffectivenessImmunity { target: EffectiveTarget },
}

/// Fieldless mirror of `Modifier` for kind-based queries and the
/// neutralization tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    DamageIncrease,
    DamageReduction,
    CombatBuff,
    CombatDebuff,
    MapBuff,
    Counterattack,
    PreventCounterattack,
    CounterattackPreventionSource,
    TargetLowestDefense,
    PreventTargetLowestDefense,
    GuaranteedFollowUp,
    PreventFollowUp,
    StaffDamageNormalize,
    NeutralizeStaffNormalize,
    GuaranteedAffinity,
    AppliedAffinity,
    NeutralizeAffinity,
    SlowSpecial,
    AccelerateSpecial,
    NeutralizeAccelerateSpecial,
    NeutralizeSlowSpecial,
    PreventDamageReduction,
    NeutralizeMapBuffs,
    Guard,
    ForceSurvival,
    ForcedSurvival,
    Heal,
    EffectivenessImmunity,
}

impl Modifier {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Modifier::DamageIncrease { .. } => ModifierKind::DamageIncrease,
            Modifier::DamageReduction { .. } => ModifierKind::DamageReduction,
            Modifier::CombatBuff { .. } => ModifierKind::CombatBuff,
            Modifier::CombatDebuff { .. } => ModifierKind::CombatDebuff,
            Modifier::MapBuff { .. } => ModifierKind::MapBuff,
            Modifier::Counterattack => ModifierKind::Counterattack,
            Modifier::PreventCounterattack => ModifierKind::PreventCounterattack,
            Modifier::CounterattackPreventionSource { .. } => {
                ModifierKind::CounterattackPreventionSource
            }
            Modifier::TargetLowestDefense => ModifierKind::TargetLowestDefense,
            Modifier::PreventTargetLowestDefense => ModifierKind::PreventTargetLowestDefense,
            Modifier::GuaranteedFollowUp => ModifierKind::GuaranteedFollowUp,
            Modifier::PreventFollowUp => ModifierKind::PreventFollowUp,
            Modifier::StaffDamageNormalize => ModifierKind::StaffDamageNormalize,
            Modifier::NeutralizeStaffNormalize => ModifierKind::NeutralizeStaffNormalize,
            Modifier::GuaranteedAffinity => ModifierKind::GuaranteedAffinity,
            Modifier::AppliedAffinity => ModifierKind::AppliedAffinity,
            Modifier::NeutralizeAffinity => ModifierKind::NeutralizeAffinity,
            Modifier::SlowSpecial => ModifierKind::SlowSpecial,
            Modifier::AccelerateSpecial => ModifierKind::AccelerateSpecial,
            Modifier::NeutralizeAccelerateSpecial => ModifierKind::NeutralizeAccelerateSpecial,
            Modifier::NeutralizeSlowSpecial => ModifierKind::NeutralizeSlowSpecial,
            Modifier::PreventDamageReduction => ModifierKind::PreventDamageReduction,
            Modifier::NeutralizeMapBuffs => ModifierKind::NeutralizeMapBuffs,
            Modifier::Guard => ModifierKind::Guard,
            Modifier::ForceSurvival => ModifierKind::ForceSurvival,
            Modifier::ForcedSurvival => ModifierKind::ForcedSurvival,
            Modifier::Heal { .. } => ModifierKind::Heal,
            Modifier::EffectivenessImmunity { .. } => ModifierKind::EffectivenessImmunity,
        }
    }
}

/// The set of tags attached to one participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    tags: Vec<Modifier>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, tag: Modifier) {
        self.tags.push(tag);
    }

    pub fn has(&self, kind: ModifierKind) -> bool {
        self.tags.iter().any(|tag| tag.kind() == kind)
    }

    pub fn count(&self, kind: ModifierKind) -> usize {
        self.tags.iter().filter(|tag| tag.kind() == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.tags.iter()
    }

    /// Remove and return the first tag of the given kind
    pub fn remove_first(&mut self, kind: ModifierKind) -> Option<Modifier> {
        let index = self.tags.iter().position(|tag| tag.kind() == kind)?;
        Some(self.tags.remove(index))
    }

    /// Remove every tag of the given kind, returning them in order
    pub fn remove_all(&mut self, kind: ModifierKind) -> Vec<Modifier> {
        let mut removed = Vec::new();
        self.tags.retain(|tag| {
            if tag.kind() == kind {
                removed.push(tag.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Net in-combat contribution for one stat:
    /// combat buffs + map buffs - debuffs
    pub fn stat_contribution(&self, stat: StatKind) -> i32 {
        self.tags
            .iter()
            .map(|tag| match tag {
                Modifier::CombatBuff { stat: s, amount } if *s == stat => *amount,
                Modifier::MapBuff { stat: s, amount } if *s == stat => *amount,
                Modifier::CombatDebuff { stat: s, amount } if *s == stat => -*amount,
                _ => 0,
            })
            .sum()
    }

    /// Read all damage-increase tags: (flat sum, percent sum)
    ///
    /// Round-scoped instances are consumed; persistent ones stay attached.
    pub fn take_damage_increase(&mut self) -> (i32, i32) {
        let mut flat = 0;
        let mut percent = 0;
        self.tags.retain(|tag| match tag {
            Modifier::DamageIncrease {
                amount,
                percent: p,
                scope,
            } => {
                flat += *amount;
                percent += *p;
                *scope == ModifierScope::Persistent
            }
            _ => true,
        });
        (flat, percent)
    }

    /// Read all damage-reduction tags: (flat sum, list of percents)
    ///
    /// Percents are returned individually so the caller can stack them
    /// multiplicatively. Round-scoped instances are consumed.
    pub fn take_damage_reduction(&mut self) -> (i32, Vec<i32>) {
        let mut flat = 0;
        let mut percents = Vec::new();
        self.tags.retain(|tag| match tag {
            Modifier::DamageReduction {
                amount,
                percent,
                scope,
            } => {
                flat += *amount;
                if *percent != 0 {
                    percents.push(*percent);
                }
                *scope == ModifierScope::Persistent
            }
            _ => true,
        });
        (flat, percents)
    }

    /// Effectiveness immunity targets currently attached
    pub fn immunities(&self) -> Vec<EffectiveTarget> {
        self.tags
            .iter()
            .filter_map(|tag| match tag {
                Modifier::EffectivenessImmunity { target } => Some(*target),
                _ => None,
            })
            .collect()
    }
}
