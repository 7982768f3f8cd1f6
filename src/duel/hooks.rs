//! Skill and special hook contract
//!
//! Equipped skills extend the engine through optional function slots,
//! invoked at fixed points of the round state machine. A hook may mutate
//! the round draft and attach or remove tags on either side; the engine
//! does not validate hook side effects.

use crate::duel::tags::ModifierSet;

/// Mutable per-round scratch a hook may adjust
///
/// The engine seeds these from the acting units' tags each round; hook
/// contributions stack on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundDraft {
    /// Flat bonus to the attacker's attack power
    pub flat_increase: i32,
    /// Percent bonus to the attacker's attack power, offset from zero
    pub damage_increase_percent: i32,
    /// Accumulated flat damage reduction for the defender
    pub flat_reduction: i32,
    /// Remaining damage percent after reductions; starts at 100
    pub damage_percent: i32,
    /// Extra healing applied to the acting unit after damage
    pub healing: i32,
}

impl RoundDraft {
    pub fn new() -> Self {
        Self {
            damage_percent: 100,
            ..Self::default()
        }
    }

    /// Fold in a percentage reduction, multiplicatively and floored
    pub fn reduce_damage_percent(&mut self, reduction_percent: i32) {
        self.damage_percent = self.damage_percent * (100 - reduction_percent) / 100;
    }
}

/// Context handed to every hook: the owner's tags, the foe's tags, and the
/// round draft
pub struct HookContext<'a> {
    pub owner_tags: &'a mut ModifierSet,
    pub foe_tags: &'a mut ModifierSet,
    pub draft: &'a mut RoundDraft,
}

/// A hook slot bound to a skill instance
pub type RoundHook = fn(&mut HookContext<'_>);

/// Activation predicate for defensive specials, fed the raw damage
pub type ActivationCheck = fn(raw_damage: i32) -> bool;

/// Optional hook slots for equipped skills
///
/// Absent slots mean "no effect". Dispatch is a uniform
/// `if let Some(hook) = slot { hook(ctx) }` at each phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillHooks {
    /// Runs during before-combat setup, before the round loop
    pub on_before_combat: Option<RoundHook>,
    /// Runs when the owner takes an attacking slot
    pub on_round_attack: Option<RoundHook>,
    /// Runs when the owner defends a slot
    pub on_round_defense: Option<RoundHook>,
}

/// Hook slots for the equipped special
///
/// `triggers_on_attack`/`triggers_on_defense` declare the roles the
/// special can fire in; firing with no `on_trigger` bound is a programming
/// error the engine surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialHooks {
    pub triggers_on_attack: bool,
    pub triggers_on_defense: bool,
    pub on_trigger: Option<RoundHook>,
    /// Optional gate for defensive triggers; absent means unconditional
    pub should_activate: Option<ActivationCheck>,
}
