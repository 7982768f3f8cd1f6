//! Before-combat setup phase
//!
//! Mutates the working tag sets prior to (and independent of) the round
//! loop: guard grants slow-special, sweep-style prevention sources convert
//! into the offense tag on their beneficiary, neutralize-map-buffs turns
//! opposing map buffs into equal-and-opposite combat debuffs, and
//! before-combat skill hooks settle area effects and passive hp changes.

use crate::core::error::{EngineError, Result};
use crate::core::types::UnitId;
use crate::duel::hooks::{HookContext, RoundDraft, SkillHooks};
use crate::duel::tags::{Modifier, ModifierKind, ModifierSet};

/// One side's view for the setup phase
pub struct SetupSide<'a> {
    pub id: UnitId,
    pub tags: &'a mut ModifierSet,
    pub hooks: SkillHooks,
}

fn grant_slow_special(tags: &mut ModifierSet) {
    // Attach at most one; guard itself stays for the skill layer to manage
    if tags.has(ModifierKind::Guard) && !tags.has(ModifierKind::SlowSpecial) {
        tags.attach(Modifier::SlowSpecial);
    }
}

fn convert_prevention_sources(
    holder: &mut SetupSide<'_>,
    other: &mut SetupSide<'_>,
) -> Result<()> {
    while let Some(source) = holder
        .tags
        .remove_first(ModifierKind::CounterattackPreventionSource)
    {
        let Modifier::CounterattackPreventionSource { beneficiary } = source else {
            unreachable!("remove_first returned a different kind");
        };

        if beneficiary == other.id {
            other.tags.attach(Modifier::PreventCounterattack);
        } else if beneficiary == holder.id {
            holder.tags.attach(Modifier::PreventCounterattack);
        } else {
            return Err(EngineError::UnknownUnit(beneficiary));
        }
    }
    Ok(())
}

fn convert_map_buffs(holder: &ModifierSet, foe: &mut ModifierSet) {
    if !holder.has(ModifierKind::NeutralizeMapBuffs) {
        return;
    }
    for buff in foe.remove_all(ModifierKind::MapBuff) {
        let Modifier::MapBuff { stat, amount } = buff else {
            unreachable!("remove_all returned a different kind");
        };
        foe.attach(Modifier::CombatDebuff { stat, amount });
    }
}

/// Run the whole setup phase; attacker side is processed first throughout
pub fn run_before_combat(
    attacker: &mut SetupSide<'_>,
    defender: &mut SetupSide<'_>,
) -> Result<()> {
    grant_slow_special(attacker.tags);
    grant_slow_special(defender.tags);

    convert_prevention_sources(defender, attacker)?;
    convert_prevention_sources(attacker, defender)?;

    convert_map_buffs(attacker.tags, defender.tags);
    convert_map_buffs(defender.tags, attacker.tags);

    // Area-effect / passive hp skills settle here, before any damage math
    let mut draft = RoundDraft::new();
    if let Some(hook) = attacker.hooks.on_before_combat {
        hook(&mut HookContext {
            owner_tags: attacker.tags,
            foe_tags: defender.tags,
            draft: &mut draft,
        });
    }
    if let Some(hook) = defender.hooks.on_before_combat {
        hook(&mut HookContext {
            owner_tags: defender.tags,
            foe_tags: attacker.tags,
            draft: &mut draft,
        });
    }

    Ok(())
}
