//! Exchange resolution: the round-loop orchestrator
//!
//! Phase order per exchange: before-combat setup, neutralization, working
//! record seeding, then the round loop over the turn sequence. Every round
//! walks the same state sequence: attacker hooks, attacker special check,
//! damage modifiers, defender hooks, damage compute, defender special
//! check, apply result, terminate-on-kill.
//!
//! All mutation happens on working records that shadow the persistent
//! participants; only a committing resolution writes hp, cooldown, and tag
//! state back.

use ahash::AHashMap;

use crate::combat::{
    advantage_percent, affinity_percent, color_relationship, cooldown_decrease, final_damage,
    is_effective, raw_damage, turn_sequence, RawDamageInput, Special, TurnOrderInput,
};
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{UnitId, WeaponColor, WeaponKind};
use crate::duel::hooks::{HookContext, RoundDraft, SkillHooks, SpecialHooks};
use crate::duel::neutralize::resolve_neutralization;
use crate::duel::outcome::{CombatOutcome, RoundOutcome, SideSummary};
use crate::duel::setup::{run_before_combat, SetupSide};
use crate::duel::tags::{Modifier, ModifierKind, ModifierSet};
use crate::duel::terrain::TerrainOracle;
use crate::duel::units::Combatant;

/// Whether computed results are written back to participant state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Side-effect free: working records fully shadow persisted state
    Preview,
    /// Writes hp and cooldown back per round, tag state at exchange end
    Commit,
}

/// Per-participant working record, scoped to one exchange
///
/// Seeded from the participant at setup, discarded at exchange end. Combat
/// stats fold in buff/debuff tag contributions as they stand after the
/// setup and neutralization phases.
#[derive(Debug, Clone)]
struct RoundRecord {
    current_hp: i32,
    max_hp: i32,
    turns_taken: u32,
    consecutive_turns: u32,
    on_defensive_terrain: bool,
    effective_against_foe: bool,
    special: Option<Special>,
    tags: ModifierSet,
    atk: i32,
    spd: i32,
    def: i32,
    res: i32,
    damage_dealt: i32,
}

/// Immutable per-side facts the loop reads every round
#[derive(Clone, Copy)]
struct SideCtx {
    id: UnitId,
    uses_magic: bool,
    color: WeaponColor,
    is_staff: bool,
    hooks: SkillHooks,
    special_hooks: SpecialHooks,
}

impl SideCtx {
    fn of(unit: &Combatant) -> Self {
        Self {
            id: unit.id,
            uses_magic: unit.weapon.uses_magic,
            color: unit.weapon.color,
            is_staff: unit.weapon.kind == WeaponKind::Staff,
            hooks: unit.hooks,
            special_hooks: unit.special_hooks,
        }
    }
}

fn validate(unit: &Combatant) -> Result<()> {
    let stats = &unit.stats;
    if stats.max_hp <= 0 || stats.hp <= 0 || stats.hp > stats.max_hp {
        return Err(EngineError::InvalidParticipant(format!(
            "unit {} has hp {}/{}",
            unit.id, stats.hp, stats.max_hp
        )));
    }
    if stats.atk < 0 || stats.spd < 0 || stats.def < 0 || stats.res < 0 {
        return Err(EngineError::InvalidParticipant(format!(
            "unit {} has a negative stat",
            unit.id
        )));
    }
    if let Some(special) = &unit.special {
        if special.max_cooldown < 0
            || special.cooldown < 0
            || special.cooldown > special.max_cooldown
        {
            return Err(EngineError::InvalidParticipant(format!(
                "unit {} special '{}' cooldown {}/{} out of range",
                unit.id, special.name, special.cooldown, special.max_cooldown
            )));
        }
    }
    Ok(())
}

fn seed_record(
    unit: &Combatant,
    tags: ModifierSet,
    effective: bool,
    terrain: &dyn TerrainOracle,
) -> RoundRecord {
    use crate::duel::tags::StatKind;

    RoundRecord {
        current_hp: unit.stats.hp,
        max_hp: unit.stats.max_hp,
        turns_taken: 0,
        consecutive_turns: 0,
        on_defensive_terrain: terrain.is_defensive(unit.tile),
        effective_against_foe: effective,
        special: unit.special.clone(),
        atk: unit.stats.atk + tags.stat_contribution(StatKind::Atk),
        spd: unit.stats.spd + tags.stat_contribution(StatKind::Spd),
        def: unit.stats.def + tags.stat_contribution(StatKind::Def),
        res: unit.stats.res + tags.stat_contribution(StatKind::Res),
        damage_dealt: 0,
        tags,
    }
}

fn split_pair(
    records: &mut [RoundRecord; 2],
    actor_index: usize,
) -> (&mut RoundRecord, &mut RoundRecord) {
    let (first, second) = records.split_at_mut(1);
    if actor_index == 0 {
        (&mut first[0], &mut second[0])
    } else {
        (&mut second[0], &mut first[0])
    }
}

/// Advance a special that did not trigger this round
fn charge_special(record: &mut RoundRecord) {
    let accelerated = record.tags.has(ModifierKind::AccelerateSpecial);
    let slowed = record.tags.has(ModifierKind::SlowSpecial);
    if let Some(special) = record.special.as_mut() {
        special.charge(cooldown_decrease(accelerated, slowed));
    }
}

/// Resolve one full exchange between two participants
///
/// In `Preview` mode this never mutates either participant; the returned
/// round outcomes are identical to what a committing run would produce
/// from the same starting state.
pub fn resolve_exchange(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    terrain: &dyn TerrainOracle,
    config: &EngineConfig,
    mode: ResolutionMode,
) -> Result<CombatOutcome> {
    validate(attacker)?;
    validate(defender)?;
    if attacker.id == defender.id {
        return Err(EngineError::InvalidParticipant(format!(
            "unit {} cannot fight itself",
            attacker.id
        )));
    }

    let attacker_ctx = SideCtx::of(attacker);
    let defender_ctx = SideCtx::of(defender);

    // Working tag copies; persisted tags are untouched until write-back
    let mut attacker_tags = attacker.tags.clone();
    let mut defender_tags = defender.tags.clone();

    // Phase 1: before-combat setup
    run_before_combat(
        &mut SetupSide {
            id: attacker.id,
            tags: &mut attacker_tags,
            hooks: attacker_ctx.hooks,
        },
        &mut SetupSide {
            id: defender.id,
            tags: &mut defender_tags,
            hooks: defender_ctx.hooks,
        },
    )?;

    // Phase 2: paired neutralization
    resolve_neutralization(&mut attacker_tags, &mut defender_tags);

    // Phase 3: seed working records; effectiveness reads post-phase
    // immunity tags
    let attacker_effective = is_effective(
        &attacker.weapon.effective_against,
        defender.move_kind,
        defender.weapon.kind,
        &defender_tags.immunities(),
    );
    let defender_effective = is_effective(
        &defender.weapon.effective_against,
        attacker.move_kind,
        attacker.weapon.kind,
        &attacker_tags.immunities(),
    );
    let mut records = [
        seed_record(attacker, attacker_tags, attacker_effective, terrain),
        seed_record(defender, defender_tags, defender_effective, terrain),
    ];
    let index: AHashMap<UnitId, usize> =
        [(attacker.id, 0), (defender.id, 1)].into_iter().collect();

    // Counter eligibility and follow-ups read the post-phase tag state
    let defender_can_counter = (defender.weapon.range == attacker.weapon.range
        || records[1].tags.has(ModifierKind::Counterattack))
        && !records[0].tags.has(ModifierKind::PreventCounterattack);

    let sequence = turn_sequence(&TurnOrderInput {
        attacker: attacker.id,
        defender: defender.id,
        attacker_spd: records[0].spd,
        defender_spd: records[1].spd,
        attacker_brave: attacker.weapon.brave,
        defender_brave: defender.weapon.brave,
        defender_can_counter,
        attacker_guaranteed_follow_up: records[0].tags.has(ModifierKind::GuaranteedFollowUp),
        attacker_follow_up_prevented: records[0].tags.has(ModifierKind::PreventFollowUp),
        defender_guaranteed_follow_up: records[1].tags.has(ModifierKind::GuaranteedFollowUp),
        defender_follow_up_prevented: records[1].tags.has(ModifierKind::PreventFollowUp),
        speed_gap: config.follow_up_speed_gap,
    });
    if sequence.is_empty() {
        return Err(EngineError::EmptyTurnSequence);
    }

    tracing::debug!(
        attacker = %attacker.id,
        defender = %defender.id,
        slots = sequence.len(),
        preview = matches!(mode, ResolutionMode::Preview),
        "resolving exchange"
    );

    let mut rounds: Vec<RoundOutcome> = Vec::with_capacity(sequence.len());
    let mut kill = false;
    let mut previous_actor: Option<UnitId> = None;

    for (slot, &actor_id) in sequence.iter().enumerate() {
        let actor_index = *index
            .get(&actor_id)
            .ok_or(EngineError::UnknownUnit(actor_id))?;
        let (actor_ctx, target_ctx) = if actor_id == attacker_ctx.id {
            (attacker_ctx, defender_ctx)
        } else {
            (defender_ctx, attacker_ctx)
        };
        let (actor, target) = split_pair(&mut records, actor_index);

        // RoundStart: turn and consecutive-turn bookkeeping
        actor.turns_taken += 1;
        if previous_actor == Some(actor_id) {
            actor.consecutive_turns += 1;
        } else {
            actor.consecutive_turns = 1;
            target.consecutive_turns = 0;
        }

        let mut draft = RoundDraft::new();

        // AttackerHooks
        if let Some(hook) = actor_ctx.hooks.on_round_attack {
            hook(&mut HookContext {
                owner_tags: &mut actor.tags,
                foe_tags: &mut target.tags,
                draft: &mut draft,
            });
        }

        // AttackerSpecialCheck
        let mut attacker_triggered = false;
        let attack_ready = actor.special.as_ref().is_some_and(Special::is_ready);
        if actor.special.is_some() {
            if attack_ready && actor_ctx.special_hooks.triggers_on_attack {
                let name = actor
                    .special
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                let hook = actor_ctx
                    .special_hooks
                    .on_trigger
                    .ok_or(EngineError::MissingSpecialHooks(name))?;
                hook(&mut HookContext {
                    owner_tags: &mut actor.tags,
                    foe_tags: &mut target.tags,
                    draft: &mut draft,
                });
                if let Some(special) = actor.special.as_mut() {
                    special.reset();
                }
                attacker_triggered = true;
            } else {
                charge_special(actor);
            }
        }

        // Damage-increase modifiers on the attacker; round-scoped consumed
        let (flat_increase, percent_increase) = actor.tags.take_damage_increase();
        draft.flat_increase += flat_increase;
        draft.damage_increase_percent += percent_increase;

        // DefenderHooks
        if let Some(hook) = target_ctx.hooks.on_round_defense {
            hook(&mut HookContext {
                owner_tags: &mut target.tags,
                foe_tags: &mut actor.tags,
                draft: &mut draft,
            });
        }

        // Targeted defense stat
        let def_stat = if actor.tags.has(ModifierKind::TargetLowestDefense) {
            target.def.min(target.res)
        } else if actor_ctx.uses_magic {
            target.res
        } else {
            target.def
        };

        // Damage-reduction modifiers on the defender; round-scoped consumed
        let (flat_reduction, reduction_percents) = target.tags.take_damage_reduction();
        draft.flat_reduction += flat_reduction;
        for percent in reduction_percents {
            draft.reduce_damage_percent(percent);
        }

        // Advantage always; affinity only when a tag forces it
        let advantage =
            advantage_percent(actor_ctx.color, target_ctx.color, config.triangle_advantage_percent);
        let attacker_guaranteed = actor.tags.has(ModifierKind::GuaranteedAffinity);
        let defender_guaranteed = target.tags.has(ModifierKind::GuaranteedAffinity);
        let either_applied = actor.tags.has(ModifierKind::AppliedAffinity)
            || target.tags.has(ModifierKind::AppliedAffinity);
        let affinity = if attacker_guaranteed || defender_guaranteed || either_applied {
            affinity_percent(
                color_relationship(actor_ctx.color, target_ctx.color),
                attacker_guaranteed,
                defender_guaranteed,
                either_applied,
                config.affinity_percent,
            )
        } else {
            0
        };

        let staff_penalty =
            actor_ctx.is_staff && !actor.tags.has(ModifierKind::StaffDamageNormalize);

        // DamageCompute
        let raw = raw_damage(&RawDamageInput {
            atk: actor.atk,
            advantage,
            affinity,
            effective: actor.effective_against_foe,
            def: def_stat,
            defensive_terrain: target.on_defensive_terrain,
            damage_increase_percent: draft.damage_increase_percent,
            flat_increase: draft.flat_increase,
            staff_penalty,
        });

        // DefenderSpecialCheck: raw damage feeds the activation predicate
        let mut defender_triggered = false;
        let defense_ready = target.special.as_ref().is_some_and(Special::is_ready);
        if target.special.is_some() {
            let activates = target_ctx
                .special_hooks
                .should_activate
                .map_or(true, |gate| gate(raw));
            if defense_ready && target_ctx.special_hooks.triggers_on_defense && activates {
                let name = target
                    .special
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                let hook = target_ctx
                    .special_hooks
                    .on_trigger
                    .ok_or(EngineError::MissingSpecialHooks(name))?;
                hook(&mut HookContext {
                    owner_tags: &mut target.tags,
                    foe_tags: &mut actor.tags,
                    draft: &mut draft,
                });
                if let Some(special) = target.special.as_mut() {
                    special.reset();
                }
                defender_triggered = true;
            } else {
                charge_special(target);
            }
        }

        let applied = final_damage(raw, draft.flat_reduction, draft.damage_percent);

        // ApplyResult: damage, force-survival, heals
        let mut new_hp = target.current_hp - applied;
        if new_hp < 1 && target.tags.has(ModifierKind::ForceSurvival) {
            target.tags.remove_first(ModifierKind::ForceSurvival);
            target.tags.attach(Modifier::ForcedSurvival);
            new_hp = 1;
        }
        target.current_hp = new_hp.clamp(0, target.max_hp);

        let mut healing_requested = draft.healing;
        for tag in actor.tags.remove_all(ModifierKind::Heal) {
            if let Modifier::Heal {
                amount,
                percent_of_damage,
            } = tag
            {
                healing_requested += amount + applied * percent_of_damage / 100;
            }
        }
        let hp_before_heal = actor.current_hp;
        if healing_requested > 0 {
            actor.current_hp = (actor.current_hp + healing_requested).min(actor.max_hp);
        }
        let healing_done = actor.current_hp - hp_before_heal;

        actor.damage_dealt += applied;

        rounds.push(RoundOutcome {
            round_number: (slot + 1) as u32,
            attacker_id: actor_id,
            defender_id: target_ctx.id,
            consecutive_turn: actor.consecutive_turns,
            damage_dealt: applied,
            healing_done,
            attacker_special_triggered: attacker_triggered,
            defender_special_triggered: defender_triggered,
            attacker_cooldown: actor.special.as_ref().map(|s| s.cooldown),
            defender_cooldown: target.special.as_ref().map(|s| s.cooldown),
        });

        tracing::trace!(
            slot,
            actor = %actor_id,
            raw,
            applied,
            target_hp = target.current_hp,
            "round resolved"
        );

        // Committing mode persists hp and cooldown as the round ends
        if mode == ResolutionMode::Commit {
            let (actor_unit, target_unit) = if actor_id == attacker.id {
                (&mut *attacker, &mut *defender)
            } else {
                (&mut *defender, &mut *attacker)
            };
            actor_unit.stats.set_hp(actor.current_hp);
            target_unit.stats.set_hp(target.current_hp);
            if let (Some(record_special), Some(special)) =
                (actor.special.as_ref(), actor_unit.special.as_mut())
            {
                special.set_cooldown(record_special.cooldown);
            }
            if let (Some(record_special), Some(special)) =
                (target.special.as_ref(), target_unit.special.as_mut())
            {
                special.set_cooldown(record_special.cooldown);
            }
        }

        // Terminate: a kill cancels every remaining scheduled turn
        if target.current_hp == 0 {
            kill = true;
            break;
        }

        previous_actor = Some(actor_id);
    }

    // Committing mode writes the mutated tag state back at exchange end
    if mode == ResolutionMode::Commit {
        attacker.tags = records[0].tags.clone();
        defender.tags = records[1].tags.clone();
    }

    Ok(CombatOutcome {
        attacker: SideSummary {
            id: attacker.id,
            turns_taken: records[0].turns_taken,
            effective: records[0].effective_against_foe,
            damage_dealt: records[0].damage_dealt,
            final_hp: records[0].current_hp,
        },
        defender: SideSummary {
            id: defender.id,
            turns_taken: records[1].turns_taken,
            effective: records[1].effective_against_foe,
            damage_dealt: records[1].damage_dealt,
            final_hp: records[1].current_hp,
        },
        rounds,
        kill,
    })
}

/// Preview an exchange without touching either participant
pub fn preview_exchange(
    attacker: &Combatant,
    defender: &Combatant,
    terrain: &dyn TerrainOracle,
    config: &EngineConfig,
) -> Result<CombatOutcome> {
    let mut attacker = attacker.clone();
    let mut defender = defender.clone();
    resolve_exchange(
        &mut attacker,
        &mut defender,
        terrain,
        config,
        ResolutionMode::Preview,
    )
}
