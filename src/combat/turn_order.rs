//! Turn sequencer
//!
//! Produces the ordered list of attacker identities for a whole exchange.
//! Base order: initiator, then the defender's counter (if eligible), then
//! follow-ups in the same order. Brave weapons double every slot of their
//! holder, including follow-ups.

use crate::core::types::UnitId;

/// Everything the sequencer needs, already reduced to plain values
///
/// Speeds are post-modifier; counter eligibility and follow-up tags have
/// been read off the working tag sets by the caller.
#[derive(Debug, Clone, Copy)]
pub struct TurnOrderInput {
    pub attacker: UnitId,
    pub defender: UnitId,
    pub attacker_spd: i32,
    pub defender_spd: i32,
    pub attacker_brave: bool,
    pub defender_brave: bool,
    /// Range match or counterattack tag, minus prevention
    pub defender_can_counter: bool,
    pub attacker_guaranteed_follow_up: bool,
    pub attacker_follow_up_prevented: bool,
    pub defender_guaranteed_follow_up: bool,
    pub defender_follow_up_prevented: bool,
    /// Speed gap threshold for a natural follow-up
    pub speed_gap: i32,
}

fn follows_up(own_spd: i32, foe_spd: i32, guaranteed: bool, prevented: bool, gap: i32) -> bool {
    if prevented {
        return false;
    }
    guaranteed || own_spd - foe_spd >= gap
}

/// Build the full turn sequence for an exchange
pub fn turn_sequence(input: &TurnOrderInput) -> Vec<UnitId> {
    let mut sequence = Vec::with_capacity(6);

    let mut push = |unit: UnitId, brave: bool| {
        sequence.push(unit);
        if brave {
            sequence.push(unit);
        }
    };

    push(input.attacker, input.attacker_brave);

    if input.defender_can_counter {
        push(input.defender, input.defender_brave);
    }

    if follows_up(
        input.attacker_spd,
        input.defender_spd,
        input.attacker_guaranteed_follow_up,
        input.attacker_follow_up_prevented,
        input.speed_gap,
    ) {
        push(input.attacker, input.attacker_brave);
    }

    if input.defender_can_counter
        && follows_up(
            input.defender_spd,
            input.attacker_spd,
            input.defender_guaranteed_follow_up,
            input.defender_follow_up_prevented,
            input.speed_gap,
        )
    {
        push(input.defender, input.defender_brave);
    }

    sequence
}
