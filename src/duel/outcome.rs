//! Exchange outcome records
//!
//! A round outcome is immutable once pushed; the combat outcome is what
//! the caller (UI or outer simulation loop) receives and presents.

use serde::{Deserialize, Serialize};

use crate::core::types::UnitId;

/// One attacker/defender action within an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based position in the exchange
    pub round_number: u32,
    pub attacker_id: UnitId,
    pub defender_id: UnitId,
    /// How many turns in a row the same attacker has taken, this one
    /// included
    pub consecutive_turn: u32,
    pub damage_dealt: i32,
    pub healing_done: i32,
    pub attacker_special_triggered: bool,
    pub defender_special_triggered: bool,
    /// Cooldowns after the round, where a special is equipped
    pub attacker_cooldown: Option<i32>,
    pub defender_cooldown: Option<i32>,
}

/// Per-side summary across the whole exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSummary {
    pub id: UnitId,
    pub turns_taken: u32,
    /// Whether this side's weapon was effective against the foe
    pub effective: bool,
    /// Total damage dealt by this side
    pub damage_dealt: i32,
    pub final_hp: i32,
}

/// The full result of one exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attacker: SideSummary,
    pub defender: SideSummary,
    pub rounds: Vec<RoundOutcome>,
    /// A participant reached 0 hp and the loop terminated early
    pub kill: bool,
}

impl std::fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for round in &self.rounds {
            write!(
                f,
                "round {}: {} hits {} for {}",
                round.round_number, round.attacker_id, round.defender_id, round.damage_dealt
            )?;
            if round.healing_done > 0 {
                write!(f, " (heals {})", round.healing_done)?;
            }
            if round.attacker_special_triggered {
                write!(f, " [attacker special]")?;
            }
            if round.defender_special_triggered {
                write!(f, " [defender special]")?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "{}: {} dmg over {} turns, {} hp left",
            self.attacker.id, self.attacker.damage_dealt, self.attacker.turns_taken,
            self.attacker.final_hp
        )?;
        write!(
            f,
            "{}: {} dmg over {} turns, {} hp left{}",
            self.defender.id,
            self.defender.damage_dealt,
            self.defender.turns_taken,
            self.defender.final_hp,
            if self.kill { " -- kill" } else { "" }
        )
    }
}
