//! Exchange machinery: participants, tags, hooks, phases, orchestrator

pub mod engine;
pub mod hooks;
pub mod neutralize;
pub mod outcome;
pub mod setup;
pub mod tags;
pub mod terrain;
pub mod units;

pub use engine::{preview_exchange, resolve_exchange, ResolutionMode};
pub use hooks::{HookContext, RoundDraft, SkillHooks, SpecialHooks};
pub use outcome::{CombatOutcome, RoundOutcome, SideSummary};
pub use tags::{Modifier, ModifierKind, ModifierScope, ModifierSet, StatKind};
pub use terrain::{GridTerrain, OpenField, TerrainOracle};
pub use units::{Combatant, Stats, Weapon};
