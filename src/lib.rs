//! Emberclash - deterministic combat exchange resolution
//!
//! Resolves a single combat exchange between two opposing units of a
//! turn-based tactics simulation: given both participants' stats, equipped
//! abilities, and map context, it produces a deterministic sequence of
//! attack rounds with damage, healing, special activations, and lethality.
//!
//! The host simulation decides which two units fight and owns the skill
//! catalog; this crate owns the protocol by which skills are invoked (the
//! hook contract) and every numeric rule in between.

pub mod combat;
pub mod core;
pub mod duel;
