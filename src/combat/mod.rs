//! Pure combat computations
//!
//! Leaf functions consumed by the exchange engine. Everything here is
//! deterministic and side-effect free: the damage formula pair, the color
//! triangle and effectiveness lookups, the turn sequencer, and cooldown
//! tracking.

pub mod constants;
pub mod damage;
pub mod effectiveness;
pub mod special;
pub mod triangle;
pub mod turn_order;

pub use damage::{final_damage, raw_damage, RawDamageInput};
pub use effectiveness::is_effective;
pub use special::{cooldown_decrease, Special};
pub use triangle::{advantage_percent, affinity_percent, color_relationship, ColorRelation};
pub use turn_order::{turn_sequence, TurnOrderInput};
