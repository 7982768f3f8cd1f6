//! Core type definitions shared across the engine

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for combat participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short prefix is enough to tell two duelists apart in a log line
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Map tile coordinate, read once per exchange for the terrain query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Weapon color for the advantage triangle
///
/// Red beats green, green beats blue, blue beats red.
/// Colorless is neutral against everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponColor {
    Red,
    Blue,
    Green,
    Colorless,
}

/// Movement class of a unit (effectiveness target)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Infantry,
    Armored,
    Cavalry,
    Flier,
}

/// Weapon class (effectiveness target, staff penalty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Lance,
    Axe,
    Bow,
    Dagger,
    Tome,
    Staff,
    Breath,
}

/// What a weapon or skill can be marked effective against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveTarget {
    Movement(MoveKind),
    Weapon(WeaponKind),
}
