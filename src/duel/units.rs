//! Combat participants
//!
//! A combatant is the persistent unit record an exchange reads and, in
//! committing mode, writes back to. Tags live here between exchanges.

use serde::{Deserialize, Serialize};

use crate::combat::Special;
use crate::core::types::{EffectiveTarget, MoveKind, TilePos, UnitId, WeaponColor, WeaponKind};
use crate::duel::hooks::{SkillHooks, SpecialHooks};
use crate::duel::tags::ModifierSet;

/// Core stat block; hp is live and mutated by committing resolutions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub atk: i32,
    pub spd: i32,
    pub def: i32,
    pub res: i32,
}

impl Stats {
    /// Clamped hp write; every hp mutation goes through here
    pub fn set_hp(&mut self, value: i32) {
        self.hp = value.clamp(0, self.max_hp);
    }
}

/// Equipped weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub color: WeaponColor,
    pub uses_magic: bool,
    pub range: u8,
    /// Attacks twice per turn slot
    pub brave: bool,
    pub effective_against: Vec<EffectiveTarget>,
}

impl Weapon {
    pub fn new(kind: WeaponKind, color: WeaponColor, uses_magic: bool, range: u8) -> Self {
        Self {
            kind,
            color,
            uses_magic,
            range,
            brave: false,
            effective_against: Vec::new(),
        }
    }
}

/// A unit taking part in an exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: UnitId,
    pub stats: Stats,
    pub weapon: Weapon,
    pub move_kind: MoveKind,
    pub special: Option<Special>,
    /// Position is immutable during an exchange; read once for terrain
    pub tile: TilePos,
    pub tags: ModifierSet,
    /// Skill hook slots bound to equipped skills
    #[serde(skip, default)]
    pub hooks: SkillHooks,
    /// Hook slots bound to the equipped special
    #[serde(skip, default)]
    pub special_hooks: SpecialHooks,
}

impl Combatant {
    pub fn new(stats: Stats, weapon: Weapon, move_kind: MoveKind) -> Self {
        Self {
            id: UnitId::new(),
            stats,
            weapon,
            move_kind,
            special: None,
            tile: TilePos::default(),
            tags: ModifierSet::new(),
            hooks: SkillHooks::default(),
            special_hooks: SpecialHooks::default(),
        }
    }

    pub fn with_special(mut self, special: Special) -> Self {
        self.special = Some(special);
        self
    }

    pub fn at(mut self, tile: TilePos) -> Self {
        self.tile = tile;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    /// Test combatant: average infantry sword fighter
    pub fn test_sword_fighter() -> Self {
        Self::new(
            Stats {
                hp: 40,
                max_hp: 40,
                atk: 36,
                spd: 30,
                def: 25,
                res: 20,
            },
            Weapon::new(WeaponKind::Sword, WeaponColor::Red, false, 1),
            MoveKind::Infantry,
        )
    }

    /// Test combatant: slow armored lance unit
    pub fn test_armored_lancer() -> Self {
        Self::new(
            Stats {
                hp: 50,
                max_hp: 50,
                atk: 38,
                spd: 18,
                def: 36,
                res: 22,
            },
            Weapon::new(WeaponKind::Lance, WeaponColor::Blue, false, 1),
            MoveKind::Armored,
        )
    }

    /// Test combatant: fast green tome cavalry
    pub fn test_green_mage() -> Self {
        Self::new(
            Stats {
                hp: 34,
                max_hp: 34,
                atk: 32,
                spd: 34,
                def: 14,
                res: 28,
            },
            Weapon::new(WeaponKind::Tome, WeaponColor::Green, true, 2),
            MoveKind::Cavalry,
        )
    }

    /// Test combatant: colorless staff support
    pub fn test_staff_cleric() -> Self {
        Self::new(
            Stats {
                hp: 36,
                max_hp: 36,
                atk: 30,
                spd: 26,
                def: 18,
                res: 26,
            },
            Weapon::new(WeaponKind::Staff, WeaponColor::Colorless, true, 2),
            MoveKind::Infantry,
        )
    }
}
