//! Specials and cooldown tracking
//!
//! A special charges by a per-round decrease and triggers when its
//! cooldown snapshot is exactly zero at the moment its owner acts or
//! defends.

use serde::{Deserialize, Serialize};

/// An equipped special ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    pub name: String,
    pub cooldown: i32,
    pub max_cooldown: i32,
}

impl Special {
    pub fn new(name: impl Into<String>, max_cooldown: i32) -> Self {
        Self {
            name: name.into(),
            cooldown: max_cooldown,
            max_cooldown,
        }
    }

    /// Ready to trigger this round?
    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Set cooldown, clamped to [0, max_cooldown]
    pub fn set_cooldown(&mut self, value: i32) {
        self.cooldown = value.clamp(0, self.max_cooldown);
    }

    /// Charge toward zero by the given decrease
    pub fn charge(&mut self, decrease: i32) {
        self.set_cooldown(self.cooldown - decrease);
    }

    /// Reset after triggering
    pub fn reset(&mut self) {
        self.cooldown = self.max_cooldown;
    }
}

/// Per-round cooldown decrease
///
/// Base 1. An unneutralized accelerate tag adds 1. A slow effect (guard)
/// first cancels any accelerate, then subtracts 1, so slow always pins the
/// decrease at zero. Never negative.
pub fn cooldown_decrease(accelerated: bool, slowed: bool) -> i32 {
    let mut decrease = 1;
    if accelerated && !slowed {
        decrease += 1;
    }
    if slowed {
        decrease -= 1;
    }
    decrease.max(0)
}
