//! Terrain query consumed at exchange setup
//!
//! The engine reads exactly one thing from the map: whether each
//! participant's tile grants a defensive bonus. Read once per exchange;
//! position never changes mid-exchange.

use ahash::AHashSet;

use crate::core::types::TilePos;

/// Map-side answer to "is this tile defensive?"
pub trait TerrainOracle {
    fn is_defensive(&self, tile: TilePos) -> bool;
}

/// Terrain with an explicit set of defensive tiles
#[derive(Debug, Clone, Default)]
pub struct GridTerrain {
    defensive: AHashSet<TilePos>,
}

impl GridTerrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_defensive(&mut self, tile: TilePos) {
        self.defensive.insert(tile);
    }
}

impl TerrainOracle for GridTerrain {
    fn is_defensive(&self, tile: TilePos) -> bool {
        self.defensive.contains(&tile)
    }
}

/// Featureless terrain; no tile is defensive
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenField;

impl TerrainOracle for OpenField {
    fn is_defensive(&self, _tile: TilePos) -> bool {
        false
    }
}
