//! Tactical grid projection and snapshot publication

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tactical_map_core::{Grid, TileDefinition, TileGrid, TilesetDescriptor};

use crate::GridError;

/// Movement cost at or above which a cell counts as unwalkable by default
pub const DEFAULT_IMPASSABLE_THRESHOLD: f32 = 99.0;

/// Policy knobs for the tactical projection
///
/// Whether the conventional 99 cost is a true sentinel or merely "very
/// expensive but technically passable" is ambiguous in the source data, so
/// the threshold is configuration rather than a hardcoded check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TacticalConfig {
    /// Cells with `movement_cost >= impassable_threshold` are unwalkable
    pub impassable_threshold: f32,
}

impl Default for TacticalConfig {
    fn default() -> Self {
        Self {
            impassable_threshold: DEFAULT_IMPASSABLE_THRESHOLD,
        }
    }
}

/// Immutable projection of a [`TileGrid`] into gameplay-queryable grids
///
/// Descriptor lookups happen once at build time; queries afterwards are pure
/// array reads, safe to share across threads for the lifetime of the
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalSnapshot {
    move_cost: Grid<f32>,
    cover: Grid<u8>,
    config: TacticalConfig,
}

impl TacticalSnapshot {
    /// Project `tiles` through the descriptor's per-tile properties
    ///
    /// An id missing from the catalog is `UndefinedTile`. The autotile
    /// resolver only emits catalog ids, but authored tile grids are
    /// re-checked here.
    pub fn build(
        descriptor: &TilesetDescriptor,
        tiles: &TileGrid,
        config: TacticalConfig,
    ) -> Result<Self, GridError> {
        let definitions: Grid<&TileDefinition> = tiles.try_map(|&id| {
            descriptor
                .get_tile(id)
                .ok_or(GridError::UndefinedTile(id))
        })?;

        Ok(Self {
            move_cost: definitions.map(|tile| tile.move_cost()),
            cover: definitions.map(|tile| tile.cover()),
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.move_cost.width()
    }

    pub fn height(&self) -> u32 {
        self.move_cost.height()
    }

    pub fn config(&self) -> TacticalConfig {
        self.config
    }

    /// Cost a pathfinder pays to enter (row, col); declared `moveCost`,
    /// defaulting to 1
    pub fn movement_cost(&self, row: u32, col: u32) -> Result<f32, GridError> {
        self.move_cost
            .get(row, col)
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Tactical cover level at (row, col); declared `cover`, defaulting to 0
    pub fn cover_level(&self, row: u32, col: u32) -> Result<u8, GridError> {
        self.cover
            .get(row, col)
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Whether movement planning may enter (row, col)
    pub fn is_walkable(&self, row: u32, col: u32) -> Result<bool, GridError> {
        Ok(self.movement_cost(row, col)? < self.config.impassable_threshold)
    }

    /// The full movement-cost grid, for consumers that batch-read
    pub fn movement_cost_grid(&self) -> &Grid<f32> {
        &self.move_cost
    }

    /// The full cover grid, for consumers that batch-read
    pub fn cover_grid(&self) -> &Grid<u8> {
        &self.cover
    }

    fn out_of_bounds(&self, row: u32, col: u32) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Single-writer, multi-reader publication of tactical snapshots
///
/// The owning map instance rebuilds synchronously whenever its tile grid
/// changes; readers hold an `Arc` handle that stays valid for the duration
/// of their query regardless of later rebuilds. Publication is an atomic
/// handle swap, so readers see either the prior snapshot or the new one,
/// never partially-updated state.
#[derive(Debug, Clone)]
pub struct TacticalGridCache {
    config: TacticalConfig,
    snapshot: Arc<TacticalSnapshot>,
}

impl TacticalGridCache {
    /// Build the initial snapshot
    pub fn new(
        descriptor: &TilesetDescriptor,
        tiles: &TileGrid,
        config: TacticalConfig,
    ) -> Result<Self, GridError> {
        Ok(Self {
            config,
            snapshot: Arc::new(TacticalSnapshot::build(descriptor, tiles, config)?),
        })
    }

    /// Recompute and publish a fresh snapshot
    ///
    /// On error the previously published snapshot stays in place.
    pub fn rebuild(
        &mut self,
        descriptor: &TilesetDescriptor,
        tiles: &TileGrid,
    ) -> Result<(), GridError> {
        self.snapshot = Arc::new(TacticalSnapshot::build(descriptor, tiles, self.config)?);
        Ok(())
    }

    /// Current snapshot handle; clone is cheap and outlives later rebuilds
    pub fn snapshot(&self) -> Arc<TacticalSnapshot> {
        Arc::clone(&self.snapshot)
    }
}
