//! Tactical grid builder for tactical_map
//!
//! Projects a placed-tile grid into the movement-cost and cover grids that
//! pathfinding and targeting query. The projection is stateless: a
//! [`TacticalSnapshot`] is computed once per tile-grid change and read
//! lock-free afterwards, with [`TacticalGridCache`] handling publication.
//!
//! # Example
//!
//! ```rust,ignore
//! use tactical_map_grid::{TacticalConfig, TacticalGridCache};
//!
//! let mut cache = TacticalGridCache::new(&descriptor, &tiles, TacticalConfig::default())?;
//! let grid = cache.snapshot();
//! if grid.is_walkable(row, col)? {
//!     let cost = grid.movement_cost(row, col)?;
//!     // feed the pathfinder
//! }
//! ```

mod snapshot;

pub use snapshot::{
    TacticalConfig, TacticalGridCache, TacticalSnapshot, DEFAULT_IMPASSABLE_THRESHOLD,
};

use thiserror::Error;

/// Errors for tactical grid construction and queries
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Query outside the grid extent; surfaced to the caller, never clamped
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
    /// A tile grid referenced an id with no definition in the descriptor
    #[error("tile {0} is not defined in the descriptor")]
    UndefinedTile(u32),
}
