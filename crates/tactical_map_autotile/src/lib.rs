//! Corner-terrain autotile system
//!
//! This crate turns an author-facing coarse terrain layout into concrete tile
//! ids by matching each cell's desired 4-corner terrain signature against the
//! tileset descriptor's catalog.
//!
//! # Features
//! - Fixed corner adjacency geometry for all 8 neighbor directions
//! - Exact-match resolution with a deterministic lowest-id tie-break
//! - Flat-representative fallback, so resolution is total
//! - Configurable corner-majority tie-break policy
//!
//! # Example
//!
//! ```rust,ignore
//! use tactical_map_autotile::AutotileResolver;
//! use tactical_map_core::{Grid, TilesetDescriptor};
//!
//! let descriptor: TilesetDescriptor = /* loaded once at startup */;
//! let ground = descriptor.terrain_index("ground").unwrap();
//! let chasm = descriptor.terrain_index("chasm").unwrap();
//!
//! let coarse = Grid::from_rows(vec![vec![ground, chasm, ground]]).unwrap();
//! let tiles = AutotileResolver::new(&descriptor).resolve(&coarse);
//! ```

mod corner;
mod resolver;

pub use corner::{corners_touching, seamless, Direction};
pub use resolver::{AutotileResolver, CornerTieBreak};
