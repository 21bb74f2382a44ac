//! Terrain types and corner signatures

use serde::{Deserialize, Serialize};

use crate::descriptor::TileId;

/// Fixed corner indices used by [`CornerSignature`] and the autotile geometry.
///
/// Corners are ordered clockwise from the top-left: TL, TR, BR, BL.
pub mod corner {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_RIGHT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const BOTTOM_LEFT: usize = 3;
}

/// Number of corners in a signature.
pub const CORNER_COUNT: usize = 4;

/// Index of a declared terrain type within a [`TilesetDescriptor`](crate::TilesetDescriptor).
///
/// Corner signatures reference terrains by index, matching the descriptor's
/// comma-separated corner encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TerrainId(pub usize);

/// A declared terrain type (e.g., "ground", "chasm", "cliff")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub name: String,
    /// The canonical flat tile for this terrain, used as the autotile fallback
    pub representative_tile: TileId,
}

impl Terrain {
    pub fn new(name: String, representative_tile: TileId) -> Self {
        Self {
            name,
            representative_tile,
        }
    }
}

/// The terrain type at each of a tile's four corners, ordered TL, TR, BR, BL.
///
/// Two adjacent tiles join seamlessly when the terrains on their shared
/// corners are equal. A mismatch is a hard terrain boundary, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CornerSignature(pub [TerrainId; CORNER_COUNT]);

impl CornerSignature {
    /// Signature with the same terrain on all four corners (a "flat" tile)
    pub const fn uniform(terrain: TerrainId) -> Self {
        Self([terrain; CORNER_COUNT])
    }

    /// Terrain at a corner index (see [`corner`])
    pub fn corner(&self, index: usize) -> TerrainId {
        self.0[index]
    }

    /// Iterate the corner terrains in TL, TR, BR, BL order
    pub fn terrains(&self) -> impl Iterator<Item = TerrainId> + '_ {
        self.0.iter().copied()
    }

    /// Whether all four corners share one terrain; returns it if so
    pub fn as_uniform(&self) -> Option<TerrainId> {
        let first = self.0[0];
        self.0[1..].iter().all(|&t| t == first).then_some(first)
    }
}

impl From<[TerrainId; CORNER_COUNT]> for CornerSignature {
    fn from(corners: [TerrainId; CORNER_COUNT]) -> Self {
        Self(corners)
    }
}
