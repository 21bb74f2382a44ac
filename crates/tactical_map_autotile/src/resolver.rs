//! Terrain autotile resolver
//!
//! Maps a coarse per-cell terrain layout to concrete tile ids by matching
//! corner signatures. Each cell resolves independently from the immutable
//! descriptor and a read-only snapshot of the coarse grid, so resolution is
//! deterministic and order-insensitive.

use serde::{Deserialize, Serialize};
use tactical_map_core::{
    CoarseTerrainGrid, CornerSignature, TerrainId, TileGrid, TileId, TilesetDescriptor,
};

/// Policy for breaking ties in the corner-majority vote
///
/// The descriptor data does not disambiguate designer intent here, so the
/// rule is configuration rather than a hardcoded assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CornerTieBreak {
    /// The cell's own coarse terrain wins any tie it participates in;
    /// remaining ties fall to the lowest tied terrain id
    #[default]
    PreferOwn,
    /// The lowest tied terrain id wins, even against the cell's own terrain
    PreferLowest,
}

/// Resolves a [`CoarseTerrainGrid`] into a [`TileGrid`] against a descriptor
pub struct AutotileResolver<'a> {
    descriptor: &'a TilesetDescriptor,
    tie_break: CornerTieBreak,
}

impl<'a> AutotileResolver<'a> {
    pub fn new(descriptor: &'a TilesetDescriptor) -> Self {
        Self {
            descriptor,
            tie_break: CornerTieBreak::default(),
        }
    }

    /// Override the corner tie-break policy
    pub fn with_tie_break(mut self, tie_break: CornerTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Resolve every cell of the coarse grid
    ///
    /// Total: cells with no exact signature match fall back to their
    /// terrain's flat representative tile, so the output always covers the
    /// full extent with catalog tile ids.
    pub fn resolve(&self, coarse: &CoarseTerrainGrid) -> TileGrid {
        TileGrid::from_fn(coarse.width(), coarse.height(), |row, col| {
            let own = sample(coarse, TerrainId::default(), row as i64, col as i64);
            self.resolve_with(coarse, own, row, col)
        })
    }

    /// Resolve a single cell; `None` when (row, col) is outside the grid
    pub fn resolve_cell(
        &self,
        coarse: &CoarseTerrainGrid,
        row: u32,
        col: u32,
    ) -> Option<TileId> {
        let own = *coarse.get(row, col)?;
        Some(self.resolve_with(coarse, own, row, col))
    }

    /// The signature a cell wants, from the terrain of the cells around each
    /// corner; `None` when (row, col) is outside the grid
    pub fn desired_signature(
        &self,
        coarse: &CoarseTerrainGrid,
        row: u32,
        col: u32,
    ) -> Option<CornerSignature> {
        let own = *coarse.get(row, col)?;
        Some(self.signature_with(coarse, own, row, col))
    }

    fn resolve_with(
        &self,
        coarse: &CoarseTerrainGrid,
        own: TerrainId,
        row: u32,
        col: u32,
    ) -> TileId {
        let desired = self.signature_with(coarse, own, row, col);

        // Exact signature match, lowest id first (descriptor iterates in
        // ascending id order). Decorative tiles carry no signature and are
        // never candidates.
        if let Some((tile, _)) = self
            .descriptor
            .tiles_with_signatures()
            .find(|(_, signature)| *signature == desired)
        {
            return tile.id;
        }

        // No exact match: the cell terrain's flat representative. Coarse
        // grids are expected to reference declared terrains only; undeclared
        // ids fall back to tile 0.
        self.descriptor.representative_tile(own).unwrap_or_default()
    }

    /// Desired signature with the cell's own terrain already sampled
    fn signature_with(
        &self,
        coarse: &CoarseTerrainGrid,
        own: TerrainId,
        row: u32,
        col: u32,
    ) -> CornerSignature {
        let (row, col) = (row as i64, col as i64);
        // Lattice points of the cell's corners in TL, TR, BR, BL order
        let lattice = [
            (row, col),
            (row, col + 1),
            (row + 1, col + 1),
            (row + 1, col),
        ];
        CornerSignature(lattice.map(|(lr, lc)| self.majority_at(coarse, own, lr, lc)))
    }

    /// Majority terrain among the four cells sharing a lattice point
    ///
    /// Out-of-bounds cells count as the resolving cell's own terrain, padding
    /// the grid with its border terrain so edge cells resolve flat unless
    /// interior terrain differs.
    fn majority_at(
        &self,
        coarse: &CoarseTerrainGrid,
        own: TerrainId,
        lattice_row: i64,
        lattice_col: i64,
    ) -> TerrainId {
        let samples = [
            sample(coarse, own, lattice_row - 1, lattice_col - 1),
            sample(coarse, own, lattice_row - 1, lattice_col),
            sample(coarse, own, lattice_row, lattice_col - 1),
            sample(coarse, own, lattice_row, lattice_col),
        ];

        let mut counts: Vec<(TerrainId, u8)> = Vec::with_capacity(4);
        for terrain in samples {
            match counts.iter_mut().find(|(t, _)| *t == terrain) {
                Some((_, n)) => *n += 1,
                None => counts.push((terrain, 1)),
            }
        }

        let best = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
        let leaders = counts
            .iter()
            .filter(|&&(_, n)| n == best)
            .map(|&(terrain, _)| terrain);

        match self.tie_break {
            CornerTieBreak::PreferOwn if leaders.clone().any(|t| t == own) => own,
            _ => leaders.min().unwrap_or(own),
        }
    }
}

/// Coarse terrain at (row, col), or `own` when outside the grid
fn sample(coarse: &CoarseTerrainGrid, own: TerrainId, row: i64, col: i64) -> TerrainId {
    if row < 0 || col < 0 {
        return own;
    }
    coarse
        .get(row as u32, col as u32)
        .copied()
        .unwrap_or(own)
}
