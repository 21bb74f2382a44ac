//! Tileset descriptor consumption for tactical grid games
//!
//! The descriptor is a fixed catalog of tiles annotated with terrain-corner
//! identifiers and gameplay properties. This crate bundles the two consumers
//! of that catalog:
//! - the autotile resolver, which turns a coarse per-cell terrain layout
//!   into concrete tile ids by corner-signature matching
//!   ([`AutotileResolver`]), and
//! - the tactical grid builder, which projects placed tiles into the
//!   movement-cost and cover grids that pathfinding and combat query
//!   ([`TacticalSnapshot`], [`TacticalGridCache`]).
//!
//! Data flow: coarse terrain grid → resolver → tile-id grid → tactical
//! builder → movement-cost/cover grids.
//!
//! # Example
//!
//! ```rust,ignore
//! use tactical_map::{
//!     load_descriptor, AutotileResolver, Grid, TacticalConfig, TacticalGridCache,
//! };
//!
//! let descriptor = load_descriptor("assets/terrain.tiles.json".as_ref())?;
//! let ground = descriptor.terrain_index("ground").unwrap();
//!
//! let coarse = Grid::filled(32, 32, ground);
//! let tiles = AutotileResolver::new(&descriptor).resolve(&coarse);
//!
//! let cache = TacticalGridCache::new(&descriptor, &tiles, TacticalConfig::default())?;
//! let grid = cache.snapshot();
//! assert!(grid.is_walkable(0, 0)?);
//! ```

pub use tactical_map_autotile::{
    corners_touching, seamless, AutotileResolver, CornerTieBreak, Direction,
};
pub use tactical_map_core::{
    corner, descriptor_from_bytes, encode_signature, load_descriptor, parse_descriptor,
    parse_signature, save_descriptor, validate_descriptor, CoarseTerrainGrid, CornerSignature,
    DescriptorError, DescriptorFile, Grid, PropertyBag, Terrain, TerrainEntry, TerrainId,
    TileDefinition, TileEntry, TileGrid, TileId, TileProperties, TilesetDescriptor, CORNER_COUNT,
    DEFAULT_MOVE_COST,
};
pub use tactical_map_grid::{
    GridError, TacticalConfig, TacticalGridCache, TacticalSnapshot,
    DEFAULT_IMPASSABLE_THRESHOLD,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// The full reference catalog: 3 terrains, 35 tiles, including the
    /// decorative marker tiles and the mislabeled flat-cliff tile.
    const REFERENCE_DESCRIPTOR: &str = r#"{
        "name": "terrain",
        "terrains": [
            { "name": "ground", "tile": 0 },
            { "name": "chasm", "tile": 12 },
            { "name": "cliff", "tile": 36 }
        ],
        "tiles": [
            { "id": 0, "terrain": "0,0,0,0", "properties": { "name": "Ground" } },
            { "id": 1, "properties": { "name": "Flora", "cover": 1, "moveCost": 1 } },
            { "id": 2, "properties": { "name": "Foliage", "cover": 2, "moveCost": 2 } },
            { "id": 3, "terrain": "0,0,1,0", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 4, "terrain": "0,0,1,1", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 5, "terrain": "0,0,0,1", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 6, "terrain": "1,1,0,1", "properties": { "name": "ground" } },
            { "id": 7, "terrain": "1,1,1,0", "properties": { "name": "ground" } },
            { "id": 8, "properties": { "name": "Obelisk" } },
            { "id": 9, "properties": { "name": "Obelisk" } },
            { "id": 10, "properties": { "name": "Obelisk" } },
            { "id": 11, "terrain": "0,1,1,0", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 12, "terrain": "1,1,1,1", "properties": { "name": "Chasm", "moveCost": 99 } },
            { "id": 13, "terrain": "1,0,0,1", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 14, "terrain": "1,0,1,1", "properties": { "name": "ground" } },
            { "id": 15, "terrain": "0,1,1,1", "properties": { "name": "ground" } },
            { "id": 16, "properties": { "name": "Ground" } },
            { "id": 17, "properties": { "name": "Ground" } },
            { "id": 18, "properties": { "name": "Spawn" } },
            { "id": 19, "terrain": "0,1,0,0", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 20, "terrain": "1,1,0,0", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 21, "terrain": "1,0,0,0", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 27, "terrain": "0,0,2,0", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 28, "terrain": "0,0,2,2", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 29, "terrain": "0,0,0,2", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 30, "terrain": "2,2,0,2", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 31, "terrain": "2,2,2,0", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 35, "terrain": "0,2,2,0", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 36, "terrain": "2,2,2,2", "properties": { "name": "Ground" } },
            { "id": 37, "terrain": "2,0,0,2", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 38, "terrain": "2,0,2,2", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 39, "terrain": "0,2,2,2", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 43, "terrain": "0,2,0,0", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 44, "terrain": "2,2,0,0", "properties": { "name": "Cliff", "moveCost": 99 } },
            { "id": 45, "terrain": "2,0,0,0", "properties": { "name": "Cliff", "moveCost": 99 } }
        ]
    }"#;

    fn reference() -> TilesetDescriptor {
        parse_descriptor(REFERENCE_DESCRIPTOR).unwrap()
    }

    #[test]
    fn test_reference_catalog_loads() {
        let descriptor = reference();
        assert_eq!(descriptor.terrain_count(), 3);
        assert_eq!(descriptor.tiles.len(), 35);
        assert_eq!(descriptor.terrain_index("cliff"), Some(TerrainId(2)));
        assert_eq!(descriptor.representative_tile(TerrainId(1)), Some(12));
    }

    #[test]
    fn test_ground_chasm_ground_end_to_end() {
        let descriptor = reference();
        let ground = descriptor.terrain_index("ground").unwrap();
        let chasm = descriptor.terrain_index("chasm").unwrap();

        let coarse = Grid::from_rows(vec![vec![ground, chasm, ground]]).unwrap();
        let tiles = AutotileResolver::new(&descriptor).resolve(&coarse);
        assert_eq!(tiles.get(0, 0), Some(&0));
        assert_eq!(tiles.get(0, 1), Some(&12));
        assert_eq!(tiles.get(0, 2), Some(&0));

        let snapshot =
            TacticalSnapshot::build(&descriptor, &tiles, TacticalConfig::default()).unwrap();
        assert_eq!(snapshot.movement_cost(0, 1), Ok(99.0));
        assert_eq!(snapshot.is_walkable(0, 1), Ok(false));
        assert_eq!(snapshot.movement_cost(0, 0), Ok(1.0));
        assert_eq!(snapshot.is_walkable(0, 0), Ok(true));
        assert_eq!(snapshot.movement_cost(0, 2), Ok(1.0));
    }

    #[test]
    fn test_cliff_block_is_an_unwalkable_ring() {
        let descriptor = reference();
        let ground = descriptor.terrain_index("ground").unwrap();
        let cliff = descriptor.terrain_index("cliff").unwrap();

        let mut coarse = Grid::filled(4, 4, ground);
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            coarse.set(row, col, cliff);
        }
        let tiles = AutotileResolver::new(&descriptor).resolve(&coarse);
        assert_eq!(tiles.get(1, 1), Some(&39));
        assert_eq!(tiles.get(1, 2), Some(&38));
        assert_eq!(tiles.get(2, 1), Some(&31));
        assert_eq!(tiles.get(2, 2), Some(&30));

        let snapshot =
            TacticalSnapshot::build(&descriptor, &tiles, TacticalConfig::default()).unwrap();
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(snapshot.is_walkable(row, col), Ok(false));
        }
        // Ground outside the block stays open
        assert_eq!(snapshot.is_walkable(0, 0), Ok(true));
        assert_eq!(snapshot.is_walkable(3, 3), Ok(true));
    }

    #[test]
    fn test_name_collisions_do_not_leak_into_gameplay() {
        let descriptor = reference();

        // The flat cliff tile is labeled "Ground" in the source data
        let flat_cliff = descriptor.tile(36).unwrap();
        assert!(flat_cliff.properties.name_matches("ground"));
        assert_eq!(
            flat_cliff.corner_signature,
            Some(CornerSignature::uniform(TerrainId(2)))
        );

        // Gameplay grids key by tile id, so the label changes nothing: the
        // flat cliff top is walkable at default cost while a cliff edge
        // sharing no name stays impassable
        let tiles = Grid::from_rows(vec![vec![36u32, 38]]).unwrap();
        let snapshot =
            TacticalSnapshot::build(&descriptor, &tiles, TacticalConfig::default()).unwrap();
        assert_eq!(snapshot.movement_cost(0, 0), Ok(1.0));
        assert_eq!(snapshot.is_walkable(0, 0), Ok(true));
        assert_eq!(snapshot.is_walkable(0, 1), Ok(false));
    }

    #[test]
    fn test_authored_decorative_overlay() {
        let descriptor = reference();
        let ground = descriptor.terrain_index("ground").unwrap();

        let coarse = Grid::filled(3, 3, ground);
        let mut tiles = AutotileResolver::new(&descriptor).resolve(&coarse);

        // Authoring stamps Foliage and a Spawn marker over the resolved layout
        tiles.set(1, 1, 2);
        tiles.set(0, 2, 18);

        let mut cache =
            TacticalGridCache::new(&descriptor, &tiles, TacticalConfig::default()).unwrap();
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.cover_level(1, 1), Ok(2));
        assert_eq!(snapshot.movement_cost(1, 1), Ok(2.0));
        // The marker declares no gameplay properties at all
        assert_eq!(snapshot.movement_cost(0, 2), Ok(1.0));
        assert_eq!(snapshot.cover_level(0, 2), Ok(0));

        // Painting the coarse layout again replaces the overlay
        let resolved = AutotileResolver::new(&descriptor).resolve(&coarse);
        cache.rebuild(&descriptor, &resolved).unwrap();
        assert_eq!(cache.snapshot().cover_level(1, 1), Ok(0));
    }

    #[test]
    fn test_resolver_output_always_builds() {
        let descriptor = reference();
        let chasm = descriptor.terrain_index("chasm").unwrap();
        let cliff = descriptor.terrain_index("cliff").unwrap();

        // A deliberately hostile checkerboard still resolves and projects
        let coarse = Grid::from_fn(8, 8, |row, col| {
            if (row + col) % 2 == 0 {
                chasm
            } else {
                cliff
            }
        });
        let tiles = AutotileResolver::new(&descriptor).resolve(&coarse);
        assert!(
            TacticalSnapshot::build(&descriptor, &tiles, TacticalConfig::default()).is_ok()
        );
    }
}
