//! Core data structures for tactical_map
//!
//! This crate provides the fundamental types for consuming a tileset
//! descriptor in a tactical grid game:
//! - `TilesetDescriptor` - The immutable tile catalog (terrains, signatures, properties)
//! - `TileDefinition` / `TileProperties` - Per-tile terrain and gameplay data
//! - `CornerSignature` - The 4-corner terrain signature used for autotiling
//! - `Grid` - Dense 2D container with `CoarseTerrainGrid` / `TileGrid` aliases
//! - JSON loading and load-time validation
//!
//! # Example
//!
//! ```rust,ignore
//! use tactical_map_core::{load_descriptor, TilesetDescriptor};
//!
//! // Load and validate a descriptor once at startup
//! let descriptor = load_descriptor("assets/terrain.tiles.json".as_ref())?;
//!
//! // Shared read-only afterwards
//! let chasm = descriptor.terrain_index("chasm").unwrap();
//! assert_eq!(descriptor.representative_tile(chasm), Some(12));
//! ```

mod descriptor;
mod format;
mod grid;
mod terrain;
mod validate;

pub use descriptor::{
    TileDefinition, TileId, TileProperties, TilesetDescriptor, DEFAULT_MOVE_COST,
};
pub use format::{
    encode_signature, parse_signature, DescriptorFile, PropertyBag, TerrainEntry, TileEntry,
};
pub use grid::{CoarseTerrainGrid, Grid, TileGrid};
pub use terrain::{corner, CornerSignature, Terrain, TerrainId, CORNER_COUNT};
pub use validate::validate_descriptor;

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating a tileset descriptor
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tile {0} is not defined in the descriptor")]
    UndefinedTile(TileId),
    #[error("corner signature references undeclared terrain index {0}")]
    UndefinedTerrain(usize),
    #[error("malformed corner signature '{0}': expected 4 comma-separated terrain indices")]
    MalformedSignature(String),
    #[error("duplicate tile id {0}")]
    DuplicateTile(TileId),
    #[error("tile {tile}: {message}")]
    InvalidProperty { tile: TileId, message: String },
}

/// Load a descriptor from a JSON file
pub fn load_descriptor(path: &Path) -> Result<TilesetDescriptor, DescriptorError> {
    let content = std::fs::read_to_string(path)?;
    parse_descriptor(&content)
}

/// Parse a descriptor from a JSON string
pub fn parse_descriptor(json: &str) -> Result<TilesetDescriptor, DescriptorError> {
    let file: DescriptorFile = serde_json::from_str(json)?;
    file.into_descriptor()
}

/// Parse a descriptor from raw bytes
pub fn descriptor_from_bytes(bytes: &[u8]) -> Result<TilesetDescriptor, DescriptorError> {
    let file: DescriptorFile = serde_json::from_slice(bytes)?;
    file.into_descriptor()
}

/// Save a descriptor to a JSON file in the wire format
pub fn save_descriptor(
    descriptor: &TilesetDescriptor,
    path: &Path,
) -> Result<(), DescriptorError> {
    let file = DescriptorFile::from_descriptor(descriptor);
    let content = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR_JSON: &str = r#"{
        "name": "terrain",
        "terrains": [
            { "name": "ground", "tile": 0 },
            { "name": "chasm", "tile": 12 }
        ],
        "tiles": [
            { "id": 0, "terrain": "0,0,0,0", "properties": { "name": "Ground" } },
            { "id": 1, "properties": { "name": "Flora", "cover": 1, "moveCost": 1 } },
            { "id": 3, "terrain": "0,0,1,0", "properties": { "name": "Ground", "moveCost": 1 } },
            { "id": 12, "terrain": "1,1,1,1", "properties": { "name": "Chasm", "moveCost": 99, "depth": "bottomless" } }
        ]
    }"#;

    #[test]
    fn test_parse_descriptor() {
        let descriptor = parse_descriptor(DESCRIPTOR_JSON).unwrap();
        assert_eq!(descriptor.name, "terrain");
        assert_eq!(descriptor.terrain_count(), 2);
        assert_eq!(descriptor.tiles.len(), 4);

        let chasm = descriptor.tile(12).unwrap();
        assert_eq!(chasm.move_cost(), 99.0);
        assert_eq!(
            chasm.corner_signature,
            Some(CornerSignature::uniform(TerrainId(1)))
        );

        // Decorative tile: cover declared, no signature
        let flora = descriptor.tile(1).unwrap();
        assert!(flora.is_decorative());
        assert_eq!(flora.cover(), 1);
    }

    #[test]
    fn test_unrecognized_properties_preserved() {
        let descriptor = parse_descriptor(DESCRIPTOR_JSON).unwrap();
        let chasm = descriptor.tile(12).unwrap();
        assert_eq!(
            chasm.properties.custom.get("depth"),
            Some(&serde_json::json!("bottomless"))
        );
    }

    #[test]
    fn test_wire_roundtrip() {
        let descriptor = parse_descriptor(DESCRIPTOR_JSON).unwrap();
        let file = DescriptorFile::from_descriptor(&descriptor);
        let json = serde_json::to_string(&file).unwrap();
        let reparsed = parse_descriptor(&json).unwrap();

        assert_eq!(descriptor.terrains, reparsed.terrains);
        assert_eq!(descriptor.tiles, reparsed.tiles);
    }

    #[test]
    fn test_undeclared_terrain_fails_at_load() {
        let json = r#"{
            "name": "broken",
            "terrains": [ { "name": "ground", "tile": 0 } ],
            "tiles": [ { "id": 0, "terrain": "0,0,7,0" } ]
        }"#;
        assert!(matches!(
            parse_descriptor(json),
            Err(DescriptorError::UndefinedTerrain(7))
        ));
    }
}
