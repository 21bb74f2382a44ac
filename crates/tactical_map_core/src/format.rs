//! JSON wire format for tileset descriptors
//!
//! The asset pipeline hands this core a parsed descriptor whose corner data
//! is a comma-separated terrain-index string per tile (one index per corner,
//! TL,TR,BR,BL) and whose gameplay data is a property bag with recognized
//! keys `name`, `moveCost` and `cover`. This module models that wire shape
//! and converts it into a validated [`TilesetDescriptor`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::descriptor::{TileDefinition, TileProperties, TilesetDescriptor};
use crate::terrain::{CornerSignature, TerrainId, CORNER_COUNT};
use crate::DescriptorError;

/// Top-level wire form of a descriptor file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorFile {
    pub name: String,
    pub terrains: Vec<TerrainEntry>,
    pub tiles: Vec<TileEntry>,
}

/// A declared terrain type with its canonical flat tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainEntry {
    pub name: String,
    pub tile: u32,
}

/// One tile record as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileEntry {
    pub id: u32,
    /// Comma-separated corner terrain indices, TL,TR,BR,BL (e.g. `"0,0,1,0"`).
    /// Absent for decorative tiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    #[serde(default)]
    pub properties: PropertyBag,
}

/// The tile property bag: recognized keys become typed fields, everything
/// else lands in `extra` and is preserved untouched
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropertyBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "moveCost", default, skip_serializing_if = "Option::is_none")]
    pub move_cost: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<u8>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl DescriptorFile {
    /// Convert the wire form into a validated [`TilesetDescriptor`]
    pub fn into_descriptor(self) -> Result<TilesetDescriptor, DescriptorError> {
        let mut descriptor = TilesetDescriptor::new(self.name);

        for entry in self.terrains {
            descriptor.add_terrain(entry.name, entry.tile);
        }

        for entry in self.tiles {
            if descriptor.tiles.contains_key(&entry.id) {
                return Err(DescriptorError::DuplicateTile(entry.id));
            }

            let mut tile = TileDefinition::new(entry.id);
            if let Some(encoded) = &entry.terrain {
                tile.corner_signature = Some(parse_signature(encoded)?);
            }
            tile.properties = TileProperties {
                name: entry.properties.name,
                move_cost: entry.properties.move_cost,
                cover: entry.properties.cover,
                custom: entry.properties.extra,
            };
            descriptor.add_tile(tile);
        }

        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Re-encode a descriptor into the wire form
    pub fn from_descriptor(descriptor: &TilesetDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            terrains: descriptor
                .terrains
                .iter()
                .map(|t| TerrainEntry {
                    name: t.name.clone(),
                    tile: t.representative_tile,
                })
                .collect(),
            tiles: descriptor
                .tiles
                .values()
                .map(|tile| TileEntry {
                    id: tile.id,
                    terrain: tile.corner_signature.map(encode_signature),
                    properties: PropertyBag {
                        name: tile.properties.name.clone(),
                        move_cost: tile.properties.move_cost,
                        cover: tile.properties.cover,
                        extra: tile.properties.custom.clone(),
                    },
                })
                .collect(),
        }
    }
}

/// Parse a comma-separated corner encoding into a [`CornerSignature`]
pub fn parse_signature(encoded: &str) -> Result<CornerSignature, DescriptorError> {
    let mut corners = [TerrainId(0); CORNER_COUNT];
    let mut count = 0;

    for part in encoded.split(',') {
        let index: usize = part
            .trim()
            .parse()
            .map_err(|_| DescriptorError::MalformedSignature(encoded.to_string()))?;
        if count == CORNER_COUNT {
            return Err(DescriptorError::MalformedSignature(encoded.to_string()));
        }
        corners[count] = TerrainId(index);
        count += 1;
    }

    if count != CORNER_COUNT {
        return Err(DescriptorError::MalformedSignature(encoded.to_string()));
    }
    Ok(CornerSignature(corners))
}

/// Encode a [`CornerSignature`] back into the comma-separated wire form
pub fn encode_signature(signature: CornerSignature) -> String {
    signature
        .terrains()
        .map(|t| t.0.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
