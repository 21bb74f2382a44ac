//! Tileset descriptor: the immutable tile catalog with terrain and gameplay data

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::terrain::{CornerSignature, Terrain, TerrainId};
use crate::DescriptorError;

/// Stable tile identifier within a descriptor
pub type TileId = u32;

/// Movement cost used when a tile declares none
pub const DEFAULT_MOVE_COST: f32 = 1.0;

/// Per-tile gameplay properties with documented defaults
///
/// The descriptor's source format is a loosely-typed property bag; the
/// recognized keys are modeled as explicit optional fields so a typo cannot
/// silently change gameplay values. Unrecognized keys are preserved in
/// `custom` and ignored by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TileProperties {
    /// Display label. Not gameplay-authoritative: several tiles share a name,
    /// and "Ground" vs "ground" must compare equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cost a pathfinder pays to enter a cell with this tile (default 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_cost: Option<f32>,
    /// Tactical cover level granted by this tile (default 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<u8>,
    /// Unrecognized source properties, preserved but not interpreted
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, serde_json::Value>,
}

impl TileProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the movement cost
    pub fn with_move_cost(mut self, cost: f32) -> Self {
        self.move_cost = Some(cost);
        self
    }

    /// Set the cover level
    pub fn with_cover(mut self, cover: u8) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Set a custom (unrecognized) property
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }

    /// Case-insensitive display-name comparison
    pub fn name_matches(&self, other: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(other))
    }

    /// Check if any properties are set (non-default)
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.move_cost.is_none() && self.cover.is_none() && self.custom.is_empty()
    }
}

/// One tile in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDefinition {
    pub id: TileId,
    /// Terrain at the tile's four corners. `None` marks a decorative/special
    /// tile that only explicit authoring may place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_signature: Option<CornerSignature>,
    #[serde(default)]
    pub properties: TileProperties,
}

impl TileDefinition {
    pub fn new(id: TileId) -> Self {
        Self {
            id,
            corner_signature: None,
            properties: TileProperties::default(),
        }
    }

    /// Attach a corner signature
    pub fn with_signature(mut self, signature: CornerSignature) -> Self {
        self.corner_signature = Some(signature);
        self
    }

    /// Attach gameplay properties
    pub fn with_properties(mut self, properties: TileProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Declared movement cost, defaulting to [`DEFAULT_MOVE_COST`]
    pub fn move_cost(&self) -> f32 {
        self.properties.move_cost.unwrap_or(DEFAULT_MOVE_COST)
    }

    /// Declared cover level, defaulting to 0
    pub fn cover(&self) -> u8 {
        self.properties.cover.unwrap_or(0)
    }

    /// Display label, if any
    pub fn display_name(&self) -> Option<&str> {
        self.properties.name.as_deref()
    }

    /// Tiles without a corner signature are never chosen by autotiling
    pub fn is_decorative(&self) -> bool {
        self.corner_signature.is_none()
    }
}

/// The immutable tile catalog: declared terrains plus one [`TileDefinition`]
/// per tile id
///
/// Loaded and validated once (see [`crate::parse_descriptor`]), then shared
/// read-only for the rest of the session. Tiles are keyed in a `BTreeMap` so
/// iteration is in ascending id order; the autotile resolver's lowest-id
/// tie-break relies on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilesetDescriptor {
    pub id: Uuid,
    pub name: String,
    /// Declared terrain types, indexed by [`TerrainId`]
    pub terrains: Vec<Terrain>,
    /// Tile catalog keyed by id
    pub tiles: BTreeMap<TileId, TileDefinition>,
}

impl TilesetDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            terrains: Vec::new(),
            tiles: BTreeMap::new(),
        }
    }

    /// Declare a terrain type and return its id
    pub fn add_terrain(
        &mut self,
        name: impl Into<String>,
        representative_tile: TileId,
    ) -> TerrainId {
        self.terrains.push(Terrain::new(name.into(), representative_tile));
        TerrainId(self.terrains.len() - 1)
    }

    /// Insert a tile definition, replacing any previous definition with the same id
    pub fn add_tile(&mut self, tile: TileDefinition) {
        self.tiles.insert(tile.id, tile);
    }

    /// Get a declared terrain
    pub fn terrain(&self, id: TerrainId) -> Option<&Terrain> {
        self.terrains.get(id.0)
    }

    /// Look up a terrain id by name (case-insensitive, matching how display
    /// names collide in source data)
    pub fn terrain_index(&self, name: &str) -> Option<TerrainId> {
        self.terrains
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
            .map(TerrainId)
    }

    /// Number of declared terrains
    pub fn terrain_count(&self) -> usize {
        self.terrains.len()
    }

    /// Get a tile definition, or `UndefinedTile` when the id is not in the catalog
    pub fn tile(&self, id: TileId) -> Result<&TileDefinition, DescriptorError> {
        self.tiles.get(&id).ok_or(DescriptorError::UndefinedTile(id))
    }

    /// Get a tile definition without the error path
    pub fn get_tile(&self, id: TileId) -> Option<&TileDefinition> {
        self.tiles.get(&id)
    }

    /// Corner signature of a tile: `UndefinedTile` for unknown ids, `None`
    /// for decorative tiles
    pub fn signature_of(&self, id: TileId) -> Result<Option<CornerSignature>, DescriptorError> {
        Ok(self.tile(id)?.corner_signature)
    }

    /// The canonical flat tile for a terrain
    pub fn representative_tile(&self, terrain: TerrainId) -> Option<TileId> {
        self.terrain(terrain).map(|t| t.representative_tile)
    }

    /// Iterate non-decorative tiles in ascending id order
    pub fn tiles_with_signatures(
        &self,
    ) -> impl Iterator<Item = (&TileDefinition, CornerSignature)> {
        self.tiles
            .values()
            .filter_map(|tile| tile.corner_signature.map(|sig| (tile, sig)))
    }

    /// Check the catalog's internal consistency (see [`crate::validate_descriptor`])
    pub fn validate(&self) -> Result<(), DescriptorError> {
        crate::validate_descriptor(self)
    }
}
