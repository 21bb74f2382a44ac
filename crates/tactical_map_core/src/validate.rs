//! Descriptor validation logic

use crate::descriptor::TilesetDescriptor;
use crate::DescriptorError;

/// Validate that the descriptor is internally consistent
///
/// Runs once at load time; queries assume a validated descriptor and do not
/// re-check per lookup. Checks that every corner signature references a
/// declared terrain, every terrain's representative tile exists, and declared
/// movement costs are finite and non-negative.
pub fn validate_descriptor(descriptor: &TilesetDescriptor) -> Result<(), DescriptorError> {
    let terrain_count = descriptor.terrain_count();

    for tile in descriptor.tiles.values() {
        if let Some(signature) = &tile.corner_signature {
            for terrain in signature.terrains() {
                if terrain.0 >= terrain_count {
                    return Err(DescriptorError::UndefinedTerrain(terrain.0));
                }
            }
        }

        if let Some(cost) = tile.properties.move_cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(DescriptorError::InvalidProperty {
                    tile: tile.id,
                    message: format!("moveCost must be finite and non-negative, got {}", cost),
                });
            }
        }
    }

    for terrain in &descriptor.terrains {
        if !descriptor.tiles.contains_key(&terrain.representative_tile) {
            return Err(DescriptorError::UndefinedTile(terrain.representative_tile));
        }
    }

    Ok(())
}
