//! Spike tool configuration

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::voxel::block::Block;

/// Valid range for the spike length
pub const LENGTH_RANGE: RangeInclusive<f32> = 0.1..=256.0;

/// Valid range for the outer and hollow radii
pub const RADIUS_RANGE: RangeInclusive<f32> = 0.0..=256.0;

/// Valid range for the minimum spacing setting
pub const SPACING_RANGE: RangeInclusive<u32> = 0..=100;

/// Configuration for one spike operation
///
/// Immutable once constructed; hosts fill it from their tool UI and hand it
/// to [`apply_spike`](crate::voxel::brush::apply_spike) unchanged. Validate
/// at the boundary with [`validate`](Self::validate) rather than re-checking
/// fields per voxel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpikeOptions {
    /// Block to paint
    pub block: Block,
    /// Only overwrite voxels currently holding `replace_target`
    pub replace: bool,
    /// Target material for the replace filter (id and data both compared)
    pub replace_target: Block,
    /// Length of each cone half, from the anchor to the tip
    pub length: f32,
    /// Cross-section radius at the anchor's equatorial plane
    pub radius: f32,
    /// Radius of the carved-out core; 0 keeps the spike solid
    pub hollow_radius: f32,
    /// Keep the half pointing toward the viewpoint
    pub inwards: bool,
    /// Keep the half pointing away from the viewpoint
    pub outwards: bool,
    /// Minimum spacing between spikes
    ///
    /// Accepted and range-checked but not consulted by the shape
    /// computation; the original tool declares it without using it and no
    /// behavior is invented for it here.
    pub min_spacing: u32,
}

impl Default for SpikeOptions {
    fn default() -> Self {
        Self {
            block: Block::STONE,
            replace: true,
            replace_target: Block::AIR,
            length: 10.0,
            radius: 5.0,
            hollow_radius: 0.0,
            inwards: true,
            outwards: true,
            min_spacing: 1,
        }
    }
}

impl SpikeOptions {
    /// Check every field against its UI range
    ///
    /// A hollow radius exceeding the outer radius is deliberately not an
    /// error: that combination is a defined no-op at apply time.
    pub fn validate(&self) -> Result<()> {
        if !LENGTH_RANGE.contains(&self.length) {
            return Err(Error::Options(format!(
                "length {} outside {:?}",
                self.length, LENGTH_RANGE
            )));
        }
        if !RADIUS_RANGE.contains(&self.radius) {
            return Err(Error::Options(format!(
                "radius {} outside {:?}",
                self.radius, RADIUS_RANGE
            )));
        }
        if !RADIUS_RANGE.contains(&self.hollow_radius) {
            return Err(Error::Options(format!(
                "hollow radius {} outside {:?}",
                self.hollow_radius, RADIUS_RANGE
            )));
        }
        if !SPACING_RANGE.contains(&self.min_spacing) {
            return Err(Error::Options(format!(
                "minimum spacing {} outside {:?}",
                self.min_spacing, SPACING_RANGE
            )));
        }
        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load from a JSON file and validate
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SpikeOptions::default().validate().is_ok());
    }

    #[test]
    fn test_length_range() {
        let mut options = SpikeOptions::default();
        options.length = 0.05;
        assert!(options.validate().is_err());
        options.length = 300.0;
        assert!(options.validate().is_err());
        options.length = 0.1; // Boundary is inclusive
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_radius_ranges() {
        let mut options = SpikeOptions::default();
        options.radius = -1.0;
        assert!(options.validate().is_err());

        options = SpikeOptions::default();
        options.hollow_radius = 257.0;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_hollow_exceeding_radius_is_not_a_validation_error() {
        let mut options = SpikeOptions::default();
        options.radius = 2.0;
        options.hollow_radius = 5.0;
        // Defined as a silent no-op at apply time, not a config error
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_spacing_range() {
        let mut options = SpikeOptions::default();
        options.min_spacing = 101;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = SpikeOptions::default();
        options.block = Block::new(35, 14);
        options.hollow_radius = 2.5;
        options.outwards = false;

        let json = options.to_json().unwrap();
        let parsed = SpikeOptions::from_json(&json).unwrap();
        assert_eq!(parsed.block, options.block);
        assert_eq!(parsed.hollow_radius, options.hollow_radius);
        assert!(!parsed.outwards);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = SpikeOptions::from_json(r#"{"length": 20.0}"#).unwrap();
        assert_eq!(parsed.length, 20.0);
        assert_eq!(parsed.radius, 5.0);
        assert!(parsed.inwards);
    }

    #[test]
    fn test_from_json_validates() {
        assert!(SpikeOptions::from_json(r#"{"length": 1000.0}"#).is_err());
    }
}
