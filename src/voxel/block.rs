//! Block material values

use serde::{Deserialize, Serialize};

/// A block material: numeric id plus secondary data value
///
/// Matches the host's two-array storage model, where every voxel carries a
/// block id and a small per-block data value (orientation, variant, etc.).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Block id (index into the host's material table)
    pub id: u16,
    /// Secondary data value
    pub data: u8,
}

impl Block {
    /// Empty/air block
    pub const AIR: Block = Block { id: 0, data: 0 };

    /// Plain stone, the default paint material
    pub const STONE: Block = Block { id: 1, data: 0 };

    /// Create a block from id and data
    pub fn new(id: u16, data: u8) -> Self {
        Self { id, data }
    }

    /// Check if the block is air
    pub fn is_air(&self) -> bool {
        self.id == 0
    }
}
