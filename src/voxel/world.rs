//! World container managing multiple chunks
//!
//! In-memory model of the host storage contract the brush is written
//! against: a chunk map with region enumeration and per-chunk change
//! marking. The real host supplies paging and persistence behind the same
//! operations.

use std::collections::HashMap;

use crate::core::types::IVec3;
use crate::math::Region;
use crate::voxel::block::Block;
use crate::voxel::chunk::{Chunk, ChunkCoord};

/// Container for a world composed of multiple chunks
pub struct World {
    /// Map from chunk coordinates to loaded chunks
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Chunks that have been marked changed, in marking order
    changed: Vec<ChunkCoord>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
            changed: Vec::new(),
        }
    }

    /// Get immutable reference to a chunk by coordinate
    pub fn get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Get mutable reference to a chunk by coordinate
    pub fn get_chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// Insert a chunk into the world, replacing any existing one
    pub fn insert_chunk(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.coord, chunk);
    }

    /// Create empty chunks for every chunk position intersecting a region
    ///
    /// Stands in for the host's chunk paging: before an edit the host has
    /// loaded everything the edit's bounds can reach. Already loaded chunks
    /// are left alone.
    pub fn ensure_region(&mut self, region: &Region) {
        for coord in coords_in_region(region) {
            self.chunks
                .entry(coord)
                .or_insert_with(|| Chunk::new(coord));
        }
    }

    /// Number of loaded chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterator over all loaded chunk coordinates
    pub fn loaded_coords(&self) -> impl Iterator<Item = &ChunkCoord> {
        self.chunks.keys()
    }

    /// Enumerate loaded chunks intersecting a region, in x, y, z order
    ///
    /// The order is deterministic so that repeated enumeration over the
    /// same region visits the same chunks in the same sequence.
    pub fn chunks_in_region(&self, region: &Region) -> Vec<ChunkCoord> {
        coords_in_region(region)
            .filter(|coord| self.chunks.contains_key(coord))
            .collect()
    }

    /// Mark a chunk changed, optionally requesting lighting recalculation
    pub fn mark_changed(&mut self, coord: ChunkCoord, calc_lighting: bool) {
        if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.mark_changed(calc_lighting);
            if !self.changed.contains(&coord) {
                self.changed.push(coord);
            }
        }
    }

    /// Take the list of changed chunks and clear the internal list
    pub fn take_changed(&mut self) -> Vec<ChunkCoord> {
        std::mem::take(&mut self.changed)
    }

    /// Read the block at a voxel position, if its chunk is loaded
    pub fn get_block(&self, p: IVec3) -> Option<Block> {
        let coord = ChunkCoord::from_voxel(p);
        self.chunks.get(&coord).map(|c| c.get(p - coord.origin()))
    }

    /// Write the block at a voxel position, if its chunk is loaded
    pub fn set_block(&mut self, p: IVec3, block: Block) {
        let coord = ChunkCoord::from_voxel(p);
        if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.set(p - coord.origin(), block);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// All chunk coordinates whose region intersects the given region
fn coords_in_region(region: &Region) -> impl Iterator<Item = ChunkCoord> + '_ {
    let (min, max) = if region.is_empty() {
        // Empty range for empty regions
        (IVec3::ZERO, IVec3::splat(-1))
    } else {
        (
            region.min(),
            region.max() - IVec3::ONE, // Inclusive voxel max
        )
    };
    let lo = ChunkCoord::from_voxel(min);
    let hi = ChunkCoord::from_voxel(max);
    (lo.x..=hi.x).flat_map(move |x| {
        (lo.y..=hi.y).flat_map(move |y| {
            (lo.z..=hi.z).map(move |z| ChunkCoord::new(x, y, z))
        })
    })
}
