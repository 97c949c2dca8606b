//! Chunk system for managing cubic regions of voxel space

use crate::core::types::{IVec3, UVec3, Vec3};
use crate::math::Region;
use crate::voxel::block::Block;

/// Number of voxels per chunk side
pub const CHUNK_SIZE: i32 = 16;

/// Number of voxels per chunk
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// Integer coordinate identifying a chunk in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk containing the given voxel position
    pub fn from_voxel(p: IVec3) -> Self {
        Self {
            x: p.x.div_euclid(CHUNK_SIZE),
            y: p.y.div_euclid(CHUNK_SIZE),
            z: p.z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Chunk containing the given world-space position
    pub fn from_world_pos(pos: Vec3) -> Self {
        Self::from_voxel(pos.floor().as_ivec3())
    }

    /// Voxel-space origin (minimum corner) of this chunk
    pub fn origin(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z) * CHUNK_SIZE
    }

    /// Voxel region covered by this chunk
    pub fn region(&self) -> Region {
        Region::new(self.origin(), UVec3::splat(CHUNK_SIZE as u32))
    }
}

/// A cubic chunk of block storage
///
/// Holds the block-id and secondary-data arrays for `CHUNK_VOLUME` voxels,
/// plus the change-tracking flags the host consults when paging and
/// relighting. Buffers are mutated in place; there is no copy-on-write.
pub struct Chunk {
    /// Coordinate of this chunk in the world grid
    pub coord: ChunkCoord,
    /// Block ids, indexed x-major then y then z
    blocks: Vec<u16>,
    /// Secondary data values, same indexing as `blocks`
    data: Vec<u8>,
    /// Whether this chunk has been marked changed this session
    pub dirty: bool,
    /// Whether the host should recalculate lighting for this chunk
    pub needs_lighting: bool,
}

impl Chunk {
    /// Create a new chunk filled with air
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![0; CHUNK_VOLUME],
            data: vec![0; CHUNK_VOLUME],
            dirty: false,
            needs_lighting: false,
        }
    }

    /// Voxel-space origin (minimum corner) of this chunk
    pub fn origin(&self) -> IVec3 {
        self.coord.origin()
    }

    /// Voxel region covered by this chunk
    pub fn region(&self) -> Region {
        self.coord.region()
    }

    fn index(local: IVec3) -> usize {
        debug_assert!(
            local.cmpge(IVec3::ZERO).all() && local.cmplt(IVec3::splat(CHUNK_SIZE)).all(),
            "local position {local} out of chunk bounds"
        );
        ((local.x * CHUNK_SIZE + local.y) * CHUNK_SIZE + local.z) as usize
    }

    /// Read the block at a chunk-local position
    pub fn get(&self, local: IVec3) -> Block {
        let i = Self::index(local);
        Block::new(self.blocks[i], self.data[i])
    }

    /// Overwrite the block at a chunk-local position
    ///
    /// Writes id and data only; no other voxel attribute exists at this
    /// layer to touch.
    pub fn set(&mut self, local: IVec3, block: Block) {
        let i = Self::index(local);
        self.blocks[i] = block.id;
        self.data[i] = block.data;
    }

    /// Mark this chunk changed, optionally requesting lighting recalculation
    pub fn mark_changed(&mut self, calc_lighting: bool) {
        self.dirty = true;
        if calc_lighting {
            self.needs_lighting = true;
        }
    }

    /// Block id array
    pub fn blocks(&self) -> &[u16] {
        &self.blocks
    }

    /// Secondary data array
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Block id array as raw bytes (for host-side buffer uploads)
    pub fn block_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }
}
