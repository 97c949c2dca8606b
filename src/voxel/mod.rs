//! Voxel data structures and operations

pub mod block;
pub mod chunk;
pub mod world;
pub mod brush;

pub use block::Block;
pub use chunk::{Chunk, ChunkCoord, CHUNK_SIZE};
pub use world::World;
