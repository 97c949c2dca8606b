//! Two-pass chunk visitation for edits
//!
//! The host's dirty tracking has a session-scoped defect: the very first
//! touch of a chunk can have its mutation silently dropped unless the chunk
//! was already flagged dirty beforehand. The workaround is to sweep the
//! whole region and mark every chunk changed before any voxel is written,
//! then enumerate again for the write pass, so no chunk is ever mutated on
//! its first touch. Collapsing the two passes into one reintroduces the
//! bug; this is an external-system workaround, not a style choice.

use crate::math::Region;
use crate::voxel::chunk::ChunkCoord;
use crate::voxel::world::World;

/// Mark every loaded chunk intersecting `region` changed, then enumerate
/// the same chunks for mutation
///
/// Marking requests lighting recalculation, since the caller is about to
/// rewrite blocks. The returned order matches the marking order.
pub fn mark_then_enumerate(world: &mut World, region: &Region) -> Vec<ChunkCoord> {
    // Pass 1: flag everything before anything is written.
    for coord in world.chunks_in_region(region) {
        world.mark_changed(coord, true);
    }
    // Pass 2: a fresh enumeration for the write sweep.
    world.chunks_in_region(region)
}
