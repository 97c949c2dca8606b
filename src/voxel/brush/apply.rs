//! Spike brush entry operations
//!
//! `dirty_region` is what the host calls before the edit is committed (for
//! redraw bounds); `apply_spike` performs the edit. Both run synchronously
//! to completion on the calling thread; the store is exclusively owned for
//! the duration of the call.

use crate::core::types::Vec3;
use crate::math::Region;
use crate::voxel::block::Block;
use crate::voxel::chunk::Chunk;
use crate::voxel::world::World;
use super::bounds::max_bounds;
use super::iterate::mark_then_enumerate;
use super::mask::{Mask, SpikeShape, spike_mask};
use super::options::SpikeOptions;

/// Region the host should redraw for a spike at this anchor
///
/// Uses the direction-independent bounds so the answer stays valid even if
/// the viewpoint moves before the edit lands.
pub fn dirty_region(anchor: Vec3, options: &SpikeOptions) -> Region {
    max_bounds(anchor, options.length, options.radius)
}

/// Paint a spike anchored at `anchor`, aimed along the line to `camera`
///
/// Invalid shape combinations (hollow radius exceeding the outer radius,
/// or both direction flags off) do nothing: surfacing a failure here leaves
/// stale tool state behind in the host, so silence is the safer observable
/// behavior. `camera` must differ from `anchor`; a zero-length view offset
/// leaves the spike axis undefined.
pub fn apply_spike(world: &mut World, anchor: Vec3, camera: Vec3, options: &SpikeOptions) {
    if options.hollow_radius > options.radius {
        log::debug!(
            "spike: hollow radius {} exceeds outer radius {}, nothing to paint",
            options.hollow_radius,
            options.radius
        );
        return;
    }
    if !options.inwards && !options.outwards {
        log::debug!("spike: both direction flags off, nothing to paint");
        return;
    }

    let bounds = max_bounds(anchor, options.length, options.radius);
    let shape = SpikeShape::new(anchor, camera, options);

    let coords = mark_then_enumerate(world, &bounds);
    log::debug!("spike: sweeping {} chunks in {:?}", coords.len(), bounds);

    for coord in coords {
        let Some(overlap) = bounds.intersection(&coord.region()) else {
            continue;
        };
        let Some(chunk) = world.get_chunk_mut(coord) else {
            continue;
        };
        let mask = spike_mask(&shape, &overlap, chunk, options);
        paint_masked(chunk, &mask, options.block);
    }
}

/// Overwrite every masked voxel with the paint block
///
/// Pure assignment of id and data; reapplying the same mask and block is a
/// no-op, which is what makes the whole operation idempotent.
pub fn paint_masked(chunk: &mut Chunk, mask: &Mask, block: Block) {
    let origin = chunk.origin();
    for p in mask.iter_set() {
        chunk.set(p - origin, block);
    }
}
