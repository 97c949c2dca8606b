//! Spike geometry and per-buffer mask computation
//!
//! The spike is a double cone: two cones sharing their apex radius at the
//! anchor, tapering linearly to a point at `length` along the view axis in
//! each direction. Geometry tests are pure functions of the voxel position,
//! the anchor, and the axis; the chunk is only read for the replace filter.

use crate::core::types::{IVec3, Vec3};
use crate::math::Region;
use crate::voxel::chunk::Chunk;
use super::options::SpikeOptions;

/// Resolved spike shape for one operation
///
/// Built once per apply from the anchor, the camera position, and the tool
/// options; the camera fixes the axis direction only, never a distance.
#[derive(Debug, Clone, Copy)]
pub struct SpikeShape {
    anchor: Vec3,
    /// Unit vector from the anchor toward the viewpoint
    direction: Vec3,
    length: f32,
    rad_outer: f32,
    rad_inner: f32,
    inwards: bool,
    outwards: bool,
}

impl SpikeShape {
    /// Resolve the shape, aiming from `anchor` toward `camera`
    ///
    /// `camera == anchor` leaves the direction undefined (zero-magnitude
    /// normalization); hosts must not invoke the brush with the viewpoint
    /// on the anchor itself.
    pub fn new(anchor: Vec3, camera: Vec3, options: &SpikeOptions) -> Self {
        Self {
            anchor,
            direction: (camera - anchor).normalize(),
            length: options.length,
            rad_outer: options.radius,
            rad_inner: options.hollow_radius,
            inwards: options.inwards,
            outwards: options.outwards,
        }
    }

    /// Signed distance along the spike axis (positive toward the viewpoint)
    pub fn dist_along(&self, p: Vec3) -> f32 {
        (p - self.anchor).dot(self.direction)
    }

    /// Distance from the spike axis
    pub fn perp_dist(&self, p: Vec3) -> f32 {
        let offset = p - self.anchor;
        let along = offset.dot(self.direction);
        // Clamp guards rounding when the offset is almost parallel to the axis
        (offset.length_squared() - along * along).max(0.0).sqrt()
    }

    /// Linear taper: 1 at the anchor, 0 at `length` along the axis, negative beyond
    pub fn falloff(&self, dist_along: f32) -> f32 {
        1.0 - dist_along.abs() / self.length
    }

    /// Geometric membership test for a voxel position
    ///
    /// Covers the outer shell, the hollow carve-out, and the directional
    /// cull; the replace filter is composed separately in [`spike_mask`]
    /// because it needs the buffer contents.
    pub fn contains(&self, p: IVec3) -> bool {
        let p = p.as_vec3();
        let along = self.dist_along(p);
        let perp = self.perp_dist(p);
        let falloff = self.falloff(along);

        // Outer shell, inclusive boundary. Past the tips the falloff goes
        // negative and excludes everything on its own.
        if perp > falloff * self.rad_outer {
            return false;
        }
        // Hollow carve-out. Skipping at zero is an optimization only; the
        // comparison would pass everywhere anyway.
        if self.rad_inner > 0.0 && perp < falloff * self.rad_inner {
            return false;
        }
        // The double cone is culled to the requested halves.
        if !self.inwards && along > 0.0 {
            return false;
        }
        if !self.outwards && along < 0.0 {
            return false;
        }
        true
    }
}

/// Per-voxel boolean field over one buffer overlap
///
/// Computed fresh for each chunk and discarded after painting; never
/// persisted.
pub struct Mask {
    region: Region,
    bits: Vec<bool>,
}

impl Mask {
    /// Region this mask covers
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Check the mask at a voxel position inside the region
    pub fn get(&self, p: IVec3) -> bool {
        self.bits[self.index(p)]
    }

    /// Number of selected voxels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Iterate the positions of all selected voxels
    pub fn iter_set(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.region
            .iter()
            .zip(self.bits.iter())
            .filter_map(|(p, &set)| set.then_some(p))
    }

    fn index(&self, p: IVec3) -> usize {
        debug_assert!(self.region.contains(p), "{p} outside mask region");
        let local = p - self.region.min();
        let size = self.region.size;
        ((local.x as usize * size.y as usize) + local.y as usize) * size.z as usize
            + local.z as usize
    }
}

/// Compute the spike mask for one chunk-aligned buffer overlap
///
/// All conditions are conjunctive: a voxel is selected only when the
/// geometric test passes and, if the replace filter is on, the voxel
/// currently holds the replace target (id and data both).
pub fn spike_mask(
    shape: &SpikeShape,
    overlap: &Region,
    chunk: &Chunk,
    options: &SpikeOptions,
) -> Mask {
    let origin = chunk.origin();
    let mut bits = Vec::with_capacity(overlap.volume());
    for p in overlap.iter() {
        let mut selected = shape.contains(p);
        if selected && options.replace {
            selected = chunk.get(p - origin) == options.replace_target;
        }
        bits.push(selected);
    }
    Mask {
        region: *overlap,
        bits,
    }
}
