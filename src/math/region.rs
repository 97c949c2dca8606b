//! Axis-aligned integer voxel region

use crate::core::types::{IVec3, UVec3};

/// Axis-aligned box of voxels defined by an integer origin and size
///
/// The region covers voxel positions `origin..origin + size` (exclusive
/// upper corner). Chunk buffers and edit bounds are all expressed in these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub origin: IVec3,
    pub size: UVec3,
}

impl Region {
    /// Create a region from origin and size
    pub fn new(origin: IVec3, size: UVec3) -> Self {
        Self { origin, size }
    }

    /// Create a region from inclusive min and exclusive max corners
    ///
    /// Returns an empty region at `min` if any axis is inverted.
    pub fn from_corners(min: IVec3, max: IVec3) -> Self {
        let size = (max - min).max(IVec3::ZERO);
        Self {
            origin: min,
            size: size.as_uvec3(),
        }
    }

    /// Create a cubic region centered on a voxel with the given half-extent
    pub fn cube_around(center: IVec3, half_extent: i32) -> Self {
        Self {
            origin: center - IVec3::splat(half_extent),
            size: UVec3::splat((2 * half_extent + 1).max(0) as u32),
        }
    }

    /// Inclusive minimum corner
    pub fn min(&self) -> IVec3 {
        self.origin
    }

    /// Exclusive maximum corner
    pub fn max(&self) -> IVec3 {
        self.origin + self.size.as_ivec3()
    }

    /// Number of voxels covered
    pub fn volume(&self) -> usize {
        (self.size.x as usize) * (self.size.y as usize) * (self.size.z as usize)
    }

    /// Check if the region covers no voxels
    pub fn is_empty(&self) -> bool {
        self.size.x == 0 || self.size.y == 0 || self.size.z == 0
    }

    /// Check if a voxel position is inside the region
    pub fn contains(&self, p: IVec3) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x < max.x &&
        p.y >= min.y && p.y < max.y &&
        p.z >= min.z && p.z < max.z
    }

    /// Check if two regions share at least one voxel
    pub fn intersects(&self, other: &Region) -> bool {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        min.x < max.x && min.y < max.y && min.z < max.z
    }

    /// Compute the overlap of two regions, if any
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        if min.x < max.x && min.y < max.y && min.z < max.z {
            Some(Region::from_corners(min, max))
        } else {
            None
        }
    }

    /// Iterate every voxel position in the region in x, y, z order
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + '_ {
        let min = self.min();
        let max = self.max();
        (min.x..max.x).flat_map(move |x| {
            (min.y..max.y).flat_map(move |y| {
                (min.z..max.z).map(move |z| IVec3::new(x, y, z))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let r = Region::from_corners(IVec3::new(-1, 0, 2), IVec3::new(2, 3, 4));
        assert_eq!(r.min(), IVec3::new(-1, 0, 2));
        assert_eq!(r.max(), IVec3::new(2, 3, 4));
        assert_eq!(r.size, UVec3::new(3, 3, 2));
    }

    #[test]
    fn test_inverted_corners_are_empty() {
        let r = Region::from_corners(IVec3::new(5, 5, 5), IVec3::new(3, 6, 6));
        assert!(r.is_empty());
        assert_eq!(r.volume(), 0);
    }

    #[test]
    fn test_cube_around() {
        let r = Region::cube_around(IVec3::new(10, -4, 0), 6);
        assert_eq!(r.min(), IVec3::new(4, -10, -6));
        assert_eq!(r.size, UVec3::splat(13)); // 2*6 + 1
        assert!(r.contains(IVec3::new(10, -4, 0)));
    }

    #[test]
    fn test_contains() {
        let r = Region::new(IVec3::ZERO, UVec3::splat(4));
        assert!(r.contains(IVec3::ZERO));
        assert!(r.contains(IVec3::new(3, 3, 3)));
        assert!(!r.contains(IVec3::new(4, 0, 0))); // Max corner is exclusive
        assert!(!r.contains(IVec3::new(-1, 0, 0)));
    }

    #[test]
    fn test_intersection() {
        let a = Region::new(IVec3::ZERO, UVec3::splat(8));
        let b = Region::new(IVec3::new(4, 4, 4), UVec3::splat(8));
        let c = Region::new(IVec3::new(20, 0, 0), UVec3::splat(2));

        assert!(a.intersects(&b));
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.min(), IVec3::new(4, 4, 4));
        assert_eq!(overlap.max(), IVec3::new(8, 8, 8));

        assert!(!a.intersects(&c));
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn test_touching_regions_do_not_intersect() {
        let a = Region::new(IVec3::ZERO, UVec3::splat(4));
        let b = Region::new(IVec3::new(4, 0, 0), UVec3::splat(4));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_iter_order_and_count() {
        let r = Region::new(IVec3::new(1, 1, 1), UVec3::new(2, 1, 2));
        let all: Vec<_> = r.iter().collect();
        assert_eq!(all.len(), r.volume());
        assert_eq!(all[0], IVec3::new(1, 1, 1));
        assert_eq!(all[1], IVec3::new(1, 1, 2));
        assert_eq!(all[2], IVec3::new(2, 1, 1));
    }
}
