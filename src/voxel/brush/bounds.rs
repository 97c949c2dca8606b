//! Direction-independent spike bounds

use crate::core::types::Vec3;
use crate::math::Region;

/// Maximal region a spike at `anchor` could touch, for any direction
///
/// Deliberately ignores where the camera is: the host may compute the dirty
/// region well before the edit is committed, and the viewpoint can move in
/// between. The box must therefore stay a superset of the shape no matter
/// which way the spike ends up pointing.
pub fn max_bounds(anchor: Vec3, length: f32, radius: f32) -> Region {
    // Ceiling keeps the superset guarantee for fractional lengths/radii.
    let outer = (length.max(radius) + 1.0).ceil() as i32;
    Region::cube_around(anchor.floor().as_ivec3(), outer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{IVec3, UVec3};

    #[test]
    fn test_cubic_and_centered() {
        let bounds = max_bounds(Vec3::new(10.0, 20.0, 30.0), 10.0, 5.0);
        // outer = max(10, 5) + 1 = 11
        assert_eq!(bounds.min(), IVec3::new(-1, 9, 19));
        assert_eq!(bounds.size, UVec3::splat(23)); // 2*11 + 1
    }

    #[test]
    fn test_radius_dominates_when_larger() {
        let bounds = max_bounds(Vec3::ZERO, 3.0, 8.0);
        assert_eq!(bounds.size, UVec3::splat(19)); // outer = 8 + 1
    }

    #[test]
    fn test_fractional_inputs_round_up() {
        let bounds = max_bounds(Vec3::ZERO, 4.5, 2.0);
        // outer = ceil(5.5) = 6
        assert_eq!(bounds.size, UVec3::splat(13));
    }

    #[test]
    fn test_independent_of_direction_superset() {
        use crate::voxel::brush::mask::SpikeShape;
        use crate::voxel::brush::options::SpikeOptions;

        let anchor = Vec3::new(3.0, -7.0, 12.0);
        let options = SpikeOptions {
            length: 9.0,
            radius: 4.0,
            ..Default::default()
        };
        let bounds = max_bounds(anchor, options.length, options.radius);

        // Every voxel the shape accepts must lie inside the bounds, for a
        // spread of viewpoints around the anchor.
        for camera in [
            anchor + Vec3::X,
            anchor - Vec3::Y * 30.0,
            anchor + Vec3::new(5.0, 2.0, -9.0),
            anchor + Vec3::new(-0.3, 11.0, 0.4),
        ] {
            let shape = SpikeShape::new(anchor, camera, &options);
            let probe = Region::cube_around(anchor.floor().as_ivec3(), 24);
            for p in probe.iter() {
                if shape.contains(p) {
                    assert!(bounds.contains(p), "{p} escaped bounds for camera {camera}");
                }
            }
        }
    }
}
