//! Geometry helpers (minimal set)
//!
//! Field coordinates follow the car-soccer convention:
//! - X: lateral (side wall to side wall, about ±4096)
//! - Y: length (goal to goal, about ±5120)
//! - Z: height
//!
//! All distance comparisons are plain 3D Euclidean; no axis gets extra weight.

use nalgebra::Vector3;

/// 3D point or direction.
pub type Vec3 = Vector3<f32>;

/// Below this magnitude a vector is treated as zero when normalizing.
const NORMALIZE_EPS: f32 = 0.0001;

#[inline]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).norm()
}

/// Unit vector, or zero for a (near) zero input.
#[inline]
pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
    v.try_normalize(NORMALIZE_EPS).unwrap_or_else(Vec3::zeros)
}

/// Unit direction from `from` toward `to` (zero when the points coincide).
#[inline]
pub fn direction(from: &Vec3, to: &Vec3) -> Vec3 {
    normalize_or_zero(&(to - from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let d = distance(&vec3(0.0, 0.0, 0.0), &vec3(3.0, 4.0, 12.0));
        assert!((d - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_direction_is_unit() {
        let dir = direction(&vec3(100.0, 0.0, 0.0), &vec3(100.0, -500.0, 0.0));
        assert!((dir.norm() - 1.0).abs() < 1e-5);
        assert!((dir.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let dir = direction(&vec3(7.0, 7.0, 7.0), &vec3(7.0, 7.0, 7.0));
        assert_eq!(dir, Vec3::zeros());
    }
}
