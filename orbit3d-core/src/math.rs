/// Vector math kernel shared by every render stage
use nalgebra::Vector3;

/// World- and camera-space coordinates are f64 throughout the pipeline.
pub type Vec3 = Vector3<f64>;

/// Dot product of two vectors.
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Cross product of two vectors.
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Normalize a vector, returning the zero vector for zero-length input.
///
/// The zero fallback is the defined degenerate-input policy: downstream
/// stages render a collapsed frame instead of failing mid-animation.
pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

/// Linear interpolation between `a` and `b` at parameter `t`.
pub fn lerp(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    a.lerp(b, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_result() {
        let v = normalize_or_zero(&Vec3::new(3.0, 0.0, 4.0));
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_policy() {
        let v = normalize_or_zero(&Vec3::zeros());
        assert_eq!(v, Vec3::zeros());
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        let c = cross(&Vec3::x(), &Vec3::y());
        assert!((c - Vec3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vec3::new(0.0, 2.0, -4.0);
        let b = Vec3::new(2.0, 0.0, 4.0);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
        let mid = lerp(&a, &b, 0.5);
        assert!((mid - Vec3::new(1.0, 1.0, 0.0)).norm() < 1e-12);
    }
}
