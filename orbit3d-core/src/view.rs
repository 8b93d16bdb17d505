/// Camera orbit parameters and the per-frame view basis
use crate::math::{cross, normalize_or_zero, Vec3};

/// Default orbit radius around the look-at target.
pub const ORBIT_RADIUS: f64 = 4.0;
/// Default camera height above the floor plane.
pub const ORBIT_HEIGHT: f64 = 1.0;

/// Fixed orbit parameters for the camera.
///
/// The orbit angle itself is not stored here: it is owned by the animation
/// thread (see `animator::SharedState`) and passed in per frame.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub radius: f64,
    pub height: f64,
    pub target: Vec3,
}

impl OrbitCamera {
    pub fn new(radius: f64, height: f64, target: Vec3) -> Self {
        Self {
            radius,
            height,
            target,
        }
    }

    /// World-space camera position for a given orbit angle.
    pub fn position(&self, angle: f64) -> Vec3 {
        Vec3::new(
            self.target.x + angle.cos() * self.radius,
            self.target.y + self.height,
            self.target.z + angle.sin() * self.radius,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(ORBIT_RADIUS, ORBIT_HEIGHT, Vec3::zeros())
    }
}

/// Orthonormal camera basis for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl ViewBasis {
    /// Build the basis for a camera at `position` looking at `target`.
    ///
    /// Valid (unit-length, pairwise orthogonal) for any position off the
    /// vertical axis through the target. Exactly on that axis `forward` is
    /// parallel to the world up reference and `right` collapses to the zero
    /// vector; the frame renders degenerate but nothing fails, and the next
    /// orbit step moves the camera off the axis.
    pub fn looking_at(position: &Vec3, target: &Vec3) -> Self {
        let world_up = Vec3::y();
        let forward = normalize_or_zero(&(target - position));
        let right = normalize_or_zero(&cross(&forward, &world_up));
        // Unit length already: forward and right are orthonormal
        let up = cross(&right, &forward);
        Self { forward, right, up }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::dot;

    #[test]
    fn test_position_on_orbit() {
        let camera = OrbitCamera::default();
        let p = camera.position(0.0);
        assert!((p - Vec3::new(ORBIT_RADIUS, ORBIT_HEIGHT, 0.0)).norm() < 1e-12);
        let q = camera.position(std::f64::consts::FRAC_PI_2);
        assert!((q - Vec3::new(0.0, ORBIT_HEIGHT, ORBIT_RADIUS)).norm() < 1e-9);
    }

    #[test]
    fn test_basis_orthonormal_over_orbit() {
        let camera = OrbitCamera::default();
        let steps = 64;
        for i in 0..steps {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / steps as f64;
            let pos = camera.position(angle);
            let basis = ViewBasis::looking_at(&pos, &camera.target);

            assert!(dot(&basis.forward, &basis.right).abs() < 1e-9);
            assert!(dot(&basis.forward, &basis.up).abs() < 1e-9);
            assert!(dot(&basis.right, &basis.up).abs() < 1e-9);

            assert!((basis.forward.norm() - 1.0).abs() < 1e-6);
            assert!((basis.right.norm() - 1.0).abs() < 1e-6);
            assert!((basis.up.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_basis_orthonormal_off_plane_positions() {
        let target = Vec3::new(1.0, -2.0, 3.0);
        for pos in [
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(-3.0, 4.0, 7.0),
            Vec3::new(1.0, -2.0, 9.0),
        ] {
            let basis = ViewBasis::looking_at(&pos, &target);
            assert!(dot(&basis.forward, &basis.right).abs() < 1e-9);
            assert!(dot(&basis.forward, &basis.up).abs() < 1e-9);
            assert!(dot(&basis.right, &basis.up).abs() < 1e-9);
            assert!((basis.forward.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_basis_degenerate_on_axis() {
        // Camera directly above the target: forward is parallel to world up
        let basis = ViewBasis::looking_at(&Vec3::new(0.0, 5.0, 0.0), &Vec3::zeros());
        assert_eq!(basis.right, Vec3::zeros());
        assert_eq!(basis.up, Vec3::zeros());
        assert!((basis.forward - Vec3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_forward_points_at_target() {
        let pos = Vec3::new(4.0, 1.0, 0.0);
        let basis = ViewBasis::looking_at(&pos, &Vec3::zeros());
        let expected = normalize_or_zero(&(-pos));
        assert!((basis.forward - expected).norm() < 1e-12);
    }
}
