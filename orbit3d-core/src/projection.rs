/// Camera-space transform, perspective projection, and near-plane clipping
use crate::math::{dot, lerp, Vec3};
use crate::surface::ScreenPoint;
use crate::view::ViewBasis;

/// Depth below which geometry counts as behind the camera.
pub const NEAR_PLANE: f64 = 0.2;

/// Fraction of the smaller viewport dimension used as the projection scale.
const SCALE_FACTOR: f64 = 0.55;

/// Integer viewport dimensions plus the derived projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when there is no area to draw into; frames are skipped entirely.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.width.min(self.height)) * SCALE_FACTOR
    }
}

/// Transform a world-space point into camera space.
///
/// The result's z component is depth along the view direction.
pub fn to_camera_space(basis: &ViewBasis, camera_pos: &Vec3, world: &Vec3) -> Vec3 {
    let offset = world - camera_pos;
    Vec3::new(
        dot(&offset, &basis.right),
        dot(&offset, &basis.up),
        dot(&offset, &basis.forward),
    )
}

/// Pinhole-perspective projection of a camera-space point.
///
/// Requires positive depth; callers clip against the near plane first.
pub fn project(cam_point: &Vec3, viewport: &Viewport) -> ScreenPoint {
    let (cx, cy) = viewport.center();
    let scale = viewport.scale();
    ScreenPoint {
        x: cx + (cam_point.x / cam_point.z) * scale,
        y: cy - (cam_point.y / cam_point.z) * scale,
    }
}

/// Clip a camera-space segment against the near plane.
///
/// Both endpoints behind: the segment is discarded. One behind: it is
/// replaced by the interpolated point at depth `near`. Both in front: the
/// segment passes through unchanged, which makes clipping idempotent.
pub fn clip_to_near(a: Vec3, b: Vec3, near: f64) -> Option<(Vec3, Vec3)> {
    let a_behind = a.z < near;
    let b_behind = b.z < near;

    if a_behind && b_behind {
        return None;
    }
    if !a_behind && !b_behind {
        return Some((a, b));
    }

    let t = (near - a.z) / (b.z - a.z);
    let hit = lerp(&a, &b, t);
    // Pin depth exactly to the plane so re-clipping passes through
    let hit = Vec3::new(hit.x, hit.y, near);

    if a_behind {
        Some((hit, b))
    } else {
        Some((a, hit))
    }
}
