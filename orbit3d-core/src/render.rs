/// Frame composition: wireframe pipeline, face renderer, and scene draw order
use crate::geometry::{Face, Mesh, Scene, Segment};
use crate::math::{cross, normalize_or_zero, Vec3};
use crate::projection::{clip_to_near, project, to_camera_space, Viewport, NEAR_PLANE};
use crate::surface::{DrawSurface, Rgb, ScreenPoint};
use crate::view::{OrbitCamera, ViewBasis};

pub const BACKGROUND: Rgb = Rgb::new(18, 18, 22);
pub const GRID_COLOR: Rgb = Rgb::new(70, 78, 90);
pub const RING_COLOR: Rgb = Rgb::new(230, 126, 34);
pub const OUTLINE_COLOR: Rgb = Rgb::new(12, 12, 12);

/// Renders the fixed scene into any `DrawSurface`, one frame at a time.
///
/// The compositor is immutable; all per-frame state (basis, camera-space
/// vertices, face depths) is recomputed on every call and discarded.
pub struct Compositor {
    scene: Scene,
    camera: OrbitCamera,
}

impl Compositor {
    pub fn new(scene: Scene, camera: OrbitCamera) -> Self {
        Self { scene, camera }
    }

    /// Compositor for the standard scene: grid, ring on the orbit circle,
    /// pyramid at the origin.
    pub fn standard() -> Self {
        let camera = OrbitCamera::default();
        let scene = Scene::new(camera.target, camera.radius);
        Self::new(scene, camera)
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Draw one frame at the given orbit angle.
    ///
    /// An empty viewport skips the frame entirely.
    pub fn render<S: DrawSurface>(&self, angle: f64, surface: &mut S) {
        let viewport = Viewport::new(surface.width(), surface.height());
        if viewport.is_empty() {
            return;
        }

        let camera_pos = self.camera.position(angle);
        let basis = ViewBasis::looking_at(&camera_pos, &self.camera.target);

        surface.fill_rect(0, 0, viewport.width, viewport.height, BACKGROUND);

        for segment in &self.scene.grid {
            draw_segment(surface, &basis, &camera_pos, &viewport, segment, GRID_COLOR);
        }
        for segment in &self.scene.ring {
            draw_segment(surface, &basis, &camera_pos, &viewport, segment, RING_COLOR);
        }

        draw_mesh(surface, &basis, &camera_pos, &viewport, &self.scene.pyramid);
    }
}

/// Wireframe pipeline: transform, clip, project, draw.
fn draw_segment<S: DrawSurface>(
    surface: &mut S,
    basis: &ViewBasis,
    camera_pos: &Vec3,
    viewport: &Viewport,
    segment: &Segment,
    color: Rgb,
) {
    let a = to_camera_space(basis, camera_pos, &segment.start);
    let b = to_camera_space(basis, camera_pos, &segment.end);

    if let Some((a, b)) = clip_to_near(a, b, NEAR_PLANE) {
        surface.draw_line(project(&a, viewport), project(&b, viewport), color);
    }
}

/// Painter's-algorithm face renderer for the convex pyramid mesh.
fn draw_mesh<S: DrawSurface>(
    surface: &mut S,
    basis: &ViewBasis,
    camera_pos: &Vec3,
    viewport: &Viewport,
    mesh: &Mesh,
) {
    let view: Vec<Vec3> = mesh
        .vertices
        .iter()
        .map(|v| to_camera_space(basis, camera_pos, v))
        .collect();

    let mut points: Vec<ScreenPoint> = Vec::new();
    for (_, face) in visible_faces(mesh, &view) {
        points.clear();
        points.extend(face.indices.iter().map(|&i| project(&view[i], viewport)));
        surface.fill_polygon(&points, face.color);
        surface.draw_polygon_outline(&points, OUTLINE_COLOR);
    }
}

/// Cull back-facing and near-clipped faces, then order survivors far-to-near.
///
/// The sort is stable, so faces at equal depth keep their mesh order.
fn visible_faces<'a>(mesh: &'a Mesh, view: &[Vec3]) -> Vec<(f64, &'a Face)> {
    let mut survivors: Vec<(f64, &Face)> = Vec::with_capacity(mesh.faces.len());

    for face in &mesh.faces {
        let normal = face_normal(view, &face.indices);
        if normal.z >= 0.0 {
            continue;
        }
        if face.indices.iter().any(|&i| view[i].z <= NEAR_PLANE) {
            continue;
        }

        let depth: f64 =
            face.indices.iter().map(|&i| view[i].z).sum::<f64>() / face.indices.len() as f64;
        survivors.push((depth, face));
    }

    survivors.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    survivors
}

/// Outward face normal in camera space, from the first three vertices.
fn face_normal(view: &[Vec3], indices: &[usize]) -> Vec3 {
    let a = view[indices[0]];
    let b = view[indices[1]];
    let c = view[indices[2]];
    normalize_or_zero(&cross(&(b - a), &(c - a)))
}
