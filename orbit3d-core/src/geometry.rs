/// Static scene geometry: floor grid, orbit ring, and the pyramid mesh
use crate::math::Vec3;
use crate::surface::Rgb;

/// Half-extent of the floor grid in world units.
pub const GRID_SIZE: f64 = 10.0;
/// Spacing between adjacent grid lines.
pub const GRID_STEP: f64 = 1.0;
/// Segment count used to approximate the orbit ring.
pub const RING_SEGMENTS: usize = 120;

/// A world-space line segment.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// A planar face referencing vertices by index into its mesh's vertex list.
///
/// Faces never own vertices; indices stay valid because the mesh is immutable
/// after construction.
#[derive(Debug, Clone)]
pub struct Face {
    pub indices: Vec<usize>,
    pub color: Rgb,
}

impl Face {
    pub fn new(indices: Vec<usize>, color: Rgb) -> Self {
        Self { indices, color }
    }
}

/// An indexed mesh with flat per-face colors.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// The scene's pyramid: four base corners on the floor plane plus an apex.
    ///
    /// Vertex order within each face is fixed; the face renderer derives its
    /// draw/cull decision from the winding as given.
    pub fn pyramid() -> Self {
        let half = 0.5;
        let vertices = vec![
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, 0.0, -half),
            Vec3::new(half, 0.0, half),
            Vec3::new(-half, 0.0, half),
            Vec3::new(0.0, 1.0, 0.0),
        ];

        let faces = vec![
            // Base quad
            Face::new(vec![0, 1, 2, 3], Rgb::new(52, 152, 219)),
            // Four triangular sides
            Face::new(vec![0, 1, 4], Rgb::new(231, 76, 60)),
            Face::new(vec![1, 2, 4], Rgb::new(241, 196, 15)),
            Face::new(vec![2, 3, 4], Rgb::new(46, 204, 113)),
            Face::new(vec![3, 0, 4], Rgb::new(155, 89, 182)),
        ];

        Self { vertices, faces }
    }
}

/// Grid lines on the floor plane, running along both the X and Z axes.
pub fn floor_grid() -> Vec<Segment> {
    let steps = (GRID_SIZE / GRID_STEP) as i64;
    let mut lines = Vec::with_capacity(2 * (2 * steps as usize + 1));

    for i in -steps..=steps {
        let offset = i as f64 * GRID_STEP;
        // Lines parallel to Z, then lines parallel to X
        lines.push(Segment::new(
            Vec3::new(offset, 0.0, -GRID_SIZE),
            Vec3::new(offset, 0.0, GRID_SIZE),
        ));
        lines.push(Segment::new(
            Vec3::new(-GRID_SIZE, 0.0, offset),
            Vec3::new(GRID_SIZE, 0.0, offset),
        ));
    }

    lines
}

/// Closed polyline approximating the camera's orbit circle on the floor plane.
pub fn orbit_ring(center: Vec3, radius: f64, segments: usize) -> Vec<Segment> {
    let mut lines = Vec::with_capacity(segments);
    let mut prev = Vec3::new(center.x + radius, center.y, center.z);

    for i in 1..=segments {
        let theta = (2.0 * std::f64::consts::PI * i as f64) / segments as f64;
        let next = Vec3::new(
            center.x + theta.cos() * radius,
            center.y,
            center.z + theta.sin() * radius,
        );
        lines.push(Segment::new(prev, next));
        prev = next;
    }

    lines
}

/// The complete immutable scene, computed once at startup.
#[derive(Debug, Clone)]
pub struct Scene {
    pub grid: Vec<Segment>,
    pub ring: Vec<Segment>,
    pub pyramid: Mesh,
}

impl Scene {
    pub fn new(ring_center: Vec3, ring_radius: f64) -> Self {
        Self {
            grid: floor_grid(),
            ring: orbit_ring(ring_center, ring_radius, RING_SEGMENTS),
            pyramid: Mesh::pyramid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyramid_shape() {
        let mesh = Mesh::pyramid();
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.faces.len(), 5);
        // One quad base, four triangular sides
        assert_eq!(mesh.faces[0].indices.len(), 4);
        for face in &mesh.faces[1..] {
            assert_eq!(face.indices.len(), 3);
        }
        // Indices stay inside the vertex list
        for face in &mesh.faces {
            assert!(face.indices.iter().all(|&i| i < mesh.vertices.len()));
        }
    }

    #[test]
    fn test_grid_line_count() {
        let grid = floor_grid();
        // 21 lines per axis for a ±10 grid with step 1
        assert_eq!(grid.len(), 42);
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = orbit_ring(Vec3::zeros(), 4.0, RING_SEGMENTS);
        assert_eq!(ring.len(), RING_SEGMENTS);
        // Consecutive segments share endpoints and the loop closes
        for pair in ring.windows(2) {
            assert!((pair[0].end - pair[1].start).norm() < 1e-9);
        }
        assert!((ring[0].start - ring[RING_SEGMENTS - 1].end).norm() < 1e-9);
        // Every point sits on the circle
        for seg in &ring {
            assert!((seg.start.norm() - 4.0).abs() < 1e-9);
            assert_eq!(seg.start.y, 0.0);
        }
    }
}
