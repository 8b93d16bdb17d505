/// Orbit3D Core Library - Scene math and frame composition
///
/// This library provides the stateless core of the orbiting-scene renderer:
/// vector math, the fixed scene geometry, per-frame view basis and projection,
/// painter's-algorithm face rendering, and the animation tick thread. Frontends
/// supply a `DrawSurface` and present the finished frame.

pub mod animator;
pub mod geometry;
pub mod math;
pub mod projection;
pub mod render;
pub mod surface;
pub mod view;

// Re-export commonly used types
pub use animator::{OrbitAnimator, SharedState};
pub use geometry::{Face, Mesh, Scene, Segment};
pub use projection::Viewport;
pub use render::Compositor;
pub use surface::{DrawSurface, Rgb, ScreenPoint};
pub use view::{OrbitCamera, ViewBasis};
