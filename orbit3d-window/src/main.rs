/// Orbit3D Window Demo - Orbiting Pyramid Scene
///
/// Same scene as the terminal frontend, presented as a pixel buffer in a
/// native window. Arrow keys adjust the orbit speed, ESC or Q quits.

mod raster;

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use orbit3d_core::{Compositor, OrbitAnimator, SharedState};
use raster::PixelRaster;
use std::error::Error;
use std::time::Duration;

const INITIAL_WIDTH: usize = 800;
const INITIAL_HEIGHT: usize = 600;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut window = Window::new(
        "orbit3d - arrows: speed, esc: quit",
        INITIAL_WIDTH,
        INITIAL_HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(Duration::from_micros(16_667)));

    let shared = SharedState::new();
    let mut animator = OrbitAnimator::new(shared.clone());
    let compositor = Compositor::standard();
    let mut frame = PixelRaster::new(INITIAL_WIDTH as u32, INITIAL_HEIGHT as u32);

    animator.start()?;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Q, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::Right, KeyRepeat::Yes) {
            shared.nudge_speed(1);
        }
        if window.is_key_pressed(Key::Left, KeyRepeat::Yes) {
            shared.nudge_speed(-1);
        }
        if window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            shared.nudge_speed(10);
        }
        if window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            shared.nudge_speed(-10);
        }

        let (width, height) = window.get_size();
        if (width as u32, height as u32) != frame.size() {
            frame.resize(width as u32, height as u32);
            shared.request_redraw();
        }

        if shared.take_redraw() {
            compositor.render(shared.angle(), &mut frame);
        }
        window.update_with_buffer(frame.pixels(), width, height)?;
    }

    animator.stop();
    Ok(())
}
