/// Orbit3D Terminal Demo - Orbiting Pyramid Scene
///
/// A camera circles a flat-shaded pyramid above a floor grid, tracing its
/// orbit ring. Controls:
///   - Left/Right: speed -1/+1
///   - Up/Down: speed +10/-10
///   - Q/ESC: Quit

use std::io;
use orbit3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut app = TerminalApp::new()?;
    app.run()
}
