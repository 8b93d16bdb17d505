/// Terminal frontend for the orbiting-scene renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use orbit3d_core::{Compositor, OrbitAnimator, SharedState};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::CellRaster;

/// How long the event loop waits for input before checking the redraw flag.
const EVENT_POLL: Duration = Duration::from_millis(8);

/// Interactive terminal application driving the scene renderer.
///
/// The animation tick thread advances the orbit and raises the redraw flag;
/// this loop consumes the flag, renders into the offscreen cell raster, and
/// presents it. Speed is adjusted with the arrow keys.
pub struct TerminalApp {
    shared: SharedState,
    animator: OrbitAnimator,
    compositor: Compositor,
    raster: CellRaster,
    running: bool,
    frame_count: u32,
    last_fps_update: Instant,
    fps: f32,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let shared = SharedState::new();

        Ok(Self {
            animator: OrbitAnimator::new(shared.clone()),
            shared,
            compositor: Compositor::standard(),
            raster: CellRaster::new(u32::from(width), u32::from(height)),
            running: true,
            frame_count: 0,
            last_fps_update: Instant::now(),
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        self.animator.start()?;

        let result = self.main_loop();

        // Cleanup: the tick thread is joined before the terminal is restored
        self.animator.stop();
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            if event::poll(EVENT_POLL)? {
                self.handle_event(event::read()?);
            }

            if self.shared.take_redraw() {
                if let Err(err) = self.render_frame() {
                    // A rejected present loses this frame only; the animator
                    // keeps ticking and the next frame retries
                    log::warn!("frame dropped: {err}");
                }
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Right => self.shared.nudge_speed(1),
                KeyCode::Left => self.shared.nudge_speed(-1),
                KeyCode::Up => self.shared.nudge_speed(10),
                KeyCode::Down => self.shared.nudge_speed(-10),
                _ => {}
            },
            Event::Resize(width, height) => {
                self.on_viewport_changed(u32::from(width), u32::from(height));
            }
            _ => {}
        }
    }

    /// Recreate the offscreen raster for a new viewport and request a repaint.
    pub fn on_viewport_changed(&mut self, width: u32, height: u32) {
        self.raster.resize(width, height);
        self.shared.request_redraw();
    }

    fn render_frame(&mut self) -> io::Result<()> {
        self.compositor.render(self.shared.angle(), &mut self.raster);

        let mut stdout = stdout();
        self.raster.present(&mut stdout)?;
        self.draw_status_line(&mut stdout)?;
        stdout.flush()?;

        self.update_fps();
        Ok(())
    }

    fn draw_status_line<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "orbit3d | speed {:>3} | {:>5.1} fps | Left/Right=speed ±1 Up/Down=±10 Q=quit",
                self.shared.speed(),
                self.fps
            )),
            ResetColor
        )
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        let elapsed = now - self.last_fps_update;
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            self.frame_count = 0;
            self.last_fps_update = now;
        }
    }
}
