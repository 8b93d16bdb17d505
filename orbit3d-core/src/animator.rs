/// Animation tick thread and the scalars it shares with the draw path
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Target tick period of the animation loop.
pub const TICK_PERIOD: Duration = Duration::from_millis(16);
/// Orbit advance per tick at the reference speed.
pub const BASE_STEP: f64 = 0.01;
/// Speed value at which the orbit advances by exactly `BASE_STEP` per tick.
pub const REFERENCE_SPEED: f64 = 60.0;
/// Per-tick angle increase per unit of speed.
const STEP_PER_SPEED_UNIT: f64 = BASE_STEP / REFERENCE_SPEED;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 101;
pub const DEFAULT_SPEED: u32 = 35;

/// Orbit advance for one tick at the given speed value. Linear in `speed`.
pub fn angular_step(speed: u32) -> f64 {
    f64::from(speed) * STEP_PER_SPEED_UNIT
}

/// The scalars shared between the tick thread and the frontend.
///
/// Each value is a single word read and written atomically; no invariant
/// spans two of them, so no lock is needed. The angle is written only by the
/// tick thread, the speed only by the frontend, and the redraw flag is a
/// collapse-to-one request bit.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Shared>,
}

struct Shared {
    angle_bits: AtomicU64,
    speed: AtomicU32,
    redraw: AtomicBool,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Shared {
                angle_bits: AtomicU64::new(0f64.to_bits()),
                speed: AtomicU32::new(DEFAULT_SPEED),
                // The first frame is always owed
                redraw: AtomicBool::new(true),
            }),
        }
    }

    pub fn angle(&self) -> f64 {
        f64::from_bits(self.inner.angle_bits.load(Ordering::Relaxed))
    }

    fn store_angle(&self, angle: f64) {
        self.inner.angle_bits.store(angle.to_bits(), Ordering::Relaxed);
    }

    pub fn speed(&self) -> u32 {
        self.inner.speed.load(Ordering::Relaxed)
    }

    /// Set the speed value, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&self, value: u32) {
        let clamped = value.clamp(MIN_SPEED, MAX_SPEED);
        self.inner.speed.store(clamped, Ordering::Relaxed);
    }

    /// Adjust the speed by a signed amount, saturating at the range ends.
    pub fn nudge_speed(&self, delta: i32) {
        let next = (self.speed() as i64 + i64::from(delta))
            .clamp(i64::from(MIN_SPEED), i64::from(MAX_SPEED)) as u32;
        self.set_speed(next);
    }

    /// Request one redraw. Requests before the next frame collapse into one.
    pub fn request_redraw(&self) {
        self.inner.redraw.store(true, Ordering::Release);
    }

    /// Consume a pending redraw request, if any.
    pub fn take_redraw(&self) -> bool {
        self.inner.redraw.swap(false, Ordering::Acquire)
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic orbit advance with an explicit Stopped/Running lifecycle.
///
/// `start` spawns the tick thread; `stop` signals it and joins, so no tick
/// can land after `stop` returns. Both are no-ops in the wrong state.
pub struct OrbitAnimator {
    shared: SharedState,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl OrbitAnimator {
    pub fn new(shared: SharedState) -> Self {
        Self {
            shared,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Transition Stopped -> Running by spawning the tick thread.
    pub fn start(&mut self) -> io::Result<()> {
        if self.worker.is_some() {
            return Ok(());
        }

        self.running.store(true, Ordering::SeqCst);
        let shared = self.shared.clone();
        let running = Arc::clone(&self.running);

        let handle = thread::Builder::new()
            .name("orbit-tick".to_string())
            .spawn(move || {
                while running.load(Ordering::SeqCst) {
                    let step = angular_step(shared.speed());
                    shared.store_angle(shared.angle() + step);
                    shared.request_redraw();
                    thread::sleep(TICK_PERIOD);
                }
            })?;

        self.worker = Some(handle);
        Ok(())
    }

    /// Transition Running -> Stopped, joining the tick thread.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for OrbitAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}
