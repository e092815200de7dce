//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::compositor::Compositor;
use crate::engine::EyeEngine;
use crate::flame::FlameRenderer;
use crate::{EyeSurface, FlameOutput};

/// Default target frame rate (40 FPS).
pub const DEFAULT_FPS: u32 = 40;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// How long to wait until the next frame (zero when the frame overran).
    pub sleep_duration: Duration,
}

/// Fixed-budget frame clock.
///
/// Each frame gets the full budget measured from its own start; there is
/// no catch-up after an overrun, the next frame simply starts immediately.
/// Sustained overrun therefore drifts, which is acceptable for a cosmetic
/// effect.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame_duration: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub const fn new() -> Self {
        Self::with_frame_duration(DEFAULT_FRAME_DURATION)
    }

    pub const fn with_frame_duration(frame_duration: Duration) -> Self {
        Self { frame_duration }
    }

    /// Remaining budget for a frame started at `frame_start`.
    ///
    /// Never negative: an overrunning frame gets a zero sleep.
    pub fn frame_budget(&self, frame_start: Instant, now: Instant) -> Duration {
        let elapsed = now.as_millis().saturating_sub(frame_start.as_millis());
        if elapsed >= self.frame_duration.as_millis() {
            return Duration::from_millis(0);
        }
        Duration::from_millis(self.frame_duration.as_millis() - elapsed)
    }
}

/// No-op LED driver for boards without the flame array
pub struct NoFlame;

impl FlameOutput for NoFlame {
    fn write(&mut self, _colors: &[crate::Rgb]) {}
}

/// Frame scheduler - drives the engine, compositor and flame each frame.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, surface, flame_out, flame);
///
/// loop {
///     let frame_start = Instant::now();
///     scheduler.tick(frame_start);
///
///     let result = scheduler.finish(frame_start, Instant::now());
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<D: EyeSurface, O: FlameOutput, const FLAME_PIXELS: usize> {
    surface: D,
    flame_out: O,
    engine: EyeEngine,
    flame: Option<FlameRenderer<FLAME_PIXELS>>,
    compositor: Compositor,
    clock: FrameClock,
}

impl<D: EyeSurface, O: FlameOutput, const FLAME_PIXELS: usize>
    FrameScheduler<D, O, FLAME_PIXELS>
{
    /// Create a scheduler with the default 40 FPS budget.
    pub fn new(
        engine: EyeEngine,
        surface: D,
        flame_out: O,
        flame: Option<FlameRenderer<FLAME_PIXELS>>,
    ) -> Self {
        Self::with_clock(engine, surface, flame_out, flame, FrameClock::new())
    }

    /// Create a scheduler with a custom frame clock.
    pub fn with_clock(
        engine: EyeEngine,
        surface: D,
        flame_out: O,
        flame: Option<FlameRenderer<FLAME_PIXELS>>,
        clock: FrameClock,
    ) -> Self {
        Self {
            surface,
            flame_out,
            engine,
            flame,
            compositor: Compositor::new(),
            clock,
        }
    }

    /// Perform one frame of work: advance the simulation, push the eye
    /// frame to the display, then render and write the flame buffer.
    pub fn tick(&mut self, now: Instant) {
        let frame = self.engine.update(now);
        self.compositor.push(&mut self.surface, &frame);

        if let Some(flame) = &mut self.flame {
            self.flame_out.write(flame.render());
        }
    }

    /// Compute the end-of-frame sleep from the frame's own start time.
    pub fn finish(&self, frame_start: Instant, now: Instant) -> FrameResult {
        FrameResult {
            sleep_duration: self.clock.frame_budget(frame_start, now),
        }
    }

    /// Get a reference to the display surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Get a reference to the LED driver.
    pub fn flame_output(&self) -> &O {
        &self.flame_out
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &EyeEngine {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut EyeEngine {
        &mut self.engine
    }
}
