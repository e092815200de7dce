//! Flame effect for an 8-wide addressable LED grid.
//!
//! All variants are stored in an enum to avoid heap allocations. Colors
//! come from a shared heat-to-RGB ramp; a breathing oscillator scales the
//! whole frame before output.

mod banded;
mod breath;
mod ember;

pub use banded::{BandProfile, BandedFlame};
pub use breath::BreathingOscillator;
pub use ember::EmberFlame;

use crate::Rgb;
use crate::config::ConfigError;
use crate::math8::scale8;
use crate::rng::XorShift32;

/// Physical column count of the target LED grid
pub const GRID_WIDTH: usize = 8;

/// Map a heat value to a flame color.
///
/// Empirically tuned ramp, not physically derived: low heat is a red ramp,
/// everything above the breakpoint shifts orange toward yellow. The exact
/// breakpoint and formulas are part of the effect's look.
pub const fn heat_ramp(heat: u8) -> Rgb {
    if heat <= 64 {
        Rgb::new(heat + 16, 0, 0)
    } else {
        Rgb::new(255, heat - 64, 0)
    }
}

/// Per-frame flame color generator
pub trait FlameAlgorithm {
    /// Fill the pixel buffer for one frame
    fn render(&mut self, rng: &mut XorShift32, leds: &mut [Rgb]);
}

/// Flame variant slot
pub enum FlameEffect<const N: usize> {
    /// Randomized banded columns (primary)
    Banded(BandedFlame),
    /// Heat-diffusion embers (experimental, unverified tuning)
    Ember(EmberFlame<N>),
}

impl<const N: usize> FlameEffect<N> {
    fn render(&mut self, rng: &mut XorShift32, leds: &mut [Rgb]) {
        match self {
            Self::Banded(effect) => effect.render(rng, leds),
            Self::Ember(effect) => effect.render(rng, leds),
        }
    }
}

/// Owns a flame variant, the breathing oscillator and the pixel buffer.
///
/// N is the LED pixel count; it must be a non-zero multiple of
/// [`GRID_WIDTH`] so columns map onto the physical wiring
/// (`index = column + row * 8`).
pub struct FlameRenderer<const N: usize> {
    effect: FlameEffect<N>,
    breath: BreathingOscillator,
    rng: XorShift32,
    buffer: [Rgb; N],
}

impl<const N: usize> FlameRenderer<N> {
    /// Banded-column flame, the production variant
    pub fn new_banded(profile: BandProfile, seed: u32) -> Result<Self, ConfigError> {
        Self::with_effect(FlameEffect::Banded(BandedFlame::new(profile)), seed)
    }

    /// Heat-diffusion flame. Experimental: the diffusion tuning has not
    /// been validated on hardware and the output may not read as fire.
    pub fn new_ember(seed: u32) -> Result<Self, ConfigError> {
        Self::with_effect(FlameEffect::Ember(EmberFlame::new()), seed)
    }

    fn with_effect(effect: FlameEffect<N>, seed: u32) -> Result<Self, ConfigError> {
        if N == 0 {
            return Err(ConfigError::ZeroFlamePixels);
        }
        if !N.is_multiple_of(GRID_WIDTH) {
            return Err(ConfigError::FlameGridMisaligned);
        }
        Ok(Self {
            effect,
            breath: BreathingOscillator::new(),
            rng: XorShift32::new(seed),
            buffer: [Rgb::new(0, 0, 0); N],
        })
    }

    /// Render one frame and return the scaled pixel buffer.
    ///
    /// The caller pushes the returned slice to the LED driver in a single
    /// write per frame.
    pub fn render(&mut self) -> &[Rgb] {
        self.effect.render(&mut self.rng, &mut self.buffer);

        let scale = self.breath.tick();
        for led in &mut self.buffer {
            led.r = scale8(led.r, scale);
            led.g = scale8(led.g, scale);
            led.b = scale8(led.b, scale);
        }

        &self.buffer
    }
}
