//! Breathing brightness oscillator.

/// Lower brightness bound
pub const BREATH_MIN: f32 = 0.1;

/// Upper brightness bound
pub const BREATH_MAX: f32 = 1.0;

/// Default per-frame step (valid range 0.01-0.02)
pub const BREATH_STEP: f32 = 0.015;

/// Triangle-wave brightness multiplier.
///
/// The level steps between [`BREATH_MIN`] and [`BREATH_MAX`], reversing
/// direction at each bound. Applied as a global scale over the flame
/// frame buffer.
#[derive(Debug, Clone)]
pub struct BreathingOscillator {
    level: f32,
    step: f32,
    rising: bool,
}

impl Default for BreathingOscillator {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingOscillator {
    pub const fn new() -> Self {
        Self::with_step(BREATH_STEP)
    }

    pub const fn with_step(step: f32) -> Self {
        Self {
            level: BREATH_MAX,
            step,
            rising: false,
        }
    }

    /// Current brightness level in `[BREATH_MIN, BREATH_MAX]`
    pub const fn level(&self) -> f32 {
        self.level
    }

    /// Advance one frame and return the 8-bit scale for the new level
    pub fn tick(&mut self) -> u8 {
        if self.rising {
            self.level += self.step;
            if self.level >= BREATH_MAX {
                self.level = BREATH_MAX;
                self.rising = false;
            }
        } else {
            self.level -= self.step;
            if self.level <= BREATH_MIN {
                self.level = BREATH_MIN;
                self.rising = true;
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (self.level * 255.0) as u8
        }
    }
}
