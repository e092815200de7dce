//! Eyelid blink state machine.
//!
//! Two full-width rectangular lids slide toward the vertical center and
//! back, gated by a randomized inter-blink timer. The first blink waits
//! longer than the ones after it; the shorter follow-up interval is
//! intentional and gives the eye a settling-in feel.

use embassy_time::{Duration, Instant};

use crate::rng::XorShift32;

/// Lid travel per frame, in display units
pub const LID_STEP: i32 = 60;

/// Offset at which the lids meet in the middle
pub const LID_CLOSED: i32 = 120;

/// Display height the lid masks are sized for
pub const LID_SPAN: i32 = 240;

/// Delay range before the first blink, in milliseconds
const FIRST_BLINK_MS: (u32, u32) = (5_000, 15_000);

/// Delay range between subsequent blinks, in milliseconds
const NEXT_BLINK_MS: (u32, u32) = (2_000, 5_000);

/// Blink phases; `Open` is the rest state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LidState {
    Open,
    Closing,
    Opening,
}

/// Screen-space vertical offsets for the two lid layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LidOffsets {
    pub upper: i32,
    pub lower: i32,
}

/// Randomly-timed open -> closed -> open lid animation
pub struct BlinkAnimator {
    state: LidState,
    offset: i32,
    next_blink_at: Instant,
}

impl BlinkAnimator {
    pub fn new(now: Instant, rng: &mut XorShift32) -> Self {
        Self {
            state: LidState::Open,
            offset: 0,
            next_blink_at: now + uniform_delay(rng, FIRST_BLINK_MS),
        }
    }

    pub const fn state(&self) -> LidState {
        self.state
    }

    pub const fn is_blinking(&self) -> bool {
        !matches!(self.state, LidState::Open)
    }

    /// Advance one frame and return the lid layer offsets.
    ///
    /// Offsets are clamped to `[0, LID_CLOSED]`, so a step size that does
    /// not divide the closed threshold overshoots into the clamp rather
    /// than past the masks' travel.
    pub fn update(&mut self, now: Instant, rng: &mut XorShift32) -> LidOffsets {
        self.update_with_step(now, rng, LID_STEP)
    }

    /// Same as [`Self::update`] with an explicit step size
    pub fn update_with_step(
        &mut self,
        now: Instant,
        rng: &mut XorShift32,
        step: i32,
    ) -> LidOffsets {
        match self.state {
            LidState::Open => {
                if now.as_millis() >= self.next_blink_at.as_millis() {
                    self.state = LidState::Closing;
                }
            }
            LidState::Closing => {
                self.offset = (self.offset + step).min(LID_CLOSED);
                if self.offset >= LID_CLOSED {
                    self.state = LidState::Opening;
                }
            }
            LidState::Opening => {
                self.offset = (self.offset - step).max(0);
                if self.offset <= 0 {
                    self.state = LidState::Open;
                    self.next_blink_at = now + uniform_delay(rng, NEXT_BLINK_MS);
                }
            }
        }

        self.offsets()
    }

    /// Current lid layer offsets without advancing the animation
    pub const fn offsets(&self) -> LidOffsets {
        LidOffsets {
            upper: -(LID_SPAN / 2) + self.offset,
            lower: LID_SPAN - self.offset,
        }
    }
}

fn uniform_delay(rng: &mut XorShift32, range: (u32, u32)) -> Duration {
    Duration::from_millis(u64::from(rng.range_inclusive(range.0, range.1)))
}
