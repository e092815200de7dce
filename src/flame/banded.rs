//! Banded random column flame.
//!
//! Each frame every column is split top-to-bottom into yellow, orange and
//! red bands with randomized extents, and each pixel gets a heat value
//! drawn from its band's characteristic range. The per-pixel draw is what
//! produces the flicker; fixed band colors look static.

use super::{FlameAlgorithm, GRID_WIDTH, heat_ramp};
use crate::Rgb;
use crate::rng::XorShift32;

/// Heat range for the yellow band
const YELLOW_HEAT: (u32, u32) = (120, 150);

/// Heat range for the orange band
const ORANGE_HEAT: (u32, u32) = (85, 120);

/// Heat range for the red band
const RED_HEAT: (u32, u32) = (0, 85);

/// Maximum band extent per column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandProfile {
    /// Yellow and orange extents of 1-2 pixels
    Narrow,
    /// Yellow and orange extents of 1-3 pixels
    Wide,
}

impl BandProfile {
    const fn max_extent(self) -> u32 {
        match self {
            Self::Narrow => 2,
            Self::Wide => 3,
        }
    }
}

/// Banded-column flame state
#[derive(Debug, Clone)]
pub struct BandedFlame {
    profile: BandProfile,
}

impl BandedFlame {
    pub const fn new(profile: BandProfile) -> Self {
        Self { profile }
    }
}

impl FlameAlgorithm for BandedFlame {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, rng: &mut XorShift32, leds: &mut [Rgb]) {
        let rows = leds.len() / GRID_WIDTH;
        let max_extent = self.profile.max_extent();

        for column in 0..GRID_WIDTH {
            let yellow = rng.range_inclusive(1, max_extent) as usize;
            let orange = yellow + rng.range_inclusive(1, max_extent) as usize;

            for row in 0..rows {
                let (lo, hi) = if row < yellow {
                    YELLOW_HEAT
                } else if row < orange {
                    ORANGE_HEAT
                } else {
                    RED_HEAT
                };
                // Index follows the physical wiring of the grid.
                let heat = rng.range_inclusive(lo, hi) as u8;
                leds[column + row * GRID_WIDTH] = heat_ramp(heat);
            }
        }
    }
}
