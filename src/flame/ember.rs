//! Heat-diffusion ember flame (experimental).
//!
//! Classic cool/rise/ignite over a per-pixel heat buffer: every cell
//! cools a little, heat drifts up from the row below, and the bottom row
//! randomly re-ignites. The tuning here has not been validated on
//! hardware; the banded variant is the production effect.

use super::{FlameAlgorithm, GRID_WIDTH, heat_ramp};
use crate::Rgb;
use crate::rng::XorShift32;

/// Maximum random cooling per cell per frame
const COOLING: u32 = 40;

/// Chance (percent) that the bottom cell of a column re-ignites
const IGNITION_CHANCE: u32 = 45;

/// Heat range of a fresh ignition
const IGNITION_HEAT: (u32, u32) = (160, 255);

/// Bottom-row decay when a column does not ignite
const SMOLDER: u8 = 12;

/// Heat-diffusion flame state
///
/// N is the LED pixel count, row-major with `index = column + row * 8`;
/// row 0 is the top of the grid.
pub struct EmberFlame<const N: usize> {
    heat: [u8; N],
}

impl<const N: usize> EmberFlame<N> {
    pub const fn new() -> Self {
        Self { heat: [0; N] }
    }
}

impl<const N: usize> Default for EmberFlame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FlameAlgorithm for EmberFlame<N> {
    fn render(&mut self, rng: &mut XorShift32, leds: &mut [Rgb]) {
        let rows = N / GRID_WIDTH;

        for column in 0..GRID_WIDTH {
            // Rise: each cell takes the cooled heat of the cell below.
            for row in 0..rows.saturating_sub(1) {
                let below = self.heat[column + (row + 1) * GRID_WIDTH];
                #[allow(clippy::cast_possible_truncation)]
                let cooled = below.saturating_sub(rng.range_inclusive(0, COOLING) as u8);
                self.heat[column + row * GRID_WIDTH] = cooled;
            }

            // Ignite or smolder the bottom row.
            let bottom = column + (rows - 1) * GRID_WIDTH;
            if rng.range_inclusive(0, 99) < IGNITION_CHANCE {
                #[allow(clippy::cast_possible_truncation)]
                let spark = rng.range_inclusive(IGNITION_HEAT.0, IGNITION_HEAT.1) as u8;
                self.heat[bottom] = spark;
            } else {
                self.heat[bottom] = self.heat[bottom].saturating_sub(SMOLDER);
            }
        }

        for (led, heat) in leds.iter_mut().zip(self.heat.iter()) {
            *led = heat_ramp(*heat);
        }
    }
}
