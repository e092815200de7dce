//! Pupil and sclera color tables with timed pair reselection.
//!
//! Two independent tables are drawn from on a shared timer. A drawn pair
//! never resolves to the same color for both roles: equal pairs are
//! redrawn a bounded number of times, then a deterministic disjoint pick
//! is used. Tables where every cross pair collides are rejected at
//! construction, so the invariant holds from the first frame on.

use embassy_time::{Duration, Instant};

use crate::Rgb;
use crate::config::ConfigError;
use crate::rng::XorShift32;

/// Default interval between palette changes
pub const DEFAULT_PALETTE_INTERVAL: Duration = Duration::from_secs(5);

/// Redraws before falling back to the deterministic disjoint pick
const MAX_RETRIES: u8 = 10;

/// A named 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb,
}

impl PaletteEntry {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Built-in pupil colors
pub const DEFAULT_PUPIL_PALETTE: [PaletteEntry; 5] = [
    PaletteEntry::new("azure", 0, 96, 255),
    PaletteEntry::new("emerald", 0, 200, 80),
    PaletteEntry::new("crimson", 220, 20, 40),
    PaletteEntry::new("amber", 255, 160, 0),
    PaletteEntry::new("violet", 150, 40, 220),
];

/// Built-in sclera colors
pub const DEFAULT_SCLERA_PALETTE: [PaletteEntry; 4] = [
    PaletteEntry::new("white", 255, 255, 255),
    PaletteEntry::new("ice", 200, 225, 255),
    PaletteEntry::new("mint", 210, 255, 225),
    PaletteEntry::new("bone", 235, 225, 200),
];

/// The color pair currently on screen
///
/// Invariant: `pupil != sclera` after every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePalette {
    pub pupil: Rgb,
    pub sclera: Rgb,
}

/// Timed selector over the pupil and sclera tables
pub struct PaletteSelector {
    pupil_table: &'static [PaletteEntry],
    sclera_table: &'static [PaletteEntry],
    interval: Duration,
    last_change: Instant,
}

impl PaletteSelector {
    /// Build a selector over two static tables.
    ///
    /// Fails when either table is empty or when no cross pair of distinct
    /// colors exists (which would leave no valid selection).
    pub fn new(
        pupil_table: &'static [PaletteEntry],
        sclera_table: &'static [PaletteEntry],
        interval: Duration,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        if disjoint_pick(pupil_table, sclera_table).is_none() {
            return Err(ConfigError::DegeneratePalettes);
        }
        Ok(Self {
            pupil_table,
            sclera_table,
            interval,
            last_change: now,
        })
    }

    /// A valid starting pair, chosen deterministically
    pub fn initial(&self) -> ActivePalette {
        // Safe: construction verified a disjoint pair exists.
        match disjoint_pick(self.pupil_table, self.sclera_table) {
            Some(pair) => pair,
            None => ActivePalette {
                pupil: Rgb::new(0, 0, 0),
                sclera: Rgb::new(255, 255, 255),
            },
        }
    }

    /// Check the timer and draw a new distinct color pair when it has
    /// elapsed.
    pub fn maybe_reselect(
        &mut self,
        now: Instant,
        rng: &mut XorShift32,
    ) -> Option<ActivePalette> {
        if now.as_millis() <= self.last_change.as_millis() + self.interval.as_millis() {
            return None;
        }
        self.last_change = now;
        Some(self.draw_pair(rng))
    }

    /// Draw one entry per table, redrawing on color collisions.
    ///
    /// Bounded: after `MAX_RETRIES` equal pairs the sclera entry is
    /// replaced by the first table entry differing from the drawn pupil
    /// color, which construction guarantees to exist.
    fn draw_pair(&self, rng: &mut XorShift32) -> ActivePalette {
        let mut pupil = self.pupil_table[rng.index(self.pupil_table.len())].color;
        for _ in 0..MAX_RETRIES {
            let sclera = self.sclera_table[rng.index(self.sclera_table.len())].color;
            if sclera != pupil {
                return ActivePalette { pupil, sclera };
            }
            pupil = self.pupil_table[rng.index(self.pupil_table.len())].color;
        }

        for entry in self.sclera_table {
            if entry.color != pupil {
                return ActivePalette {
                    pupil,
                    sclera: entry.color,
                };
            }
        }
        // Unreachable under the construction precondition; fall back to
        // the deterministic pair rather than looping.
        self.initial()
    }
}

/// First distinct cross pair of the two tables, if any
fn disjoint_pick(
    pupil_table: &[PaletteEntry],
    sclera_table: &[PaletteEntry],
) -> Option<ActivePalette> {
    for pupil in pupil_table {
        for sclera in sclera_table {
            if pupil.color != sclera.color {
                return Some(ActivePalette {
                    pupil: pupil.color,
                    sclera: sclera.color,
                });
            }
        }
    }
    None
}
