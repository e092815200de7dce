//! Look table and timed target reselection.
//!
//! A "look" is a named pupil target plus the per-frame approach speed.
//! The selector owns the table and an elapsed-time trigger; on trigger it
//! draws uniformly from all entries (reselecting the current look is
//! allowed, which reads as the eye holding its gaze).

use embassy_time::{Duration, Instant};
use heapless::LinearMap;

use crate::config::ConfigError;
use crate::geometry::Point;
use crate::rng::XorShift32;

/// Default interval between look changes
pub const DEFAULT_LOOK_INTERVAL: Duration = Duration::from_secs(2);

/// A named gaze target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Look {
    pub name: &'static str,
    pub target: Point,
    /// Approach speed in display units per frame
    pub speed: f32,
}

impl Look {
    pub const fn new(name: &'static str, x: f32, y: f32, speed: f32) -> Self {
        Self {
            name,
            target: Point::new(x, y),
            speed,
        }
    }
}

/// Built-in gaze targets for a 240x240 round display
pub const DEFAULT_LOOKS: [Look; 7] = [
    Look::new("center", 120.0, 120.0, 5.0),
    Look::new("left", 70.0, 120.0, 10.0),
    Look::new("right", 170.0, 120.0, 10.0),
    Look::new("up", 120.0, 70.0, 7.0),
    Look::new("down", 120.0, 170.0, 7.0),
    Look::new("upper_left", 85.0, 85.0, 4.0),
    Look::new("lower_right", 155.0, 155.0, 2.0),
];

/// Timed uniform selector over a fixed look table
///
/// N is the table capacity.
pub struct LookSelector<const N: usize> {
    table: LinearMap<&'static str, Look, N>,
    interval: Duration,
    last_change: Instant,
}

impl<const N: usize> LookSelector<N> {
    /// Build a selector from a static look slice.
    ///
    /// Fails on an empty table, a duplicate name, or a table larger than
    /// the capacity N.
    pub fn new(
        looks: &[Look],
        interval: Duration,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        if looks.is_empty() {
            return Err(ConfigError::EmptyLookTable);
        }
        let mut table = LinearMap::new();
        for look in looks {
            if table.contains_key(&look.name) {
                return Err(ConfigError::DuplicateLook);
            }
            if table.insert(look.name, *look).is_err() {
                return Err(ConfigError::LookTableOverflow);
            }
        }
        Ok(Self {
            table,
            interval,
            last_change: now,
        })
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&Look> {
        self.table.get(name)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Check the timer and draw a new look when it has elapsed.
    ///
    /// Returns `None` while the interval has not strictly elapsed.
    pub fn maybe_reselect(
        &mut self,
        now: Instant,
        rng: &mut XorShift32,
    ) -> Option<Look> {
        if now.as_millis() <= self.last_change.as_millis() + self.interval.as_millis() {
            return None;
        }
        self.last_change = now;

        let pick = rng.index(self.table.len());
        self.table.iter().nth(pick).map(|(_, look)| *look)
    }
}
