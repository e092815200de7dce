//! Eye animation engine - the main orchestrator.
//!
//! Owns all per-frame simulation state (pupil position, look and palette
//! selectors, optional blink) and advances it once per frame. There are
//! no globals; the caller owns the engine and hands it the monotonic
//! clock reading.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::blink::{BlinkAnimator, LidOffsets};
use crate::config::ConfigError;
use crate::geometry::{Point, seek};
use crate::look::{DEFAULT_LOOK_INTERVAL, DEFAULT_LOOKS, Look, LookSelector};
use crate::palette::{
    ActivePalette, DEFAULT_PALETTE_INTERVAL, DEFAULT_PUPIL_PALETTE, DEFAULT_SCLERA_PALETTE,
    PaletteEntry, PaletteSelector,
};
use crate::rng::XorShift32;

/// Look table capacity
pub const MAX_LOOKS: usize = 16;

/// Configuration for the eye engine
#[derive(Clone, Copy)]
pub struct EyeEngineConfig {
    pub looks: &'static [Look],
    pub pupil_palette: &'static [PaletteEntry],
    pub sclera_palette: &'static [PaletteEntry],
    pub look_interval: Duration,
    pub palette_interval: Duration,
    pub blink_enabled: bool,
    /// PRNG seed; any value works, zero is remapped
    pub seed: u32,
}

impl Default for EyeEngineConfig {
    fn default() -> Self {
        Self {
            looks: &DEFAULT_LOOKS,
            pupil_palette: &DEFAULT_PUPIL_PALETTE,
            sclera_palette: &DEFAULT_SCLERA_PALETTE,
            look_interval: DEFAULT_LOOK_INTERVAL,
            palette_interval: DEFAULT_PALETTE_INTERVAL,
            blink_enabled: false,
            seed: 1,
        }
    }
}

/// One frame of simulation output, consumed by the compositor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeFrame {
    pub pupil: Point,
    pub palette: ActivePalette,
    /// Present only when the blink feature is enabled
    pub lids: Option<LidOffsets>,
}

/// Eye engine - owns the simulation state graph
pub struct EyeEngine {
    pupil: Point,
    target: Point,
    speed: f32,
    looks: LookSelector<MAX_LOOKS>,
    palettes: PaletteSelector,
    active: ActivePalette,
    blink: Option<BlinkAnimator>,
    rng: XorShift32,
}

impl EyeEngine {
    /// Create an engine; validates the look and palette tables.
    ///
    /// The pupil starts parked on the first table entry's target.
    pub fn new(config: &EyeEngineConfig, now: Instant) -> Result<Self, ConfigError> {
        let mut rng = XorShift32::new(config.seed);
        let looks = LookSelector::new(config.looks, config.look_interval, now)?;
        let palettes = PaletteSelector::new(
            config.pupil_palette,
            config.sclera_palette,
            config.palette_interval,
            now,
        )?;
        let active = palettes.initial();
        let rest = config.looks[0];
        let blink = config
            .blink_enabled
            .then(|| BlinkAnimator::new(now, &mut rng));

        Ok(Self {
            pupil: rest.target,
            target: rest.target,
            speed: rest.speed,
            looks,
            palettes,
            active,
            blink,
            rng,
        })
    }

    /// Current pupil position
    pub const fn pupil(&self) -> Point {
        self.pupil
    }

    /// Current color pair
    pub const fn palette(&self) -> ActivePalette {
        self.active
    }

    /// Force a gaze target, bypassing the selector timer
    pub fn apply_look(&mut self, look: &Look) {
        self.target = look.target;
        self.speed = look.speed;
    }

    /// Look up a table entry by name
    pub fn look(&self, name: &str) -> Option<&Look> {
        self.looks.get(name)
    }

    /// Advance the simulation by one frame.
    ///
    /// Order per frame: eyelids, palette timer, look timer, pupil step.
    pub fn update(&mut self, now: Instant) -> EyeFrame {
        let lids = self
            .blink
            .as_mut()
            .map(|blink| blink.update(now, &mut self.rng));

        if let Some(palette) = self.palettes.maybe_reselect(now, &mut self.rng) {
            self.active = palette;
            #[cfg(feature = "esp32-log")]
            println!(
                "palette -> pupil {:?} sclera {:?}",
                self.active.pupil, self.active.sclera
            );
        }

        if let Some(look) = self.looks.maybe_reselect(now, &mut self.rng) {
            self.target = look.target;
            self.speed = look.speed;
            #[cfg(feature = "esp32-log")]
            println!("look -> {}", look.name);
        }

        self.pupil = seek(self.pupil, self.target, self.speed);

        EyeFrame {
            pupil: self.pupil,
            palette: self.active,
            lids,
        }
    }
}
