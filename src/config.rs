//! Board configuration and startup validation.
//!
//! Pin names are resolved to handles once at startup; an unknown name is
//! fatal, there is no degraded mode for a display that cannot come up.

use core::fmt;

use heapless::String;

use crate::flame::GRID_WIDTH;

/// Highest user GPIO on the supported bank (RP2040 bank 0)
const MAX_GPIO: u8 = 28;

/// Configuration failure, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Pin name did not resolve to a known GPIO
    UnknownPin(String<16>),
    /// Flame enabled with zero LED pixels
    ZeroFlamePixels,
    /// Flame pixel count is not a multiple of the grid width
    FlameGridMisaligned,
    /// No cross pair of distinct pupil/sclera colors exists
    DegeneratePalettes,
    /// Look table has no entries
    EmptyLookTable,
    /// Look table has a repeated name
    DuplicateLook,
    /// Look table exceeds the selector capacity
    LookTableOverflow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPin(name) => write!(f, "unknown pin: {name}"),
            Self::ZeroFlamePixels => write!(f, "flame enabled with zero pixels"),
            Self::FlameGridMisaligned => {
                write!(f, "flame pixel count is not a multiple of {GRID_WIDTH}")
            }
            Self::DegeneratePalettes => {
                write!(f, "pupil and sclera palettes have no distinct pair")
            }
            Self::EmptyLookTable => write!(f, "look table is empty"),
            Self::DuplicateLook => write!(f, "look table has a duplicate name"),
            Self::LookTableOverflow => write!(f, "look table exceeds capacity"),
        }
    }
}

/// A resolved GPIO handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(u8);

impl Pin {
    /// Resolve a `"GP<n>"` pin name to a handle.
    ///
    /// Resolution happens once at startup; the animation core only ever
    /// sees validated handles.
    pub fn resolve(name: &str) -> Result<Self, ConfigError> {
        let number = name
            .strip_prefix("GP")
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|&n| n <= MAX_GPIO);

        match number {
            Some(n) => Ok(Self(n)),
            None => {
                // Truncated copy is fine for an error message.
                let mut copy = String::new();
                for c in name.chars() {
                    if copy.push(c).is_err() {
                        break;
                    }
                }
                Err(ConfigError::UnknownPin(copy))
            }
        }
    }

    /// Raw GPIO number for the platform HAL
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Wiring and feature configuration for one eye unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub spi_clock: Pin,
    pub spi_mosi: Pin,
    pub display_cs: Pin,
    pub display_dc: Pin,
    pub display_rst: Pin,
    pub flame_data: Pin,
    pub flame_pixels: usize,
    pub flame_enabled: bool,
}

impl BoardConfig {
    /// Resolve all pin names and validate the LED geometry.
    #[allow(clippy::too_many_arguments)]
    pub fn from_names(
        spi_clock: &str,
        spi_mosi: &str,
        display_cs: &str,
        display_dc: &str,
        display_rst: &str,
        flame_data: &str,
        flame_pixels: usize,
        flame_enabled: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            spi_clock: Pin::resolve(spi_clock)?,
            spi_mosi: Pin::resolve(spi_mosi)?,
            display_cs: Pin::resolve(display_cs)?,
            display_dc: Pin::resolve(display_dc)?,
            display_rst: Pin::resolve(display_rst)?,
            flame_data: Pin::resolve(flame_data)?,
            flame_pixels,
            flame_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the LED geometry against the flame grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flame_enabled {
            if self.flame_pixels == 0 {
                return Err(ConfigError::ZeroFlamePixels);
            }
            if !self.flame_pixels.is_multiple_of(GRID_WIDTH) {
                return Err(ConfigError::FlameGridMisaligned);
            }
        }
        Ok(())
    }
}
