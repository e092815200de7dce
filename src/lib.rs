#![no_std]

pub mod blink;
pub mod compositor;
pub mod config;
pub mod engine;
pub mod flame;
pub mod frame_scheduler;
pub mod geometry;
pub mod look;
pub mod mask;
pub mod math8;
pub mod palette;
pub mod rng;

pub use blink::{BlinkAnimator, LidOffsets, LidState};
pub use compositor::{Compositor, LayerId};
pub use config::{BoardConfig, ConfigError, Pin};
pub use engine::{EyeEngine, EyeEngineConfig, EyeFrame};
pub use flame::{BandProfile, BreathingOscillator, FlameRenderer, heat_ramp};
pub use frame_scheduler::{FrameClock, FrameResult, FrameScheduler, NoFlame};
pub use geometry::{Point, seek};
pub use look::{Look, LookSelector};
pub use palette::{ActivePalette, PaletteEntry, PaletteSelector};
pub use rng::XorShift32;

pub use embassy_time::{Duration, Instant};
use smart_leds::RGB8;

/// Color type shared with the LED driver stack
pub type Rgb = RGB8;

/// Abstract display surface trait
///
/// Implement this trait to bind the engine to a concrete layered display
/// stack: indexed-color bitmap layers with a mutable screen-space origin
/// and a single-entry color palette each. The engine is generic over this
/// trait.
pub trait EyeSurface {
    /// Move a layer to a new screen-space origin
    fn move_layer(&mut self, layer: LayerId, x: i32, y: i32);

    /// Change the fill color of a layer's palette
    fn set_layer_color(&mut self, layer: LayerId, color: Rgb);

    /// Present the composed frame
    fn present(&mut self);
}

/// Abstract addressable-LED driver trait
///
/// One call per frame with the full pixel buffer; the implementation is
/// expected to latch all pixels in a single show operation.
pub trait FlameOutput {
    /// Write colors to the LED array
    fn write(&mut self, colors: &[Rgb]);
}
