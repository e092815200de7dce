//! Pushes simulation frames to the display layer stack.
//!
//! The display holds four indexed-color layers: sclera background, pupil
//! disc, and the two lid masks. Positions are pushed every frame; palette
//! colors only when they change, since palette writes are the expensive
//! part on most panels.

use crate::EyeSurface;
use crate::engine::EyeFrame;
use crate::palette::ActivePalette;

/// Display width in pixels
pub const DISPLAY_WIDTH: i32 = 240;

/// Display height in pixels
pub const DISPLAY_HEIGHT: i32 = 240;

/// Pupil disc radius in pixels
pub const PUPIL_RADIUS: i32 = 40;

/// Display layer identifiers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerId {
    Sclera,
    Pupil,
    UpperLid,
    LowerLid,
}

/// Frame-to-surface compositor with palette change tracking
#[derive(Debug, Default)]
pub struct Compositor {
    last_palette: Option<ActivePalette>,
}

impl Compositor {
    pub const fn new() -> Self {
        Self { last_palette: None }
    }

    /// Push one frame to the surface and present it.
    pub fn push<D: EyeSurface>(&mut self, surface: &mut D, frame: &EyeFrame) {
        if self.last_palette != Some(frame.palette) {
            surface.set_layer_color(LayerId::Sclera, frame.palette.sclera);
            surface.set_layer_color(LayerId::Pupil, frame.palette.pupil);
            self.last_palette = Some(frame.palette);
        }

        // The pupil layer origin is its top-left corner; the simulation
        // tracks the disc center.
        #[allow(clippy::cast_possible_truncation)]
        let (cx, cy) = (frame.pupil.x as i32, frame.pupil.y as i32);
        surface.move_layer(LayerId::Pupil, cx - PUPIL_RADIUS, cy - PUPIL_RADIUS);

        if let Some(lids) = frame.lids {
            surface.move_layer(LayerId::UpperLid, 0, lids.upper);
            surface.move_layer(LayerId::LowerLid, 0, lids.lower);
        }

        surface.present();
    }
}
