//! Watch screen
//!
//! [`WatchScreen`] is the bitmap host the watchface talks to. Loading a
//! resource draws it into its slot frame, releasing it paints the frame back
//! to the background. Nothing else on the screen is touched, so a tick that
//! changes one digit redraws one slot.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use revolution_core::{BitmapHost, HostError, ResourceId, SlotId};

use crate::glyphs::draw_resource;
use crate::layout;

/// Window background
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

/// Fill of the strip under the time digits
pub const DATE_STRIP: BinaryColor = BinaryColor::Off;

/// Glyph color
pub const INK: BinaryColor = BinaryColor::On;

/// A resource placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub resource: ResourceId,
    pub frame: Rectangle,
}

/// Bitmap host drawing onto any binary-color target
pub struct WatchScreen<D> {
    target: D,
    /// Whether the target changed since the last flush
    dirty: bool,
}

impl<D> WatchScreen<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target
    ///
    /// Call [`prepare`](Self::prepare) before the watchface's first draw.
    pub fn new(target: D) -> Self {
        Self {
            target,
            dirty: true,
        }
    }

    /// Paint the window background and the date strip
    pub fn prepare(&mut self) -> Result<(), D::Error> {
        self.target.clear(BACKGROUND)?;
        layout::date_container()
            .into_styled(PrimitiveStyle::with_fill(DATE_STRIP))
            .draw(&mut self.target)?;
        self.dirty = true;
        Ok(())
    }

    fn clear_frame(&mut self, frame: Rectangle) -> Result<(), D::Error> {
        self.target.fill_solid(&frame, BACKGROUND)
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Check if the screen needs flushing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after flushing)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl<D> BitmapHost for WatchScreen<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Bitmap = Placement;

    fn load(&mut self, resource: ResourceId, slot: SlotId) -> Result<Placement, HostError> {
        let frame = layout::frame_for(slot);

        self.clear_frame(frame).map_err(|_| HostError::Draw)?;
        draw_resource(&mut self.target, resource, frame, INK).map_err(|_| HostError::Draw)?;
        self.dirty = true;

        Ok(Placement { resource, frame })
    }

    fn release(&mut self, _slot: SlotId, bitmap: &Placement) -> Result<(), HostError> {
        self.clear_frame(bitmap.frame).map_err(|_| HostError::Draw)?;
        self.dirty = true;
        Ok(())
    }
}
