//! 1 bit per pixel frame buffer for the 144×168 screen
//!
//! Rows are packed MSB first, which is also the layout `ImageRaw` expects,
//! so the whole buffer can be blitted onto another target as one image.

use core::convert::Infallible;

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Bytes per row
pub const STRIDE: usize = (SCREEN_WIDTH as usize + 7) / 8;

/// Total buffer size in bytes
pub const BUFFER_LEN: usize = STRIDE * SCREEN_HEIGHT as usize;

/// Off-screen copy of the display
pub struct FrameBuffer {
    buffer: [u8; BUFFER_LEN],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * STRIDE + x / 8, 0x80 >> (x % 8)))
    }

    /// Whether the pixel at (x, y) is on; off-screen reads as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::index(x, y)
            .map(|(i, mask)| self.buffer[i] & mask != 0)
            .unwrap_or(false)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if let Some((i, mask)) = Self::index(x, y) {
            if color.is_on() {
                self.buffer[i] |= mask;
            } else {
                self.buffer[i] &= !mask;
            }
        }
    }

    /// Number of pixels that are on
    pub fn count_lit(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The buffer as an image, for drawing onto another target
    pub fn as_image_raw(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.buffer, SCREEN_WIDTH)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer.fill(fill);
        Ok(())
    }
}
