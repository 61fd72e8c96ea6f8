//! Display backend trait
//!
//! A backend takes a finished frame and puts it on a panel, a window, or
//! anything else that can show 144×168 monochrome pixels.

use crate::framebuffer::FrameBuffer;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// The display went away (window closed, panel unplugged)
    Closed,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication error"),
            DisplayError::Closed => f.write_str("display closed"),
        }
    }
}

impl core::error::Error for DisplayError {}

/// Display backend trait
///
/// Implementations handle the specifics of the panel or window.
pub trait DisplayBackend {
    /// Send a complete frame to the display
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;

    /// Check if the display is ready to accept a frame
    fn is_ready(&self) -> bool;

    /// Service the display between frames
    ///
    /// Windowed backends handle their events here.
    fn poll_events(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
