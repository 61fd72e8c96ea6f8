//! Desktop window backend

use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use revolution_display::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use revolution_display::{DisplayBackend, DisplayError, FrameBuffer};

use crate::config::SimulatorConfig;

/// SDL window showing the watch screen
pub struct SimulatorWindow {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
    /// Set once the window has been drawn; events can only be read after
    shown: bool,
    closed: bool,
}

impl SimulatorWindow {
    pub fn new(config: &SimulatorConfig) -> Self {
        let output_settings = OutputSettingsBuilder::new()
            .theme(config.theme.into())
            .scale(config.scale)
            .build();

        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window: Window::new("Revolution", &output_settings),
            shown: false,
            closed: false,
        }
    }
}

impl DisplayBackend for SimulatorWindow {
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        if self.closed {
            return Err(DisplayError::Closed);
        }

        Image::new(&frame.as_image_raw(), Point::zero())
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)?;
        self.window.update(&self.display);
        self.shown = true;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        !self.closed
    }

    fn poll_events(&mut self) -> Result<(), DisplayError> {
        if !self.shown {
            return Ok(());
        }

        if self.window.events().any(|e| matches!(e, SimulatorEvent::Quit)) {
            log::info!("Window closed");
            self.closed = true;
        }
        Ok(())
    }
}
