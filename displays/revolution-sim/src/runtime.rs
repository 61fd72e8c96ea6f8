//! Host event loop
//!
//! Plays the part of the watch firmware: starts the watchface once, checks
//! the clock at a fixed interval, delivers a tick whenever the minute
//! changes, and pushes dirty frames to the backend.

use std::thread::sleep;
use std::time::Duration;

use revolution_core::{Settings, TickTime, TimeUnits, WatchApp, Watchface};
use revolution_display::{DisplayBackend, FrameBuffer, Placement, WatchScreen};

use crate::clock::Clock;

/// How often the clock is checked
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Runtime<C> {
    clock: C,
    face: Watchface<Placement>,
    screen: WatchScreen<FrameBuffer>,
    last: Option<TickTime>,
}

impl<C: Clock> Runtime<C> {
    pub fn new(clock: C, settings: Settings) -> Self {
        Self {
            clock,
            face: Watchface::new(settings),
            screen: WatchScreen::new(FrameBuffer::new()),
            last: None,
        }
    }

    fn read_clock(&self) -> TickTime {
        TickTime::from(&self.clock.now())
    }

    /// Paint the background and show the current time
    pub fn start(&mut self) -> anyhow::Result<()> {
        let now = self.read_clock();
        log::info!("Starting watchface at {}", now);

        self.screen.prepare()?;
        self.face.init(&mut self.screen, &now)?;
        self.last = Some(now);
        Ok(())
    }

    /// Deliver a tick if the minute changed since the last one
    ///
    /// Returns the changed units, empty when nothing happened.
    pub fn poll(&mut self) -> anyhow::Result<TimeUnits> {
        let now = self.read_clock();
        let Some(last) = self.last else {
            anyhow::bail!("runtime polled before start");
        };

        let changed = TimeUnits::between(&last, &now);
        if changed.is_empty() {
            return Ok(changed);
        }

        log::debug!("Tick {} (units 0x{:02x})", now, changed.bits());
        self.face.tick(&mut self.screen, &now, changed)?;
        self.last = Some(now);
        Ok(changed)
    }

    /// Push the frame to `backend` if anything was redrawn
    pub fn flush<B: DisplayBackend>(&mut self, backend: &mut B) -> anyhow::Result<bool> {
        if !self.screen.is_dirty() {
            return Ok(false);
        }
        backend.flush(self.screen.target())?;
        self.screen.mark_clean();
        Ok(true)
    }

    /// Release every bitmap
    pub fn stop(&mut self) -> anyhow::Result<()> {
        self.face.deinit(&mut self.screen)?;
        log::info!("Watchface stopped");
        Ok(())
    }

    /// Run until the backend goes away
    pub fn run<B: DisplayBackend>(
        &mut self,
        backend: &mut B,
        interval: Duration,
    ) -> anyhow::Result<()> {
        self.start()?;
        self.flush(backend)?;

        while backend.is_ready() {
            self.poll()?;
            self.flush(backend)?;
            backend.poll_events()?;
            sleep(interval);
        }

        self.stop()
    }

    #[cfg(test)]
    pub fn face(&self) -> &Watchface<Placement> {
        &self.face
    }

    #[cfg(test)]
    pub fn frame(&self) -> &FrameBuffer {
        self.screen.target()
    }
}
