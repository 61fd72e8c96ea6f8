//! The watchface
//!
//! Four screen regions, each a fixed array of slots:
//!
//! - time: 2×2 large digits, hours on the top row and minutes below
//! - date: two 2-digit parts, month and day in the configured order
//! - year: last two digits of the year
//! - day: weekday label
//!
//! Time is refreshed on every tick. Date and weekday only when the day
//! rolled over, the year only when the year did.

use crate::config::Settings;
use crate::slots::Slot;
use crate::time::{display_hour, two_digits, TickTime, TimeUnits};
use crate::traits::{BitmapHost, HostError, SlotKind, WatchApp};

/// Number of large time digits (HH MM)
pub const NUMBER_OF_TIME_SLOTS: usize = 4;

/// Number of date digits (two parts of two digits)
pub const NUMBER_OF_DATE_SLOTS: usize = 4;

/// Number of year digits
pub const NUMBER_OF_YEAR_SLOTS: usize = 2;

/// Watchface state: settings plus every slot on screen
pub struct Watchface<B> {
    settings: Settings,
    time_slots: [Slot<B>; NUMBER_OF_TIME_SLOTS],
    date_slots: [Slot<B>; NUMBER_OF_DATE_SLOTS],
    year_slots: [Slot<B>; NUMBER_OF_YEAR_SLOTS],
    day_slot: Slot<B>,
}

impl<B> Watchface<B> {
    /// Create a watchface with every slot empty
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            time_slots: core::array::from_fn(|i| Slot::new(SlotKind::Time, i as u8)),
            date_slots: core::array::from_fn(|i| Slot::new(SlotKind::Date, i as u8)),
            year_slots: core::array::from_fn(|i| Slot::new(SlotKind::Year, i as u8)),
            day_slot: Slot::new(SlotKind::Day, 0),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn time_slots(&self) -> &[Slot<B>] {
        &self.time_slots
    }

    pub fn date_slots(&self) -> &[Slot<B>] {
        &self.date_slots
    }

    pub fn year_slots(&self) -> &[Slot<B>] {
        &self.year_slots
    }

    pub fn day_slot(&self) -> &Slot<B> {
        &self.day_slot
    }

    /// Every slot, time first, then date, year and day
    pub fn slots(&self) -> impl Iterator<Item = &Slot<B>> {
        self.time_slots
            .iter()
            .chain(self.date_slots.iter())
            .chain(self.year_slots.iter())
            .chain(core::iter::once(&self.day_slot))
    }

    /// Number of slots holding a bitmap
    pub fn loaded_count(&self) -> usize {
        self.slots().filter(|slot| !slot.is_empty()).count()
    }

    /// Show hours and minutes
    pub fn display_time<H>(&mut self, host: &mut H, now: &TickTime) -> Result<(), HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        let hour = display_hour(now.hour(), self.settings.clock_style);
        self.display_time_value(host, hour, 0)?;
        self.display_time_value(host, now.minute(), 1)
    }

    fn display_time_value<H>(
        &mut self,
        host: &mut H,
        value: u8,
        row: usize,
    ) -> Result<(), HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        let hide_leading_zero = self.settings.hide_leading_zero;

        for (column, digit) in two_digits(value as u16).into_iter().enumerate() {
            let number = row * 2 + column;
            let slot = &mut self.time_slots[number];

            if hide_leading_zero && number == 0 && digit == 0 {
                slot.clear(host)?;
            } else {
                slot.show(host, digit)?;
            }
        }
        Ok(())
    }

    /// Show month and day in the configured order
    pub fn display_date<H>(&mut self, host: &mut H, now: &TickTime) -> Result<(), HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        let parts = self.settings.date_parts(now.month(), now.day());

        for (part, value) in parts.into_iter().enumerate() {
            for (column, digit) in two_digits(value as u16).into_iter().enumerate() {
                self.date_slots[part * 2 + column].show(host, digit)?;
            }
        }
        Ok(())
    }

    /// Show the last two digits of the year
    pub fn display_year<H>(&mut self, host: &mut H, now: &TickTime) -> Result<(), HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        for (slot, digit) in self.year_slots.iter_mut().zip(two_digits(now.year())) {
            slot.show(host, digit)?;
        }
        Ok(())
    }

    /// Show the weekday label
    pub fn display_day<H>(&mut self, host: &mut H, now: &TickTime) -> Result<(), HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        self.day_slot.show(host, now.weekday().index())?;
        Ok(())
    }
}

impl<H: BitmapHost> WatchApp<H> for Watchface<H::Bitmap> {
    fn init(&mut self, host: &mut H, now: &TickTime) -> Result<(), HostError> {
        self.display_time(host, now)?;
        self.display_day(host, now)?;
        self.display_date(host, now)?;
        self.display_year(host, now)
    }

    fn tick(
        &mut self,
        host: &mut H,
        now: &TickTime,
        changed: TimeUnits,
    ) -> Result<(), HostError> {
        if changed.contains(TimeUnits::DAY) {
            self.display_day(host, now)?;
            self.display_date(host, now)?;
        }
        if changed.contains(TimeUnits::YEAR) {
            self.display_year(host, now)?;
        }
        self.display_time(host, now)
    }

    fn deinit(&mut self, host: &mut H) -> Result<(), HostError> {
        let slots = self
            .time_slots
            .iter_mut()
            .chain(self.date_slots.iter_mut())
            .chain(self.year_slots.iter_mut())
            .chain(core::iter::once(&mut self.day_slot));

        // Release every slot even if one fails; report the first failure
        let mut result = Ok(());
        for slot in slots {
            if let Err(e) = slot.clear(host) {
                result = result.and(Err(e));
            }
        }
        result
    }
}
