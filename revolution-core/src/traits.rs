//! Host traits
//!
//! The watchface never draws or schedules anything itself. A host owns the
//! bitmap resources and the screen, and calls the watchface on init, on every
//! minute tick and on shutdown.

use crate::time::{TickTime, TimeUnits, Weekday};

/// Errors reported by a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostError {
    /// The host has no bitmap for this resource
    ResourceUnavailable,
    /// Drawing to the screen failed
    Draw,
}

impl core::fmt::Display for HostError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HostError::ResourceUnavailable => f.write_str("bitmap resource unavailable"),
            HostError::Draw => f.write_str("drawing to the screen failed"),
        }
    }
}

impl core::error::Error for HostError {}

/// Screen region a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotKind {
    /// Large hour/minute digits
    Time,
    /// Month and day digits
    Date,
    /// Last two digits of the year
    Year,
    /// Weekday label
    Day,
}

impl SlotKind {
    /// Largest value a slot of this kind can show
    pub const fn max_value(self) -> u8 {
        match self {
            SlotKind::Day => 6,
            SlotKind::Time | SlotKind::Date | SlotKind::Year => 9,
        }
    }

    /// Resource for `value`, or `None` if out of range
    pub fn resource(self, value: u8) -> Option<ResourceId> {
        if value > self.max_value() {
            return None;
        }
        match self {
            SlotKind::Time => Some(ResourceId::TimeDigit(value)),
            SlotKind::Date => Some(ResourceId::DateDigit(value)),
            SlotKind::Year => Some(ResourceId::YearDigit(value)),
            SlotKind::Day => Weekday::from_index(value).map(ResourceId::Day),
        }
    }
}

/// A fixed screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotId {
    pub kind: SlotKind,
    /// Index within its region, left to right then top to bottom
    pub number: u8,
}

impl SlotId {
    pub const fn new(kind: SlotKind, number: u8) -> Self {
        Self { kind, number }
    }
}

/// A pre-rendered bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceId {
    TimeDigit(u8),
    DateDigit(u8),
    YearDigit(u8),
    Day(Weekday),
}

impl ResourceId {
    /// Value this resource represents (digit, or weekday index)
    pub const fn value(self) -> u8 {
        match self {
            ResourceId::TimeDigit(d) | ResourceId::DateDigit(d) | ResourceId::YearDigit(d) => d,
            ResourceId::Day(day) => day.index(),
        }
    }
}

/// Bitmap resource and layer API of the host
///
/// `load` both loads the resource and shows it in the slot's frame;
/// `release` removes it from the screen and frees it. The caller drops the
/// handle only once `release` succeeded.
pub trait BitmapHost {
    /// Handle to a loaded bitmap
    type Bitmap;

    /// Load `resource` and place it in `slot`
    fn load(&mut self, resource: ResourceId, slot: SlotId) -> Result<Self::Bitmap, HostError>;

    /// Remove a bitmap from `slot` and free it
    fn release(&mut self, slot: SlotId, bitmap: &Self::Bitmap) -> Result<(), HostError>;
}

/// Callback contract between the host firmware and an app
pub trait WatchApp<H: BitmapHost> {
    /// Called once when the app starts
    fn init(&mut self, host: &mut H, now: &TickTime) -> Result<(), HostError>;

    /// Called on every minute tick
    ///
    /// `changed` lists the calendar units that rolled over since the
    /// previous tick.
    fn tick(&mut self, host: &mut H, now: &TickTime, changed: TimeUnits)
        -> Result<(), HostError>;

    /// Called once before the app exits
    fn deinit(&mut self, host: &mut H) -> Result<(), HostError>;
}
