//! Board-agnostic core logic for the Revolution watchface
//!
//! This crate contains everything that does not depend on a concrete
//! display or clock source:
//!
//! - Time decomposition (hour style, two-digit split, changed units)
//! - Watchface settings
//! - Host traits for bitmap resources and the app callback contract
//! - Slot bookkeeping (load only when the shown value changes)
//! - The watchface itself, driving all four screen regions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod face;
pub mod slots;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_host;

pub use config::{DateOrder, Settings};
pub use face::Watchface;
pub use slots::Slot;
pub use time::{ClockStyle, TickTime, TimeUnits, Weekday};
pub use traits::{BitmapHost, HostError, ResourceId, SlotId, SlotKind, WatchApp};
