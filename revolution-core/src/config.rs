//! Watchface settings
//!
//! These replace the compile-time switches of a fixed watchface build. The
//! simulator reads them from the `[face]` table of its TOML config.

use crate::time::ClockStyle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order of the two date parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DateOrder {
    /// MM DD (American)
    #[default]
    MonthFirst,
    /// DD MM
    DayFirst,
}

/// Watchface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Order of month and day in the date row
    pub date_order: DateOrder,
    /// Leave the hour tens slot blank instead of showing 0
    pub hide_leading_zero: bool,
    /// 12 or 24 hour clock
    pub clock_style: ClockStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_order: DateOrder::MonthFirst,
            hide_leading_zero: true,
            clock_style: ClockStyle::TwentyFourHour,
        }
    }
}

impl Settings {
    /// Settings with a different clock style
    pub const fn with_clock_style(mut self, clock_style: ClockStyle) -> Self {
        self.clock_style = clock_style;
        self
    }

    /// Settings with a different date order
    pub const fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Settings with leading-zero suppression switched on or off
    pub const fn with_hide_leading_zero(mut self, hide: bool) -> Self {
        self.hide_leading_zero = hide;
        self
    }

    /// Date parts in display order, as `[left, right]`
    pub const fn date_parts(&self, month: u8, day: u8) -> [u8; 2] {
        match self.date_order {
            DateOrder::MonthFirst => [month, day],
            DateOrder::DayFirst => [day, month],
        }
    }
}
