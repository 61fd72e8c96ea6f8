//! Time decomposition
//!
//! Splits a wall-clock reading into the fields the watchface shows and
//! reports which calendar units changed between two readings.

use core::fmt;
use core::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in display order
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Index 0-6, Sunday = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for an index 0-6
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Three-letter label
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Sunday => "SUN",
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
        }
    }
}

/// Hour display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClockStyle {
    /// 1-12, midnight and noon shown as 12
    TwelveHour,
    /// 0-23
    #[default]
    TwentyFourHour,
}

/// Hour as it should appear on the face
///
/// `hour` is 0-23.
pub const fn display_hour(hour: u8, style: ClockStyle) -> u8 {
    match style {
        ClockStyle::TwentyFourHour => hour,
        ClockStyle::TwelveHour => {
            let h = hour % 12;
            if h == 0 {
                12
            } else {
                h
            }
        }
    }
}

/// Split a value into `[tens, ones]`
///
/// Only the last two decimal digits are kept.
pub const fn two_digits(value: u16) -> [u8; 2] {
    let value = value % 100;
    [(value / 10) as u8, (value % 10) as u8]
}

/// A wall-clock reading as delivered by the host on each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickTime {
    year: u16,
    month: u8,
    day: u8,
    weekday: Weekday,
    hour: u8,
    minute: u8,
}

impl TickTime {
    /// Create a reading
    ///
    /// - `month`: 1-12
    /// - `day`: day of month, 1-31
    /// - `hour`: 0-23
    /// - `minute`: 0-59
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        weekday: Weekday,
        hour: u8,
        minute: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
        }
    }

    /// Full year, e.g. 2026
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month, 1-12
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1-31
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Hour, 0-23
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0-59
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for TickTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {} {:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.weekday.abbreviation(),
            self.hour,
            self.minute
        )
    }
}

#[cfg(feature = "chrono")]
impl From<&chrono::NaiveDateTime> for TickTime {
    fn from(dt: &chrono::NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};

        let weekday = Weekday::from_index(dt.weekday().num_days_from_sunday() as u8)
            .unwrap_or(Weekday::Sunday);

        Self::new(
            dt.year().clamp(0, u16::MAX as i32) as u16,
            dt.month() as u8,
            dt.day() as u8,
            weekday,
            dt.hour() as u8,
            dt.minute() as u8,
        )
    }
}

/// Set of calendar units that changed since the previous tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: TimeUnits = TimeUnits(0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 0);
    pub const HOUR: TimeUnits = TimeUnits(1 << 1);
    pub const DAY: TimeUnits = TimeUnits(1 << 2);
    pub const MONTH: TimeUnits = TimeUnits(1 << 3);
    pub const YEAR: TimeUnits = TimeUnits(1 << 4);
    pub const ALL: TimeUnits = TimeUnits(0x1F);

    /// Units that changed going from `prev` to `next`
    ///
    /// A unit counts as changed when it or any larger unit differs, so a
    /// new year also reports a new month and day.
    pub fn between(prev: &TickTime, next: &TickTime) -> Self {
        let year = prev.year != next.year;
        let month = year || prev.month != next.month;
        let day = month || prev.day != next.day;
        let hour = day || prev.hour != next.hour;
        let minute = hour || prev.minute != next.minute;

        let mut units = TimeUnits::NONE;
        for (changed, unit) in [
            (minute, TimeUnits::MINUTE),
            (hour, TimeUnits::HOUR),
            (day, TimeUnits::DAY),
            (month, TimeUnits::MONTH),
            (year, TimeUnits::YEAR),
        ] {
            if changed {
                units = units | unit;
            }
        }
        units
    }

    /// True if every unit in `other` is also in `self`
    pub const fn contains(self, other: TimeUnits) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        self.union(rhs)
    }
}
