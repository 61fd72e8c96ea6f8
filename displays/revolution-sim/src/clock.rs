//! Clock sources

use std::time::Instant;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Source of wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Time that starts at a chosen instant and runs `speed` times faster than
/// real time
pub struct SimulatedClock {
    start: NaiveDateTime,
    origin: Instant,
    speed: u32,
}

impl SimulatedClock {
    pub fn new(start: NaiveDateTime, speed: u32) -> Self {
        Self {
            start,
            origin: Instant::now(),
            speed: speed.max(1),
        }
    }

    /// Time reached after `elapsed` real time
    fn at(&self, elapsed: std::time::Duration) -> NaiveDateTime {
        let scaled = elapsed.saturating_mul(self.speed);
        TimeDelta::from_std(scaled)
            .ok()
            .and_then(|delta| self.start.checked_add_signed(delta))
            .unwrap_or(self.start)
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> NaiveDateTime {
        self.at(self.origin.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 12, 31)
            .and_then(|d| d.and_hms_opt(23, 58, 0))
            .unwrap()
    }

    #[test]
    fn test_real_speed() {
        let clock = SimulatedClock::new(start(), 1);
        assert_eq!(clock.at(Duration::ZERO), start());
        assert_eq!(clock.at(Duration::from_secs(90)), start() + TimeDelta::seconds(90));
    }

    #[test]
    fn test_accelerated() {
        let clock = SimulatedClock::new(start(), 60);
        let later = clock.at(Duration::from_secs(2));
        assert_eq!(later, start() + TimeDelta::minutes(2));
    }

    #[test]
    fn test_zero_speed_is_real_time() {
        let clock = SimulatedClock::new(start(), 0);
        assert_eq!(clock.at(Duration::from_secs(1)), start() + TimeDelta::seconds(1));
    }

    #[test]
    fn test_now_does_not_go_backwards() {
        let clock = SimulatedClock::new(start(), 1);
        assert!(clock.now() >= start());
    }
}
