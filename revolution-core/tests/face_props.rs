//! Property tests: slot state always tracks the last reading

use proptest::prelude::*;

use revolution_core::{
    BitmapHost, ClockStyle, DateOrder, HostError, ResourceId, Settings, SlotId, TickTime,
    TimeUnits, WatchApp, Watchface, Weekday,
};

/// Host that only tracks how many bitmaps are alive
#[derive(Default)]
struct CountingHost {
    live: usize,
    loads: usize,
}

impl BitmapHost for CountingHost {
    type Bitmap = ResourceId;

    fn load(&mut self, resource: ResourceId, _slot: SlotId) -> Result<ResourceId, HostError> {
        self.live += 1;
        self.loads += 1;
        Ok(resource)
    }

    fn release(&mut self, _slot: SlotId, _bitmap: &ResourceId) -> Result<(), HostError> {
        self.live -= 1;
        Ok(())
    }
}

fn tick_time() -> impl Strategy<Value = TickTime> {
    (1970u16..2100, 1u8..=12, 1u8..=28, 0u8..24, 0u8..60).prop_map(
        |(year, month, day, hour, minute)| {
            // Weekday only has to be a function of the date, not the real one
            let index = (year as usize + month as usize * 3 + day as usize) % 7;
            let weekday = Weekday::from_index(index as u8).unwrap();
            TickTime::new(year, month, day, weekday, hour, minute)
        },
    )
}

fn settings() -> impl Strategy<Value = Settings> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(day_first, hide, twelve)| {
        Settings::default()
            .with_date_order(if day_first {
                DateOrder::DayFirst
            } else {
                DateOrder::MonthFirst
            })
            .with_hide_leading_zero(hide)
            .with_clock_style(if twelve {
                ClockStyle::TwelveHour
            } else {
                ClockStyle::TwentyFourHour
            })
    })
}

fn expected_hour(t: &TickTime, settings: &Settings) -> u8 {
    match settings.clock_style {
        ClockStyle::TwentyFourHour => t.hour(),
        ClockStyle::TwelveHour => match t.hour() % 12 {
            0 => 12,
            h => h,
        },
    }
}

fn check_face(face: &Watchface<ResourceId>, host: &CountingHost, t: &TickTime) {
    let settings = *face.settings();
    let hour = expected_hour(t, &settings);
    let slots = face.time_slots();

    if settings.hide_leading_zero && hour < 10 {
        assert!(slots[0].is_empty());
    } else {
        assert_eq!(slots[0].value(), Some(hour / 10));
    }
    assert_eq!(slots[1].value(), Some(hour % 10));
    assert_eq!(slots[2].value(), Some(t.minute() / 10));
    assert_eq!(slots[3].value(), Some(t.minute() % 10));

    let [left, right] = settings.date_parts(t.month(), t.day());
    let date: Vec<_> = face.date_slots().iter().map(|s| s.value()).collect();
    assert_eq!(
        date,
        vec![
            Some(left / 10),
            Some(left % 10),
            Some(right / 10),
            Some(right % 10)
        ]
    );

    let year = (t.year() % 100) as u8;
    assert_eq!(face.year_slots()[0].value(), Some(year / 10));
    assert_eq!(face.year_slots()[1].value(), Some(year % 10));
    assert_eq!(face.day_slot().value(), Some(t.weekday().index()));

    // Every loaded bitmap is the one for the recorded value
    for slot in face.slots() {
        if let (Some(value), Some(bitmap)) = (slot.value(), slot.bitmap()) {
            assert_eq!(bitmap.value(), value);
        }
    }
    assert_eq!(face.loaded_count(), host.live);
}

proptest! {
    #[test]
    fn slots_track_last_reading(
        settings in settings(),
        start in tick_time(),
        readings in prop::collection::vec(tick_time(), 1..20),
    ) {
        let mut face = Watchface::new(settings);
        let mut host = CountingHost::default();

        face.init(&mut host, &start).unwrap();
        check_face(&face, &host, &start);

        let mut prev = start;
        for next in readings {
            face.tick(&mut host, &next, TimeUnits::between(&prev, &next)).unwrap();
            check_face(&face, &host, &next);
            prev = next;
        }

        face.deinit(&mut host).unwrap();
        prop_assert_eq!(host.live, 0);
        prop_assert_eq!(face.loaded_count(), 0);
    }

    #[test]
    fn repeated_tick_loads_nothing(settings in settings(), t in tick_time()) {
        let mut face = Watchface::new(settings);
        let mut host = CountingHost::default();

        face.init(&mut host, &t).unwrap();
        let loads = host.loads;

        face.tick(&mut host, &t, TimeUnits::ALL).unwrap();
        prop_assert_eq!(host.loads, loads);
    }
}
