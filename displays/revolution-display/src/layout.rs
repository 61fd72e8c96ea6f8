//! Fixed screen layout
//!
//! ```text
//!  0,0 ┌──────────┬──────────┐
//!      │  hour    │  hour    │  time slots 0, 1 (70×70)
//!      ├──────────┼──────────┤
//!      │  minute  │  minute  │  time slots 2, 3
//! 144  ├──────────┴──────────┤
//!      │ DAY   MM DD      YY │  date container (144×24, black)
//! 168  └─────────────────────┘
//! ```
//!
//! All frames are returned in absolute screen coordinates.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use revolution_core::{SlotId, SlotKind};

pub const SCREEN_WIDTH: u32 = 144;
pub const SCREEN_HEIGHT: u32 = 168;

pub const TIME_IMAGE_WIDTH: u32 = 70;
pub const TIME_IMAGE_HEIGHT: u32 = 70;

pub const DATE_IMAGE_WIDTH: u32 = 20;
pub const DATE_IMAGE_HEIGHT: u32 = 20;

pub const YEAR_IMAGE_WIDTH: u32 = 10;
pub const YEAR_IMAGE_HEIGHT: u32 = 10;

pub const DAY_IMAGE_WIDTH: u32 = 20;
pub const DAY_IMAGE_HEIGHT: u32 = 10;

pub const MARGIN: u32 = 1;
pub const TIME_SLOT_SPACE: u32 = 2;
pub const DATE_PART_SPACE: u32 = 4;

/// Height of the strip below the time digits
pub const DATE_CONTAINER_HEIGHT: u32 = SCREEN_HEIGHT - SCREEN_WIDTH;

/// The whole screen
pub const fn screen() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
}

/// Black strip holding weekday, date and year
pub const fn date_container() -> Rectangle {
    Rectangle::new(
        Point::new(0, SCREEN_WIDTH as i32),
        Size::new(SCREEN_WIDTH, DATE_CONTAINER_HEIGHT),
    )
}

/// Frame of time slot `number` (0-3)
pub const fn time_slot(number: u8) -> Rectangle {
    let column = (number % 2) as u32;
    let row = (number / 2) as u32;
    let x = MARGIN + column * (TIME_IMAGE_WIDTH + TIME_SLOT_SPACE);
    let y = MARGIN + row * (TIME_IMAGE_HEIGHT + TIME_SLOT_SPACE);

    Rectangle::new(
        Point::new(x as i32, y as i32),
        Size::new(TIME_IMAGE_WIDTH, TIME_IMAGE_HEIGHT),
    )
}

/// Weekday label frame
pub const fn day_slot() -> Rectangle {
    Rectangle::new(
        Point::new(
            MARGIN as i32,
            (SCREEN_WIDTH + DATE_CONTAINER_HEIGHT - DAY_IMAGE_HEIGHT - MARGIN) as i32,
        ),
        Size::new(DAY_IMAGE_WIDTH, DAY_IMAGE_HEIGHT),
    )
}

/// Area holding the four date digits, centred horizontally
pub const fn date_area() -> Rectangle {
    let width = DATE_IMAGE_WIDTH
        + MARGIN
        + DATE_IMAGE_WIDTH
        + DATE_PART_SPACE
        + DATE_IMAGE_WIDTH
        + MARGIN
        + DATE_IMAGE_WIDTH;

    Rectangle::new(
        Point::new(
            ((SCREEN_WIDTH - width) / 2) as i32,
            (SCREEN_WIDTH + DATE_CONTAINER_HEIGHT - DATE_IMAGE_HEIGHT - MARGIN) as i32,
        ),
        Size::new(width, DATE_IMAGE_HEIGHT),
    )
}

/// Frame of date slot `number` (0-3)
///
/// The two parts are separated by `DATE_PART_SPACE`, digits within a part by
/// `MARGIN`.
pub const fn date_slot(number: u8) -> Rectangle {
    let area = date_area();
    let mut x = number as u32 * (DATE_IMAGE_WIDTH + MARGIN);
    if number >= 2 {
        x += DATE_PART_SPACE - MARGIN;
    }

    Rectangle::new(
        Point::new(area.top_left.x + x as i32, area.top_left.y),
        Size::new(DATE_IMAGE_WIDTH, DATE_IMAGE_HEIGHT),
    )
}

/// Area holding the two year digits, right-aligned
pub const fn year_area() -> Rectangle {
    let width = YEAR_IMAGE_WIDTH + MARGIN + YEAR_IMAGE_WIDTH;

    Rectangle::new(
        Point::new(
            (SCREEN_WIDTH - width - MARGIN) as i32,
            (SCREEN_WIDTH + DATE_CONTAINER_HEIGHT - YEAR_IMAGE_HEIGHT - MARGIN) as i32,
        ),
        Size::new(width, YEAR_IMAGE_HEIGHT),
    )
}

/// Frame of year slot `number` (0-1)
pub const fn year_slot(number: u8) -> Rectangle {
    let area = year_area();
    let x = number as u32 * (YEAR_IMAGE_WIDTH + MARGIN);

    Rectangle::new(
        Point::new(area.top_left.x + x as i32, area.top_left.y),
        Size::new(YEAR_IMAGE_WIDTH, YEAR_IMAGE_HEIGHT),
    )
}

/// Frame of any slot
pub const fn frame_for(slot: SlotId) -> Rectangle {
    match slot.kind {
        SlotKind::Time => time_slot(slot.number),
        SlotKind::Date => date_slot(slot.number),
        SlotKind::Year => year_slot(slot.number),
        SlotKind::Day => day_slot(),
    }
}
