//! Bitmap resources
//!
//! Digits are seven-segment glyphs scaled to the frame they are drawn in, so
//! the same table serves the 70×70 time digits and the 10×10 year digits.
//! Weekday labels use a 5×8 mono font.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use revolution_core::{ResourceId, Weekday};

/// Segment bits, `a` (top) through `g` (middle)
///
/// ```text
///  aaa
/// f   b
///  ggg
/// e   c
///  ddd
/// ```
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

/// Lit segments for digits 0-9
pub const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,
    SEG_F | SEG_G | SEG_B | SEG_C,
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Draw `resource` into `frame`
///
/// Only glyph pixels are drawn; clearing the frame is up to the caller.
pub fn draw_resource<D>(
    target: &mut D,
    resource: ResourceId,
    frame: Rectangle,
    ink: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match resource {
        ResourceId::TimeDigit(d) | ResourceId::DateDigit(d) | ResourceId::YearDigit(d) => {
            draw_digit(target, d, frame, ink)
        }
        ResourceId::Day(day) => draw_day(target, day, frame, ink),
    }
}

/// Area of `frame` the digit occupies: inset by a tenth of the frame and
/// narrowed to 5/8 of its height, centred
fn digit_box(frame: Rectangle) -> Rectangle {
    let pad_x = frame.size.width / 10;
    let pad_y = frame.size.height / 10;
    let height = frame.size.height.saturating_sub(2 * pad_y).max(1);
    let width = (height * 5 / 8)
        .min(frame.size.width.saturating_sub(2 * pad_x))
        .max(1);
    let x = frame.top_left.x + ((frame.size.width - width) / 2) as i32;

    Rectangle::new(
        Point::new(x, frame.top_left.y + pad_y as i32),
        Size::new(width, height),
    )
}

/// Segment rectangles for a digit box, indexed like the segment bits
fn segment_rects(area: Rectangle) -> [Rectangle; 7] {
    let w = area.size.width;
    let h = area.size.height;
    let t = (h / 8).max(1);
    let mid = (h - t) / 2;
    let origin = area.top_left;

    let rect = |x: u32, y: u32, width: u32, height: u32| {
        Rectangle::new(origin + Point::new(x as i32, y as i32), Size::new(width, height))
    };

    [
        rect(0, 0, w, t),                         // a
        rect(w - t, 0, t, mid + t),               // b
        rect(w - t, mid, t, h - mid),             // c
        rect(0, h - t, w, t),                     // d
        rect(0, mid, t, h - mid),                 // e
        rect(0, 0, t, mid + t),                   // f
        rect(0, mid, w, t),                       // g
    ]
}

/// Draw a seven-segment digit; values above 9 draw nothing
pub fn draw_digit<D>(
    target: &mut D,
    digit: u8,
    frame: Rectangle,
    ink: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let Some(&lit) = DIGIT_SEGMENTS.get(digit as usize) else {
        return Ok(());
    };

    let style = PrimitiveStyle::with_fill(ink);
    for (i, segment) in segment_rects(digit_box(frame)).iter().enumerate() {
        if lit & (1 << i) != 0 {
            segment.into_styled(style).draw(target)?;
        }
    }
    Ok(())
}

/// Draw a three-letter weekday label centred in `frame`
pub fn draw_day<D>(
    target: &mut D,
    day: Weekday,
    frame: Rectangle,
    ink: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let character_style = MonoTextStyle::new(&FONT_5X8, ink);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    Text::with_text_style(
        day.abbreviation(),
        frame.center(),
        character_style,
        text_style,
    )
    .draw(target)?;
    Ok(())
}
