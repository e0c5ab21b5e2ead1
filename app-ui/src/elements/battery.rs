use core::fmt::Debug;

use app_controls::BatteryLevel;
use eg_seven_segment::SevenSegmentStyleBuilder;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics::Drawable;
use heapless::String;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};
use ufmt::uwrite;

use crate::fonts::TINY_FONT;
use crate::{config as cfg, AppDrawTarget};

pub fn draw_battery<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    origin: Point,
    level: Option<BatteryLevel>,
) {
    TINY_FONT
        .render_aligned(
            " BATTERY ",
            origin,
            VerticalPosition::Top,
            HorizontalAlignment::Left,
            FontColor::WithBackground {
                fg: cfg::COLOR_BACKGROUND,
                bg: cfg::COLOR_BATTERY,
            },
            display,
        )
        .unwrap();

    // Blank until the first sample arrives.
    display
        .fill_solid(
            &Rectangle::new(origin + Point::new(0, 26), Size::new(80, 34)),
            cfg::COLOR_BACKGROUND,
        )
        .unwrap();

    let level = match level {
        Some(level) => level,
        None => return,
    };

    let color = if level.percent() < cfg::BATTERY_LOW_PERCENT {
        cfg::COLOR_BATTERY_LOW
    } else {
        cfg::COLOR_BATTERY
    };

    let style = SevenSegmentStyleBuilder::new()
        .digit_size(Size::new(14, 24))
        .digit_spacing(3)
        .segment_width(3)
        .segment_color(color)
        .inactive_segment_color(cfg::COLOR_BATTERY_INACTIVE)
        .build();

    let mut s = String::<8>::default();
    uwrite!(s, "{}", level.percent()).unwrap();

    let end = Text::new(&s[..], origin + Point::new(0, 54), style)
        .draw(display)
        .unwrap();

    TINY_FONT
        .render_aligned(
            "%",
            end + Point::new(6, -16),
            VerticalPosition::Top,
            HorizontalAlignment::Left,
            FontColor::WithBackground {
                fg: color,
                bg: cfg::COLOR_BACKGROUND,
            },
            display,
        )
        .unwrap();
}
