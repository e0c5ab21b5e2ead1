use core::fmt::Debug;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::{
    Circle, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::TINY_FONT;
use crate::primitives::Cross;
use crate::{config as cfg, AppDrawTarget};

pub fn draw_joystick_pad<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    pad: Rectangle,
    label: &str,
) {
    TINY_FONT
        .render_aligned(
            label,
            Point::new(pad.center().x, pad.top_left.y - 20),
            VerticalPosition::Top,
            HorizontalAlignment::Center,
            FontColor::WithBackground {
                fg: cfg::COLOR_TRACK,
                bg: cfg::COLOR_BACKGROUND,
            },
            display,
        )
        .unwrap();

    draw_track(display, pad);
}

pub fn draw_joystick_thumb<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    pad: Rectangle,
    thumb: Size,
    previous: Option<Point>,
    offset: Point,
) {
    if let Some(previous) = previous {
        Circle::new(pad.top_left + previous, thumb.width)
            .into_styled(PrimitiveStyle::with_fill(cfg::COLOR_BACKGROUND))
            .draw(display)
            .unwrap();
        // The erase may have clipped the track border or the center marker.
        draw_track(display, pad);
    }

    Circle::new(pad.top_left + offset, thumb.width)
        .into_styled(PrimitiveStyle::with_fill(cfg::COLOR_THUMB))
        .draw(display)
        .unwrap();
}

fn draw_track<D: AppDrawTarget<E>, E: Debug>(display: &mut D, pad: Rectangle) {
    RoundedRectangle::with_equal_corners(pad, Size::new(10, 10))
        .into_styled(
            PrimitiveStyleBuilder::new()
                .stroke_color(cfg::COLOR_TRACK)
                .stroke_width(2)
                .build(),
        )
        .draw(display)
        .unwrap();

    Cross::new(pad.center(), 6, 2, cfg::COLOR_TRACK).draw(display).unwrap();
}
