use core::fmt::Debug;

use embedded_graphics::geometry::Size;
use embedded_graphics::primitives::{Primitive, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::TINY_FONT;
use crate::{config as cfg, AppDrawTarget};

pub fn draw_button<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    rect: Rectangle,
    label: &str,
    active: bool,
) {
    let (fg, fill) = if active {
        (cfg::COLOR_BACKGROUND, cfg::COLOR_BUTTON_ACTIVE)
    } else {
        (cfg::COLOR_BUTTON, cfg::COLOR_BACKGROUND)
    };

    RoundedRectangle::with_equal_corners(rect, Size::new(6, 6))
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(fill)
                .stroke_color(cfg::COLOR_BUTTON)
                .stroke_width(2)
                .build(),
        )
        .draw(display)
        .unwrap();

    TINY_FONT
        .render_aligned(
            label,
            rect.center(),
            VerticalPosition::Center,
            HorizontalAlignment::Center,
            FontColor::Transparent(fg),
            display,
        )
        .unwrap();
}
