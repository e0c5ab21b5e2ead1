use core::fmt::Debug;

use app_controls::{BatteryLevel, ControlFrame};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;
use embedded_graphics_framebuf::FrameBuf;
use heapless::String;
use u8g2_fonts::types::{FontColor, VerticalPosition};
use ufmt::uwrite;

use super::Screen;
use crate::fonts::{TINIER_FONT, TINY_FONT};
use crate::format::{write_axis, write_percent};
use crate::primitives::Pointer;
use crate::{config as cfg, draw_badge, AppDrawTarget};

const BAR_WIDTH: usize = 192;
const BAR_HEIGHT: usize = 20;

/// Raw control readout, the on-screen counterpart of the trace logging:
/// stick offsets, the derived control frame, and the last battery sample.
pub struct DebugScreen<DT, E> {
    pub frame: ControlFrame,
    pub movement_offset: Point,
    pub altitude_offset: Point,
    pub battery: Option<BatteryLevel>,
    _phantom: core::marker::PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for DebugScreen<DT, E> {
    async fn draw_init(&mut self, display: &mut DT) {
        display.clear(cfg::COLOR_BACKGROUND).unwrap();

        let x = (display.bounding_box().size.width / 2) as i32;
        draw_badge(
            display,
            Point::new(x, 8),
            " DEBUG ",
            cfg::COLOR_BACKGROUND,
            cfg::COLOR_TRACK,
        )
        .await;
    }

    async fn draw_frame(&mut self, display: &mut DT) {
        let rows = [
            (" ROLL ", self.frame.roll),
            (" PITCH ", self.frame.pitch),
            (" THR ", self.frame.throttle),
            (" YAW ", self.frame.yaw),
        ];

        for (index, (label, value)) in rows.iter().enumerate() {
            let y = 60 + index as i32 * 48;
            self.draw_axis_row(display, y, label, *value);
        }

        let mut s = String::<64>::default();
        uwrite!(
            s,
            "MOVE {},{}   ALT {},{}   ",
            self.movement_offset.x,
            self.movement_offset.y,
            self.altitude_offset.x,
            self.altitude_offset.y
        )
        .unwrap();
        TINIER_FONT
            .render(
                &s[..],
                Point::new(24, 260),
                VerticalPosition::Top,
                FontColor::WithBackground {
                    fg: cfg::COLOR_TRACK,
                    bg: cfg::COLOR_BACKGROUND,
                },
                display,
            )
            .unwrap();

        s.clear();
        match self.battery {
            Some(level) => {
                uwrite!(s, "BATTERY ").unwrap();
                write_percent(&mut s, level.percent());
                uwrite!(s, "  ").unwrap();
            }
            None => uwrite!(s, "BATTERY --   ").unwrap(),
        }
        TINIER_FONT
            .render(
                &s[..],
                Point::new(24, 280),
                VerticalPosition::Top,
                FontColor::WithBackground {
                    fg: cfg::COLOR_TRACK,
                    bg: cfg::COLOR_BACKGROUND,
                },
                display,
            )
            .unwrap();
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> DebugScreen<DT, E> {
    fn draw_axis_row(&self, display: &mut DT, y: i32, label: &str, value: f32) {
        TINY_FONT
            .render(
                label,
                Point::new(24, y),
                VerticalPosition::Top,
                FontColor::WithBackground {
                    fg: cfg::COLOR_BACKGROUND,
                    bg: cfg::COLOR_AXIS_BAR,
                },
                display,
            )
            .unwrap();

        let mut buffer_data = [cfg::COLOR_BACKGROUND; BAR_WIDTH * BAR_HEIGHT];
        let mut buffer = FrameBuf::new(&mut buffer_data, BAR_WIDTH, BAR_HEIGHT);

        buffer
            .fill_solid(
                &Rectangle::new(
                    Point::new(BAR_WIDTH as i32 / 2, 0),
                    Size::new(1, BAR_HEIGHT as u32),
                ),
                cfg::COLOR_TRACK,
            )
            .unwrap();

        let clamped = value.clamp(-1.0, 1.0);
        let x = ((clamped + 1.0) / 2.0 * (BAR_WIDTH - 1) as f32) as i32;
        let center = BAR_WIDTH as i32 / 2;
        let (x0, x1) = if x < center { (x, center) } else { (center, x) };
        buffer
            .fill_solid(
                &Rectangle::new(Point::new(x0, 8), Size::new((x1 - x0 + 1) as u32, 4)),
                cfg::COLOR_AXIS_BAR,
            )
            .unwrap();

        Pointer::new(Point::new(x, 18), 6, false, cfg::COLOR_THUMB)
            .draw(&mut buffer)
            .unwrap();

        display
            .fill_contiguous(
                &Rectangle::new(
                    Point::new(120, y),
                    Size::new(BAR_WIDTH as u32, BAR_HEIGHT as u32),
                ),
                buffer_data,
            )
            .unwrap();

        let mut s = String::<16>::default();
        write_axis(&mut s, value);
        uwrite!(s, " ").unwrap();
        TINY_FONT
            .render(
                &s[..],
                Point::new(330, y),
                VerticalPosition::Top,
                FontColor::WithBackground {
                    fg: cfg::COLOR_AXIS_BAR,
                    bg: cfg::COLOR_BACKGROUND,
                },
                display,
            )
            .unwrap();
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for DebugScreen<DT, E> {
    fn default() -> Self {
        Self {
            frame: ControlFrame::NEUTRAL,
            movement_offset: Point::zero(),
            altitude_offset: Point::zero(),
            battery: None,
            _phantom: core::marker::PhantomData,
        }
    }
}
