#![no_std]

use app_controls::{Layout, Timings};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

pub const DISPLAY_WIDTH: u32 = 480;
pub const DISPLAY_HEIGHT: u32 = 320;
pub const DISPLAY_SIZE: Size = Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
pub const WINDOW_TITLE: &str = "Drone Control";

pub const BATTERY_INTERVAL_MS: u64 = 5000;
pub const CALIBRATION_TIME_MS: u64 = 2000;

pub const FRAME_TIME_MS: u64 = 20;
pub const BOOT_SPLASH_MS: u64 = 1200;

pub const TIMINGS: Timings = Timings {
    battery_interval_ms: BATTERY_INTERVAL_MS,
    calibration_ms: CALIBRATION_TIME_MS,
};

pub const LAYOUT: Layout = Layout {
    status_origin: Point::new(200, 8),
    battery_origin: Point::new(388, 8),
    start_button: Rectangle::new(Point::new(24, 56), Size::new(120, 44)),
    calibrate_button: Rectangle::new(Point::new(24, 116), Size::new(120, 44)),
    movement_pad: Rectangle::new(Point::new(176, 136), Size::new(128, 128)),
    altitude_pad: Rectangle::new(Point::new(332, 136), Size::new(128, 128)),
    thumb: Size::new(36, 36),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layout_fits_the_display() {
        assert_eq!(LAYOUT.validate(DISPLAY_SIZE), Ok(()));
    }
}
