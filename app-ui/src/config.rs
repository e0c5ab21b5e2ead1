use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};

pub const COLOR_BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const COLOR_STATUS: Rgb565 = Rgb565::CSS_PALE_GREEN;
pub const COLOR_CALIBRATION: Rgb565 = Rgb565::YELLOW;
pub const COLOR_BATTERY: Rgb565 = Rgb565::CSS_TURQUOISE;
pub const COLOR_BATTERY_LOW: Rgb565 = Rgb565::CSS_DARK_ORANGE;
pub const COLOR_BATTERY_INACTIVE: Rgb565 = Rgb565::CSS_DARK_SLATE_GRAY;

pub const BATTERY_LOW_PERCENT: u8 = 20;
pub const COLOR_BUTTON: Rgb565 = Rgb565::WHITE;
pub const COLOR_BUTTON_ACTIVE: Rgb565 = Rgb565::CSS_TURQUOISE;
pub const COLOR_TRACK: Rgb565 = Rgb565::CSS_DIM_GRAY;
pub const COLOR_THUMB: Rgb565 = Rgb565::CSS_ORANGE;
pub const COLOR_AXIS_BAR: Rgb565 = Rgb565::CSS_PALE_GREEN;
pub const COLOR_FAULT: Rgb565 = Rgb565::RED;
