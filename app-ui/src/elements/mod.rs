mod badge;
mod battery;
mod button;
mod joystick;

pub use badge::draw_badge;
pub use battery::draw_battery;
pub use button::draw_button;
pub use joystick::{draw_joystick_pad, draw_joystick_thumb};
