#![no_std]

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

mod config;
mod elements;
mod fault;
pub mod fonts;
mod format;
mod primitives;
mod screens;
mod util;

pub use elements::*;
pub use fault::draw_fault_screen;
pub use screens::{BootScreen, DashboardScreen, DebugScreen, Screen, Screens};

pub trait HintRefresh {
    fn hint_refresh(&mut self);
}

pub trait AppDrawTarget<E>: DrawTarget<Color = Rgb565, Error = E> + HintRefresh {}
impl<E, D: DrawTarget<Color = Rgb565, Error = E> + HintRefresh> AppDrawTarget<E> for D {}
