use core::fmt::Debug;

use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};
use embedded_graphics::Drawable;

use super::Screen;
use crate::primitives::Cross;
use crate::util::delay_ms;
use crate::{draw_badge, AppDrawTarget};

pub struct BootScreen<DT, E> {
    _phantom: core::marker::PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for BootScreen<DT, E> {
    async fn draw_init(&mut self, display: &mut DT) {
        display.clear(Rgb565::BLACK).unwrap();

        let x = (display.bounding_box().size.width / 2) as i32;
        let y = (display.bounding_box().size.height / 2) as i32;

        Cross::new(Point::new(x, y + 40), 10, 4, Rgb565::CSS_GRAY)
            .draw(display)
            .unwrap();
        draw_badge(
            display,
            Point::new(x, y - 20),
            " DRONE CONTROL ",
            Rgb565::WHITE,
            Rgb565::BLACK,
        )
        .await;
        Cross::new(Point::new(x, y + 40), 15, 4, Rgb565::WHITE)
            .draw(display)
            .unwrap();
        draw_badge(
            display,
            Point::new(x, y + 70),
            env!("CARGO_PKG_VERSION"),
            Rgb565::BLACK,
            Rgb565::WHITE,
        )
        .await;
        delay_ms(150).await;
    }

    async fn draw_frame(&mut self, _display: &mut DT) {}
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for BootScreen<DT, E> {
    fn default() -> Self {
        Self {
            _phantom: core::marker::PhantomData,
        }
    }
}
