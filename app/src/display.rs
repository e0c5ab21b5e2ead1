use app_ui::HintRefresh;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

/// Simulator-backed display. Drawing goes to the in-memory framebuffer;
/// `flush` pushes it to the SDL window.
pub struct Display {
    inner: SimulatorDisplay<Rgb565>,
    window: Window,
}

impl Display {
    pub fn new(size: Size, title: &str) -> Self {
        let output_settings = OutputSettingsBuilder::new().scale(2).build();
        Display {
            inner: SimulatorDisplay::new(size),
            window: Window::new(title, &output_settings),
        }
    }

    pub fn flush(&mut self) {
        self.window.update(&self.inner);
    }

    pub fn poll_events(&mut self) -> Vec<SimulatorEvent> {
        self.window.events().collect()
    }
}

impl Dimensions for Display {
    fn bounding_box(&self) -> Rectangle {
        self.inner.bounding_box()
    }
}

impl DrawTarget for Display {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.inner.draw_iter(pixels)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.inner.fill_contiguous(area, colors)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.clear(color)
    }
}

impl HintRefresh for Display {
    fn hint_refresh(&mut self) {
        self.flush();
    }
}
