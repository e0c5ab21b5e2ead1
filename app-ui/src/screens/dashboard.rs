use core::fmt::Debug;

use app_controls::{BatteryLevel, DroneStatus, Layout};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, StyledDrawable};

use super::Screen;
use crate::{
    config as cfg, draw_badge, draw_battery, draw_button, draw_joystick_pad, draw_joystick_thumb,
    AppDrawTarget,
};

const START_LABEL: &str = " START ";
const CALIBRATE_LABEL: &str = " CALIBRATE ";

/// The main control surface. The render loop copies controller state into
/// the public fields each frame; only what changed gets redrawn.
pub struct DashboardScreen<DT, E> {
    layout: Layout,

    pub status: DroneStatus,
    pub battery: Option<BatteryLevel>,
    pub calibration_progress: Option<u8>,
    pub start_active: bool,
    pub calibrate_active: bool,
    pub movement_offset: Point,
    pub altitude_offset: Point,

    drawn_status: DroneStatus,
    drawn_battery: Option<BatteryLevel>,
    drawn_progress: Option<u8>,
    drawn_start_active: bool,
    drawn_calibrate_active: bool,
    drawn_movement_offset: Option<Point>,
    drawn_altitude_offset: Option<Point>,

    _phantom: core::marker::PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for DashboardScreen<DT, E> {
    async fn draw_init(&mut self, display: &mut DT) {
        display.clear(cfg::COLOR_BACKGROUND).unwrap();

        draw_joystick_pad(display, self.layout.movement_pad, " MOVE ");
        draw_joystick_pad(display, self.layout.altitude_pad, " ALT ");

        self.redraw_status(display).await;
        self.redraw_battery(display);
        self.redraw_progress(display);
        self.redraw_buttons(display);
        self.redraw_thumbs(display);
    }

    async fn draw_frame(&mut self, display: &mut DT) {
        if self.status != self.drawn_status {
            self.redraw_status(display).await;
        }
        if self.battery != self.drawn_battery {
            self.redraw_battery(display);
        }
        if self.calibration_progress != self.drawn_progress {
            self.redraw_progress(display);
        }
        if self.start_active != self.drawn_start_active
            || self.calibrate_active != self.drawn_calibrate_active
        {
            self.redraw_buttons(display);
        }
        if Some(self.movement_offset) != self.drawn_movement_offset
            || Some(self.altitude_offset) != self.drawn_altitude_offset
        {
            self.redraw_thumbs(display);
        }
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> DashboardScreen<DT, E> {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            status: DroneStatus::Ready,
            battery: None,
            calibration_progress: None,
            start_active: false,
            calibrate_active: false,
            movement_offset: Point::zero(),
            altitude_offset: Point::zero(),
            drawn_status: DroneStatus::Ready,
            drawn_battery: None,
            drawn_progress: None,
            drawn_start_active: false,
            drawn_calibrate_active: false,
            drawn_movement_offset: None,
            drawn_altitude_offset: None,
            _phantom: core::marker::PhantomData,
        }
    }

    async fn redraw_status(&mut self, display: &mut DT) {
        let origin = self.layout.status_origin;
        display
            .fill_solid(
                &Rectangle::new(origin - Point::new(180, 2), Size::new(360, 34)),
                cfg::COLOR_BACKGROUND,
            )
            .unwrap();

        let (fg, bg) = match self.status {
            DroneStatus::Ready => (cfg::COLOR_STATUS, cfg::COLOR_BACKGROUND),
            DroneStatus::Started => (Rgb565::BLACK, cfg::COLOR_BUTTON_ACTIVE),
            DroneStatus::Calibrating => (Rgb565::BLACK, cfg::COLOR_CALIBRATION),
            DroneStatus::CalibrationOk => (Rgb565::BLACK, cfg::COLOR_STATUS),
        };
        draw_badge(display, origin, self.status.label(), fg, bg).await;
        self.drawn_status = self.status;
    }

    fn redraw_battery(&mut self, display: &mut DT) {
        draw_battery(display, self.layout.battery_origin, self.battery);
        self.drawn_battery = self.battery;
    }

    fn redraw_progress(&mut self, display: &mut DT) {
        let center = self.progress_marker_center();
        display
            .fill_solid(
                &Rectangle::with_center(center, Size::new(32, 32)),
                cfg::COLOR_BACKGROUND,
            )
            .unwrap();

        if let Some(progress) = self.calibration_progress {
            let diameter = (100 - progress.min(100)) as u32 / 4 + 4;
            Circle::with_center(center, diameter)
                .draw_styled(
                    &PrimitiveStyle::with_stroke(cfg::COLOR_CALIBRATION, 2),
                    display,
                )
                .unwrap();
        }
        self.drawn_progress = self.calibration_progress;
    }

    fn redraw_buttons(&mut self, display: &mut DT) {
        draw_button(
            display,
            self.layout.start_button,
            START_LABEL,
            self.start_active,
        );
        draw_button(
            display,
            self.layout.calibrate_button,
            CALIBRATE_LABEL,
            self.calibrate_active,
        );
        self.drawn_start_active = self.start_active;
        self.drawn_calibrate_active = self.calibrate_active;
    }

    fn redraw_thumbs(&mut self, display: &mut DT) {
        if self.drawn_movement_offset != Some(self.movement_offset) {
            draw_joystick_thumb(
                display,
                self.layout.movement_pad,
                self.layout.thumb,
                self.drawn_movement_offset,
                self.movement_offset,
            );
            self.drawn_movement_offset = Some(self.movement_offset);
        }
        if self.drawn_altitude_offset != Some(self.altitude_offset) {
            draw_joystick_thumb(
                display,
                self.layout.altitude_pad,
                self.layout.thumb,
                self.drawn_altitude_offset,
                self.altitude_offset,
            );
            self.drawn_altitude_offset = Some(self.altitude_offset);
        }
    }

    fn progress_marker_center(&self) -> Point {
        let button = self.layout.calibrate_button;
        Point::new(
            button.center().x,
            button.top_left.y + button.size.height as i32 + 50,
        )
    }
}
