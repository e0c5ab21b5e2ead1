use embedded_graphics::geometry::Point;

use crate::battery::{BatteryLevel, BatteryMonitor};
use crate::calibration::CalibrationState;
use crate::joystick::{Joystick, StickChannel};
use crate::timer::PeriodicTimer;
use crate::util::LaxMonotonic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneStatus {
    Ready,
    Started,
    Calibrating,
    CalibrationOk,
}

impl DroneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DroneStatus::Ready => "Ready",
            DroneStatus::Started => "Drone Started",
            DroneStatus::Calibrating => "Calibrating...",
            DroneStatus::CalibrationOk => "Calibration Successful",
        }
    }
}

/// Stick deflections mapped to the four control axes. Display and logging
/// only; nothing is transmitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlFrame {
    pub roll: f32,
    pub pitch: f32,
    pub throttle: f32,
    pub yaw: f32,
}

impl ControlFrame {
    pub const NEUTRAL: ControlFrame = ControlFrame {
        roll: 0.0,
        pitch: 0.0,
        throttle: 0.0,
        yaw: 0.0,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub battery_interval_ms: u64,
    pub calibration_ms: u64,
}

/// All dashboard state lives here; the render loop reads it back out each
/// frame. Both standing timers are owned by this struct and cancellable.
pub struct DashboardController<M: LaxMonotonic> {
    timings: Timings,
    status: DroneStatus,
    calibration: CalibrationState<M>,
    battery_timer: PeriodicTimer<M>,
    battery: BatteryMonitor,
    battery_level: Option<BatteryLevel>,
    movement: Joystick,
    altitude: Joystick,
}

impl<M: LaxMonotonic> DashboardController<M> {
    pub fn new(timings: Timings, movement: Joystick, altitude: Joystick, battery_seed: u32) -> Self {
        Self {
            timings,
            status: DroneStatus::Ready,
            calibration: CalibrationState::default(),
            battery_timer: PeriodicTimer::started(timings.battery_interval_ms),
            battery: BatteryMonitor::new(battery_seed),
            battery_level: None,
            movement,
            altitude,
        }
    }

    pub fn start_pressed(&mut self) {
        log::info!("start pressed");
        self.status = DroneStatus::Started;
    }

    pub fn calibrate_pressed(&mut self) {
        log::info!("calibrate pressed");
        self.status = DroneStatus::Calibrating;
        self.calibration.begin();
    }

    /// Routes a pointer position to the pad under it, if any, and returns
    /// the stick's new clamped offset.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<(StickChannel, Point)> {
        for stick in [&mut self.movement, &mut self.altitude] {
            if stick.contains(pointer) {
                let offset = stick.point_to(pointer);
                log::debug!(
                    "{} joystick moved: {} {}",
                    stick.channel().name(),
                    offset.x,
                    offset.y
                );
                return Some((stick.channel(), offset));
            }
        }
        None
    }

    /// Polls both standing timers. Called once per frame.
    pub fn tick(&mut self) {
        if self.battery_timer.poll() {
            let level = self.battery.sample();
            log::debug!("battery level: {}%", level.percent());
            self.battery_level = Some(level);
        }

        if self.calibration.poll(self.timings.calibration_ms) {
            log::info!("calibration finished");
            self.status = DroneStatus::CalibrationOk;
        }
    }

    pub fn status(&self) -> DroneStatus {
        self.status
    }

    pub fn battery_level(&self) -> Option<BatteryLevel> {
        self.battery_level
    }

    pub fn calibration_progress(&self) -> Option<u8> {
        self.calibration.progress(self.timings.calibration_ms)
    }

    pub fn stick(&self, channel: StickChannel) -> &Joystick {
        match channel {
            StickChannel::Movement => &self.movement,
            StickChannel::Altitude => &self.altitude,
        }
    }

    pub fn battery_timer(&mut self) -> &mut PeriodicTimer<M> {
        &mut self.battery_timer
    }

    pub fn control_frame(&self) -> ControlFrame {
        let (mx, my) = self.movement.axes();
        let (ax, ay) = self.altitude.axes();
        ControlFrame {
            roll: mx,
            pitch: -my,
            throttle: -ay,
            yaw: ax,
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Size;
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::test_clock::TestClock;

    const TIMINGS: Timings = Timings {
        battery_interval_ms: 5000,
        calibration_ms: 2000,
    };

    fn controller() -> DashboardController<TestClock> {
        TestClock::reset();
        let movement = Joystick::new(
            StickChannel::Movement,
            Rectangle::new(Point::new(176, 136), Size::new(128, 128)),
            Size::new(36, 36),
        );
        let altitude = Joystick::new(
            StickChannel::Altitude,
            Rectangle::new(Point::new(332, 136), Size::new(128, 128)),
            Size::new(36, 36),
        );
        DashboardController::new(TIMINGS, movement, altitude, 7)
    }

    #[test]
    fn start_press_sets_status_text() {
        let mut c = controller();
        assert_eq!(c.status().label(), "Ready");
        c.start_pressed();
        assert_eq!(c.status().label(), "Drone Started");
    }

    #[test]
    fn calibration_flow_updates_status_after_delay() {
        let mut c = controller();
        c.calibrate_pressed();
        assert_eq!(c.status().label(), "Calibrating...");

        TestClock::advance_ms(1999);
        c.tick();
        assert_eq!(c.status(), DroneStatus::Calibrating);

        TestClock::advance_ms(1);
        c.tick();
        assert_eq!(c.status().label(), "Calibration Successful");
    }

    #[test]
    fn recalibrating_restarts_the_delay() {
        let mut c = controller();
        c.calibrate_pressed();
        TestClock::advance_ms(1500);
        c.calibrate_pressed();

        TestClock::advance_ms(1500);
        c.tick();
        assert_eq!(c.status(), DroneStatus::Calibrating);

        TestClock::advance_ms(500);
        c.tick();
        assert_eq!(c.status(), DroneStatus::CalibrationOk);
    }

    #[test]
    fn start_does_not_cancel_an_inflight_calibration() {
        // Matches the source behavior: last write wins between a start press
        // and a pending calibration completion.
        let mut c = controller();
        c.calibrate_pressed();
        TestClock::advance_ms(1000);
        c.start_pressed();
        assert_eq!(c.status(), DroneStatus::Started);

        TestClock::advance_ms(1000);
        c.tick();
        assert_eq!(c.status(), DroneStatus::CalibrationOk);
    }

    #[test]
    fn battery_updates_on_the_five_second_timer() {
        let mut c = controller();
        c.tick();
        assert_eq!(c.battery_level(), None);

        TestClock::advance_ms(5000);
        c.tick();
        let first = c.battery_level().expect("sampled");
        assert!(first.percent() < 100);

        c.tick();
        assert_eq!(c.battery_level(), Some(first));
    }

    #[test]
    fn cancelled_battery_timer_stops_updates() {
        let mut c = controller();
        c.battery_timer().cancel();
        TestClock::advance_ms(60_000);
        c.tick();
        assert_eq!(c.battery_level(), None);
    }

    #[test]
    fn pointer_routes_to_the_pad_under_it() {
        let mut c = controller();

        let (channel, offset) = c.pointer_moved(Point::new(180, 140)).expect("movement pad");
        assert_eq!(channel, StickChannel::Movement);
        assert_eq!(offset, Point::zero());

        let (channel, _) = c.pointer_moved(Point::new(396, 200)).expect("altitude pad");
        assert_eq!(channel, StickChannel::Altitude);

        assert_eq!(c.pointer_moved(Point::new(0, 0)), None);
    }

    #[test]
    fn centered_sticks_yield_a_neutral_frame() {
        let c = controller();
        assert_eq!(c.control_frame(), ControlFrame::NEUTRAL);
    }

    #[test]
    fn full_up_deflection_is_full_throttle() {
        let mut c = controller();
        c.pointer_moved(Point::new(396, 136));
        let frame = c.control_frame();
        assert_eq!(frame.throttle, 1.0);
        assert_eq!(frame.roll, 0.0);
    }
}
