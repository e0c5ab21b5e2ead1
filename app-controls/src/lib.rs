#![no_std]

#[cfg(test)]
extern crate std;

mod battery;
mod calibration;
mod controller;
mod joystick;
mod layout;
mod timer;
pub mod util;

pub use battery::{BatteryLevel, BatteryMonitor};
pub use calibration::CalibrationState;
pub use controller::{ControlFrame, DashboardController, DroneStatus, Timings};
pub use joystick::{clamp_thumb_offset, Joystick, StickChannel};
pub use layout::{Layout, LayoutError};
pub use timer::PeriodicTimer;

#[cfg(test)]
pub(crate) mod test_clock {
    use core::cell::Cell;

    use crate::util::{LaxDuration, LaxMonotonic};

    std::thread_local! {
        static NOW_MS: Cell<u64> = Cell::new(0);
    }

    /// Fake monotonic clock, one per test thread.
    pub struct TestClock;

    impl TestClock {
        pub fn reset() {
            NOW_MS.with(|now| now.set(0));
        }

        pub fn advance_ms(ms: u64) {
            NOW_MS.with(|now| now.set(now.get() + ms));
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct TestInstant(u64);

    pub struct TestDuration(u64);

    impl core::ops::Sub for TestInstant {
        type Output = TestDuration;

        fn sub(self, rhs: Self) -> TestDuration {
            TestDuration(self.0 - rhs.0)
        }
    }

    impl LaxDuration for TestDuration {
        fn to_millis(&self) -> u64 {
            self.0
        }
    }

    impl LaxMonotonic for TestClock {
        type Instant = TestInstant;
        type Duration = TestDuration;

        fn now() -> TestInstant {
            NOW_MS.with(|now| TestInstant(now.get()))
        }
    }
}
