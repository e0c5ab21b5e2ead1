use crate::util::{LaxDuration, LaxMonotonic};

/// Calibration completion is derived from the stored start instant, so
/// re-pressing calibrate supersedes the pending completion instead of racing
/// with it.
pub enum CalibrationState<M: LaxMonotonic> {
    Idle,
    InProgress { since: M::Instant },
    Done,
}

impl<M: LaxMonotonic> CalibrationState<M> {
    pub fn begin(&mut self) {
        *self = CalibrationState::InProgress { since: M::now() };
    }

    pub fn cancel(&mut self) {
        *self = CalibrationState::Idle;
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, CalibrationState::InProgress { .. })
    }

    /// Returns true exactly once, when the in-flight calibration completes.
    pub fn poll(&mut self, duration_ms: u64) -> bool {
        match *self {
            CalibrationState::InProgress { since } => {
                if (M::now() - since).to_millis() >= duration_ms {
                    *self = CalibrationState::Done;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    pub fn progress(&self, duration_ms: u64) -> Option<u8> {
        match *self {
            CalibrationState::InProgress { since } => {
                let elapsed = (M::now() - since).to_millis();
                Some((elapsed * 100 / duration_ms.max(1)).min(100) as u8)
            }
            _ => None,
        }
    }
}

impl<M: LaxMonotonic> Default for CalibrationState<M> {
    fn default() -> Self {
        CalibrationState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_clock::TestClock;

    const DURATION_MS: u64 = 2000;

    #[test]
    fn completes_after_the_configured_delay() {
        TestClock::reset();
        let mut state = CalibrationState::<TestClock>::default();

        state.begin();
        assert!(state.is_in_progress());
        TestClock::advance_ms(1999);
        assert!(!state.poll(DURATION_MS));
        TestClock::advance_ms(1);
        assert!(state.poll(DURATION_MS));
        assert!(!state.poll(DURATION_MS));
    }

    #[test]
    fn repress_supersedes_the_pending_completion() {
        TestClock::reset();
        let mut state = CalibrationState::<TestClock>::default();

        state.begin();
        TestClock::advance_ms(1500);
        state.begin();

        // First press's deadline passes without completing.
        TestClock::advance_ms(500);
        assert!(!state.poll(DURATION_MS));

        TestClock::advance_ms(1500);
        assert!(state.poll(DURATION_MS));
    }

    #[test]
    fn progress_is_reported_while_in_flight_only() {
        TestClock::reset();
        let mut state = CalibrationState::<TestClock>::default();

        assert_eq!(state.progress(DURATION_MS), None);
        state.begin();
        assert_eq!(state.progress(DURATION_MS), Some(0));
        TestClock::advance_ms(1000);
        assert_eq!(state.progress(DURATION_MS), Some(50));
        TestClock::advance_ms(1000);
        assert!(state.poll(DURATION_MS));
        assert_eq!(state.progress(DURATION_MS), None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        TestClock::reset();
        let mut state = CalibrationState::<TestClock>::default();

        state.begin();
        state.cancel();
        TestClock::advance_ms(10_000);
        assert!(!state.poll(DURATION_MS));
    }
}
