use crate::util::{LaxDuration, LaxMonotonic};

/// Repeating deadline owned by the dashboard controller. Fires on poll once
/// per elapsed period until cancelled.
pub struct PeriodicTimer<M: LaxMonotonic> {
    period_ms: u64,
    last: Option<M::Instant>,
}

impl<M: LaxMonotonic> PeriodicTimer<M> {
    pub fn started(period_ms: u64) -> Self {
        Self {
            period_ms,
            last: Some(M::now()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    pub fn restart(&mut self) {
        self.last = Some(M::now());
    }

    pub fn cancel(&mut self) {
        self.last = None;
    }

    pub fn poll(&mut self) -> bool {
        let last = match self.last {
            Some(last) => last,
            None => return false,
        };

        let now = M::now();
        if (now - last).to_millis() >= self.period_ms {
            self.last = Some(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_clock::TestClock;

    #[test]
    fn fires_once_per_period() {
        TestClock::reset();
        let mut timer = PeriodicTimer::<TestClock>::started(5000);

        assert!(!timer.poll());
        TestClock::advance_ms(4999);
        assert!(!timer.poll());
        TestClock::advance_ms(1);
        assert!(timer.poll());
        assert!(!timer.poll());
        TestClock::advance_ms(5000);
        assert!(timer.poll());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        TestClock::reset();
        let mut timer = PeriodicTimer::<TestClock>::started(100);

        timer.cancel();
        assert!(!timer.is_running());
        TestClock::advance_ms(10_000);
        assert!(!timer.poll());
    }

    #[test]
    fn restart_rebases_the_deadline() {
        TestClock::reset();
        let mut timer = PeriodicTimer::<TestClock>::started(100);

        TestClock::advance_ms(90);
        timer.restart();
        TestClock::advance_ms(99);
        assert!(!timer.poll());
        TestClock::advance_ms(1);
        assert!(timer.poll());
    }
}
