use app_controls::util::LaxMonotonic;

pub struct StdClock;

impl LaxMonotonic for StdClock {
    type Instant = std::time::Instant;
    type Duration = std::time::Duration;

    fn now() -> Self::Instant {
        std::time::Instant::now()
    }
}
