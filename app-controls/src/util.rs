pub trait LaxDuration {
    fn to_millis(&self) -> u64;
}

impl LaxDuration for core::time::Duration {
    fn to_millis(&self) -> u64 {
        self.as_millis() as u64
    }
}

pub trait LaxMonotonic {
    type Instant: Ord + Copy + core::ops::Sub<Self::Instant, Output = Self::Duration>;
    type Duration: LaxDuration;
    fn now() -> Self::Instant;
}
