use std::{ops::Add, time::{Duration, Instant}};

/// A point on the embedding runtime's monotonic clock, measured from the
/// clock's origin (usually session start).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The clock origin
    pub const ZERO: Timestamp = Timestamp(Duration::ZERO);

    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Builds a timestamp from fractional seconds, as game loops usually
    /// report time. Negative or non-finite input clamps to the origin.
    pub fn from_secs_f32(secs: f32) -> Self {
        Duration::try_from_secs_f32(secs)
            .map(Self)
            .unwrap_or(Self::ZERO)
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is in the future
    pub fn saturating_duration_since(&self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        Timestamp(self.0.saturating_add(rhs))
    }
}

/// Produces [`Timestamp`]s from the system monotonic clock, with the origin
/// at the moment the clock was created
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed())
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
