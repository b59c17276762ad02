//! Injectable clock for the flash reader.
//!
//! The flash reader sleeps between words and measures how long the run took.
//! [`RealTimeSource`] does both against the system clock; [`TestTimeSource`]
//! keeps a logical clock whose sleeps return immediately, so a long run is
//! instant and its timing exact in tests.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Clock and sleep operations used by the flash reader.
pub trait TimeSource: std::fmt::Debug {
    /// Current instant, for measuring elapsed time.
    fn now(&self) -> Instant;

    /// Block for `duration` (or advance logical time).
    fn sleep(&self, duration: Duration);

    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// System clock and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Logical clock: starts at zero and only moves on `sleep` or `advance`.
///
/// ```
/// use bionic::services::time_source::{TimeSource, TestTimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
/// time.sleep(Duration::from_secs(5));
/// assert_eq!(time.elapsed_since(start), Duration::from_secs(5));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    origin: Instant,
    elapsed: Cell<Duration>,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
    }

    /// Logical time since creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
