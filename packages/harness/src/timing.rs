//! Wall-clock measurement of a single computation.

use std::fmt;
use std::time::{Duration, Instant};

/// Measures one interval at a time.
///
/// Starting while a measurement is active closes the previous one first,
/// so intervals never overlap.
///
/// # Example
///
/// ```
/// use harness::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
/// assert!(stopwatch.start().is_none());
/// assert!(stopwatch.is_timing());
/// assert!(stopwatch.stop().is_some());
/// assert!(!stopwatch.is_timing());
/// ```
#[derive(Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Stopwatch { started: None }
    }

    /// Start a new measurement, returning the one it replaced, if any.
    pub fn start(&mut self) -> Option<Duration> {
        let previous = self.stop();
        self.started = Some(Instant::now());
        previous
    }

    pub fn stop(&mut self) -> Option<Duration> {
        self.started.take().map(|started| started.elapsed())
    }

    pub fn is_timing(&self) -> bool {
        self.started.is_some()
    }
}

/// Elapsed time of one labeled computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub label: String,
    pub elapsed: Duration,
}

impl Timing {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took {:.3}ms", self.label, self.millis())
    }
}
