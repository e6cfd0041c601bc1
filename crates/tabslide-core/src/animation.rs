//! Animation driver for the sliding highlight.
//!
//! The [`AnimationDriver`] turns a pair of resting offsets into an
//! [`AnimationRun`] and interpolates the highlight's horizontal offset
//! over time. Timing is entirely caller-supplied: every operation takes
//! an explicit [`Instant`], so the driver can be exercised in tests
//! without a live ticker.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tabslide_core::animation::AnimationDriver;
//!
//! let driver = AnimationDriver::new(Duration::from_millis(800));
//! let t0 = Instant::now();
//! let run = driver.start(0, 60, t0);
//!
//! let (mid, finished) = driver.sample(&run, t0 + Duration::from_millis(400));
//! assert_eq!(mid, 30);
//! assert!(!finished);
//!
//! let (end, finished) = driver.sample(&run, t0 + Duration::from_millis(900));
//! assert_eq!(end, 60);
//! assert!(finished);
//! ```

use std::time::{Duration, Instant};

/// One in-flight slide of the highlight from a start offset to a target.
///
/// Runs are immutable once created. Interrupting an animation replaces
/// the run with a fresh one rather than mutating it; the stale
/// descriptor is simply discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRun {
    start_x: i32,
    delta_x: i32,
    duration: Duration,
    started_at: Instant,
}

impl AnimationRun {
    /// Offset the run began from.
    #[must_use]
    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    /// Offset the run settles at.
    #[must_use]
    pub fn end_x(&self) -> i32 {
        self.start_x + self.delta_x
    }

    /// Timestamp the run was started at.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

/// Computes the highlight offset as a function of elapsed time.
///
/// The driver holds only the configured duration; all per-run state
/// lives in the [`AnimationRun`] it hands out. There is no queue: a new
/// `start` always wins over whatever the caller was running before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDriver {
    duration: Duration,
}

impl AnimationDriver {
    /// Creates a driver that completes runs over `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        AnimationDriver { duration }
    }

    /// The configured run duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Changes the duration used for subsequent runs.
    ///
    /// Runs already started keep the duration they were created with.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Begins a run from `start_x` toward `end_x` at `now`.
    #[must_use]
    pub fn start(&self, start_x: i32, end_x: i32, now: Instant) -> AnimationRun {
        AnimationRun {
            start_x,
            delta_x: end_x - start_x,
            duration: self.duration,
            started_at: now,
        }
    }

    /// Samples the run at `now`.
    ///
    /// Returns the interpolated offset and whether the run has settled.
    /// The offset moves monotonically toward `end_x` as `now` advances
    /// and never overshoots it; interpolation rounds to the nearest
    /// cell. A zero-duration run resolves to `end_x` on the first
    /// sample.
    #[must_use]
    pub fn sample(&self, run: &AnimationRun, now: Instant) -> (i32, bool) {
        let end = run.end_x();
        if run.duration.is_zero() {
            return (end, true);
        }

        let elapsed = now.saturating_duration_since(run.started_at);
        if elapsed >= run.duration {
            return (end, true);
        }

        let t = elapsed.as_secs_f64() / run.duration.as_secs_f64();
        #[allow(clippy::cast_possible_truncation)]
        let offset = run.start_x + (f64::from(run.delta_x) * t).round() as i32;
        (offset, offset == end)
    }
}
