//! Remaining-time and progress computation.
//!
//! Both functions are pure: they read two or three absolute instants and
//! return a value recomputed from scratch. Nothing is accumulated between
//! calls, so the result for a given set of instants never drifts.
//!
//! ## Usage
//!
//! ```ignore
//! let left = compute_remaining(target.at(), &now);
//! let ratio = compute_progress(&start, target.at(), &now);
//! ```

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Non-negative time left, split into calendar-free units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub days: u64,
    /// 0..=23
    pub hours: u32,
    /// 0..=59
    pub minutes: u32,
    /// 0..=59
    pub seconds: u32,
}

impl RemainingDuration {
    /// Decompose a clamped millisecond count. Sub-second remainder is dropped.
    pub fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms / MS_PER_HOUR % 24) as u32,
            minutes: (ms / MS_PER_MINUTE % 60) as u32,
            seconds: (ms / MS_PER_SECOND % 60) as u32,
        }
    }

    /// Recombine into milliseconds (whole seconds only).
    pub fn as_millis(&self) -> u64 {
        self.days
            .saturating_mul(MS_PER_DAY)
            .saturating_add(self.hours as u64 * MS_PER_HOUR)
            .saturating_add(self.minutes as u64 * MS_PER_MINUTE)
            .saturating_add(self.seconds as u64 * MS_PER_SECOND)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of [`compute_remaining`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub duration: RemainingDuration,
    /// `max(0, target - sample)` in milliseconds.
    pub total_ms: u64,
    /// `sample >= target`, judged on the unclamped difference.
    pub done: bool,
}

/// Time left from `sample` to `target`.
///
/// A sample at or past the target yields all-zero fields and `done = true`.
pub fn compute_remaining<A, B>(target: &DateTime<A>, sample: &DateTime<B>) -> Remaining
where
    A: TimeZone,
    B: TimeZone,
{
    let diff = signed_diff_ms(target, sample);
    let total_ms = diff.max(0) as u64;
    Remaining {
        duration: RemainingDuration::from_millis(total_ms),
        total_ms,
        done: diff <= 0,
    }
}

/// Fraction of the `start -> target` journey already elapsed at `sample`.
///
/// The value is NOT clamped: a sample taken before `start` gives a negative
/// ratio. The denominator is floored at 1 ms, so a target at or before the
/// start saturates instead of dividing by zero.
pub fn compute_progress<S, A, B>(
    start: &DateTime<S>,
    target: &DateTime<A>,
    sample: &DateTime<B>,
) -> f64
where
    S: TimeZone,
    A: TimeZone,
    B: TimeZone,
{
    let total_journey = signed_diff_ms(target, start).max(1);
    let remaining = signed_diff_ms(target, sample).max(0);
    1.0 - remaining as f64 / total_journey as f64
}

/// `later - earlier` in milliseconds, saturating at the i64 bounds.
pub(crate) fn signed_diff_ms<A, B>(later: &DateTime<A>, earlier: &DateTime<B>) -> i64
where
    A: TimeZone,
    B: TimeZone,
{
    later
        .timestamp_millis()
        .saturating_sub(earlier.timestamp_millis())
}
