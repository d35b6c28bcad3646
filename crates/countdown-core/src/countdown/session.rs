//! Per-view countdown session.
//!
//! A session owns the target, captures the start instant on its first tick
//! and walks a one-way state machine:
//!
//! ```text
//! Counting -> Complete
//! ```
//!
//! The transition is reported as an [`Event::CountdownCompleted`] returned
//! from exactly one `tick()`. Consumers that need a one-time side effect
//! react to the event, not to the `done` flag, so re-rendering with
//! `snapshot()` can never fire it twice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{compute_progress, compute_remaining, signed_diff_ms, Remaining};
use super::target::TargetInstant;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Counting,
    Complete,
}

/// Everything the display layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: CountdownState,
    pub remaining: Remaining,
    /// Raw, unclamped progress ratio.
    pub progress: f64,
    pub start: DateTime<Utc>,
    pub sample: DateTime<Utc>,
    /// Zero-based index of the tick that produced this frame.
    pub tick_index: u64,
}

impl Snapshot {
    /// Build a full state snapshot event.
    pub fn to_event(&self) -> Event {
        let d = self.remaining.duration;
        Event::StateSnapshot {
            state: self.state,
            days: d.days,
            hours: d.hours,
            minutes: d.minutes,
            seconds: d.seconds,
            remaining_ms: self.remaining.total_ms,
            progress: self.progress,
            done: self.remaining.done,
            at: self.sample,
        }
    }
}

/// Output of one [`CountdownSession::tick`].
#[derive(Debug, Clone)]
pub struct Tick {
    pub snapshot: Snapshot,
    /// `CountdownStarted` on the first tick, `CountdownCompleted` on the
    /// tick that crosses the target, `None` otherwise.
    pub event: Option<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSession {
    target: TargetInstant,
    /// Captured on the first tick, never rewritten.
    #[serde(default)]
    start: Option<DateTime<Utc>>,
    state: CountdownState,
    #[serde(default)]
    ticks: u64,
}

impl CountdownSession {
    pub fn new(target: TargetInstant) -> Self {
        Self {
            target,
            start: None,
            state: CountdownState::Counting,
            ticks: 0,
        }
    }

    /// A session whose start instant is already known.
    pub fn with_start(target: TargetInstant, start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            ..Self::new(target)
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn target(&self) -> &TargetInstant {
        &self.target
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_complete(&self) -> bool {
        self.state == CountdownState::Complete
    }

    /// Render a frame for `sample` without advancing the state machine.
    ///
    /// Before the first tick the sample stands in for the start instant.
    pub fn snapshot(&self, sample: DateTime<Utc>) -> Snapshot {
        let start = self.start.unwrap_or(sample);
        Snapshot {
            state: self.state,
            remaining: compute_remaining(self.target.at(), &sample),
            progress: compute_progress(&start, self.target.at(), &sample),
            start,
            sample,
            tick_index: self.ticks.saturating_sub(1),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Re-sample and recompute. Call once per cadence period.
    pub fn tick(&mut self, sample: DateTime<Utc>) -> Tick {
        let first = self.start.is_none() && self.ticks == 0;
        let start = *self.start.get_or_insert(sample);
        self.ticks = self.ticks.saturating_add(1);

        let remaining = compute_remaining(self.target.at(), &sample);
        let event = match self.state {
            CountdownState::Counting if remaining.done => {
                self.state = CountdownState::Complete;
                let overshoot_ms = signed_diff_ms(&sample, self.target.at()).max(0) as u64;
                debug!(overshoot_ms, "countdown reached its target");
                Some(Event::CountdownCompleted {
                    target: *self.target.at(),
                    overshoot_ms,
                    at: sample,
                })
            }
            CountdownState::Counting if first => {
                debug!(%start, deadline = %self.target.at(), "countdown started");
                Some(Event::CountdownStarted {
                    target: *self.target.at(),
                    start,
                    at: sample,
                })
            }
            _ => None,
        };

        Tick {
            snapshot: Snapshot {
                state: self.state,
                remaining,
                progress: compute_progress(&start, self.target.at(), &sample),
                start,
                sample,
                tick_index: self.ticks - 1,
            },
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn target() -> TargetInstant {
        TargetInstant::parse("2025-11-14T08:00:00-03:00", "America/Sao_Paulo").unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn first_tick_captures_start_and_emits_started() {
        let mut session = CountdownSession::new(target());
        assert!(session.start().is_none());

        let t0 = utc("2025-11-13T11:00:00Z");
        let tick = session.tick(t0);
        assert_eq!(session.start(), Some(t0));
        assert!(matches!(tick.event, Some(Event::CountdownStarted { .. })));
        assert_eq!(tick.snapshot.progress, 0.0);
        assert_eq!(tick.snapshot.remaining.duration.days, 1);
        assert_eq!(tick.snapshot.tick_index, 0);
    }

    #[test]
    fn start_is_never_rewritten() {
        let mut session = CountdownSession::new(target());
        let t0 = utc("2025-11-13T11:00:00Z");
        session.tick(t0);
        session.tick(t0 + Duration::seconds(1));
        session.tick(t0 + Duration::seconds(2));
        assert_eq!(session.start(), Some(t0));
        assert_eq!(session.ticks(), 3);
    }

    #[test]
    fn completion_edge_fires_exactly_once() {
        let mut session = CountdownSession::new(target());
        let target_utc = utc("2025-11-14T11:00:00Z");
        let mut sample = target_utc - Duration::seconds(3);

        let mut completions = 0;
        for _ in 0..8 {
            let tick = session.tick(sample);
            if matches!(tick.event, Some(Event::CountdownCompleted { .. })) {
                completions += 1;
                assert_eq!(tick.snapshot.sample, target_utc);
            }
            sample += Duration::seconds(1);
        }
        assert_eq!(completions, 1);
        assert_eq!(session.state(), CountdownState::Complete);
    }

    #[test]
    fn already_past_target_completes_on_first_tick() {
        let mut session = CountdownSession::new(target());
        let late = utc("2025-11-14T11:00:05Z");
        let tick = session.tick(late);
        match tick.event {
            Some(Event::CountdownCompleted { overshoot_ms, .. }) => {
                assert_eq!(overshoot_ms, 5_000)
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(session.tick(late + Duration::seconds(1)).event.is_none());
    }

    #[test]
    fn snapshot_does_not_advance_state() {
        let mut session = CountdownSession::new(target());
        session.tick(utc("2025-11-14T10:59:59Z"));

        let after = utc("2025-11-14T11:00:01Z");
        let frame = session.snapshot(after);
        assert!(frame.remaining.done);
        assert_eq!(frame.state, CountdownState::Counting);
        assert_eq!(session.state(), CountdownState::Counting);

        // The edge still belongs to the next real tick.
        let tick = session.tick(after);
        assert!(matches!(tick.event, Some(Event::CountdownCompleted { .. })));
    }

    #[test]
    fn no_transition_back_to_counting() {
        let mut session = CountdownSession::new(target());
        session.tick(utc("2025-11-14T11:00:00Z"));
        assert!(session.is_complete());

        // A clock that jumps backwards does not revive the countdown.
        let tick = session.tick(utc("2025-11-14T10:00:00Z"));
        assert_eq!(tick.snapshot.state, CountdownState::Complete);
        assert!(!tick.snapshot.remaining.done);
        assert!(tick.event.is_none());
    }

    #[test]
    fn with_start_uses_given_start() {
        let start = utc("2025-11-14T10:00:00Z");
        let mut session = CountdownSession::with_start(target(), start);
        let tick = session.tick(utc("2025-11-14T10:30:00Z"));
        assert_eq!(tick.snapshot.progress, 0.5);
        assert!(tick.event.is_none());
    }

    #[test]
    fn snapshot_event_carries_fields() {
        let mut session = CountdownSession::new(target());
        let tick = session.tick(utc("2025-11-13T09:58:57Z"));
        match tick.snapshot.to_event() {
            Event::StateSnapshot {
                state,
                days,
                hours,
                minutes,
                seconds,
                done,
                ..
            } => {
                assert_eq!(state, CountdownState::Counting);
                assert_eq!((days, hours, minutes, seconds), (1, 1, 1, 3));
                assert!(!done);
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn session_serde_roundtrip() {
        let mut session = CountdownSession::new(target());
        session.tick(utc("2025-11-13T11:00:00Z"));
        let json = serde_json::to_string(&session).unwrap();
        let back: CountdownSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start(), session.start());
        assert_eq!(back.state(), CountdownState::Counting);
        assert_eq!(back.ticks(), 1);
    }
}
