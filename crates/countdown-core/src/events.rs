use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::CountdownState;

/// Every state change in a countdown session produces an Event.
/// The host renders snapshots; one-time effects subscribe to transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// First tick of a session that has not yet reached its target.
    CountdownStarted {
        target: DateTime<FixedOffset>,
        start: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    /// The single `Counting -> Complete` transition.
    CountdownCompleted {
        target: DateTime<FixedOffset>,
        /// How far past the target the crossing sample was.
        overshoot_ms: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: CountdownState,
        days: u64,
        hours: u32,
        minutes: u32,
        seconds: u32,
        remaining_ms: u64,
        /// Raw ratio; clamp at the display boundary only.
        progress: f64,
        done: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::CountdownStarted { at, .. }
            | Event::CountdownCompleted { at, .. }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Event::CountdownCompleted { .. })
    }
}
