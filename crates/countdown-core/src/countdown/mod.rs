mod engine;
mod session;
mod target;

pub use engine::{
    compute_progress, compute_remaining, Remaining, RemainingDuration, MS_PER_DAY, MS_PER_HOUR,
    MS_PER_MINUTE, MS_PER_SECOND,
};
pub use session::{CountdownSession, CountdownState, Snapshot, Tick};
pub use target::{parse_timestamp, parse_timezone, TargetInstant, DEFAULT_TARGET, DEFAULT_TIMEZONE};
