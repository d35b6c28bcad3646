//! # Countdown Core Library
//!
//! This library provides the logic behind the Countdown views: how much time
//! is left until a fixed target instant, and how far along the journey from
//! the session start we are. The `countdown` binary is a thin terminal layer
//! over the same core.
//!
//! ## Architecture
//!
//! - **Engine**: pure functions that decompose the remaining time and compute
//!   the raw progress ratio from absolute instants
//! - **Session**: a one-way `Counting -> Complete` state machine that captures
//!   the start instant on its first tick and emits the completion edge once
//! - **Ticker**: a scheduled task with an explicit start/stop lifecycle that
//!   drives re-sampling at a fixed cadence
//! - **Display**: the single place where progress is clamped, plus target
//!   formatting, rotating messages and the completion celebration
//! - **Storage**: TOML-based presentation preferences
//!
//! ## Key Components
//!
//! - [`compute_remaining`] / [`compute_progress`]: the countdown engine
//! - [`CountdownSession`]: per-view state machine
//! - [`Ticker`]: recurring tick task, cancelled on drop
//! - [`Config`]: application configuration management

pub mod clock;
pub mod countdown;
pub mod display;
pub mod error;
pub mod events;
pub mod storage;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{
    compute_progress, compute_remaining, CountdownSession, CountdownState, Remaining,
    RemainingDuration, Snapshot, TargetInstant, Tick, DEFAULT_TARGET, DEFAULT_TIMEZONE,
};
pub use display::{format_target, pad2, Celebration, DisplayLocale, MessageRotation, ProgressBar};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use ticker::{Ticker, DEFAULT_CADENCE};
