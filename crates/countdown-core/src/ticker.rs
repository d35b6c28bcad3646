//! Recurring tick task.
//!
//! A [`Ticker`] owns one tokio task that calls a closure at a fixed cadence.
//! The task lives exactly as long as the `Ticker`: `stop()` aborts it, and
//! dropping the `Ticker` stops it too, so no recurring callback outlives the
//! view that started it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = CountdownSession::new(target);
//! let ticker = Ticker::spawn(DEFAULT_CADENCE, move || {
//!     let tick = session.tick(clock.now());
//!     render(&tick);
//!     ControlFlow::Continue(())
//! });
//! ```

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// One re-sample per second.
pub const DEFAULT_CADENCE: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Ticker {
    cadence: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking. The first call to `on_tick` happens immediately.
    ///
    /// Returning `ControlFlow::Break(())` from `on_tick` ends the task.
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(cadence: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let cadence = if cadence.is_zero() {
            warn!("zero tick cadence requested, using {:?}", DEFAULT_CADENCE);
            DEFAULT_CADENCE
        } else {
            cadence
        };

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(cadence);
            // Every tick re-samples the clock, so late ticks are simply dropped.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if on_tick().is_break() {
                    break;
                }
            }
            debug!("ticker loop finished");
        });
        debug!(?cadence, "ticker started");

        Self {
            cadence,
            handle: Some(handle),
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("ticker stopped");
        }
    }

    /// Wait until `on_tick` breaks out of the loop.
    pub async fn finished(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    warn!("tick callback panicked: {e}");
                }
            }
            self.handle = None;
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
