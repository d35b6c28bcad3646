//! Display-boundary helpers.
//!
//! The engine hands out raw values; everything here turns them into what a
//! view shows. [`ProgressBar::from_ratio`] is the only place a progress ratio
//! is clamped.

mod celebration;
mod format;
mod messages;
mod progress;

pub use celebration::{Celebration, Particle};
pub use format::{format_target, pad2, DisplayLocale, Labels};
pub use messages::MessageRotation;
pub use progress::ProgressBar;
