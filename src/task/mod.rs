//! Loop bodies for the producer and consumer tasks.
//!
//! The host owns the threads. It spawns one context per task, calls
//! `tick` in a loop and sleeps for the returned duration. When a tick
//! reports a new [`Priority`], the host applies it to the calling thread
//! before sleeping.

mod animation;
mod display;

pub use animation::AnimationTask;
pub use display::{DisplayConfig, DisplayStats, DisplayTask};

use embassy_time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::frame_scheduler::FrameResult;
use crate::priority::Priority;

/// Outcome of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub next_deadline: Instant,
    /// How long the host should sleep before the next tick
    pub sleep_duration: Duration,
    /// Set when the task moved to a different scheduler priority
    pub priority: Option<Priority>,
}

impl TickResult {
    pub(crate) const fn from_frame(frame: FrameResult, priority: Option<Priority>) -> Self {
        Self {
            next_deadline: frame.next_deadline,
            sleep_duration: frame.sleep_duration,
            priority,
        }
    }
}

/// Check that the display refreshes at least as often as the fastest
/// animation ticks.
pub fn check_cadence(display_period: Duration, animation_periods: &[Duration]) -> Result<()> {
    match animation_periods.iter().min() {
        Some(&fastest) if display_period > fastest => Err(Error::InvalidConfig {
            reason: "display period exceeds the fastest animation period",
        }),
        _ => Ok(()),
    }
}
