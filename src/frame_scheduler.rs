//! Periodic deadline tracking for task loops.
//!
//! Tasks never sleep on their own. Each tick reports the next deadline and
//! how long the host should sleep, and the host's timed-sleep capability
//! does the waiting.

use embassy_time::{Duration, Instant};

/// Display refresh period (50 FPS)
pub const DEFAULT_DISPLAY_PERIOD: Duration = Duration::from_millis(20);

/// Animation tick period (20 FPS)
pub const DEFAULT_ANIMATION_PERIOD: Duration = Duration::from_millis(50);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Fixed-period deadline tracker with drift correction.
///
/// If a tick arrives more than two periods late the backlog is dropped and
/// the schedule restarts from `now`, so a stalled task does not burst
/// through a run of zero-length sleeps.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    next_frame: Instant,
    frame_duration: Duration,
}

impl FrameScheduler {
    pub const fn new(frame_duration: Duration) -> Self {
        Self {
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Change the period. Takes effect from the next deadline.
    pub fn set_frame_duration(&mut self, frame_duration: Duration) {
        self.frame_duration = frame_duration;
    }

    /// Advance past the current frame and return timing for the next one
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration.as_ticks().saturating_mul(2);
        if now.as_ticks() > self.next_frame.as_ticks().saturating_add(max_drift) {
            self.next_frame = now;
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }
}
