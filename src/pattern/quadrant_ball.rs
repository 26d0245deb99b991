//! 2x2 ball bouncing inside one region
//!
//! Only the previous footprint is erased before the new one is drawn, so
//! the ball never disturbs pixels it did not paint. Speed and color come
//! from the owning task's current [`PriorityLevel`].

use super::Pattern;
use crate::color::{BLACK, Rgb};
use crate::frame::Canvas;
use crate::priority::PriorityLevel;

const BALL_SIZE: i32 = 2;
const MIN_BOUND: f32 = 0.5;
/// Gap between the far bound and the region edge
const FAR_MARGIN: f32 = 1.5;
const BOUNCE_INSET: f32 = 0.1;

/// Position and velocity of a ball, in region-local units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl BallState {
    pub const START: Self = Self {
        x: 4.0,
        y: 4.0,
        vx: 0.3,
        vy: 0.25,
    };
}

impl Default for BallState {
    fn default() -> Self {
        Self::START
    }
}

#[derive(Debug, Clone)]
pub struct QuadrantBall {
    state: BallState,
    speed: f32,
    color: Rgb,
    last_drawn: Option<(i32, i32)>,
}

impl QuadrantBall {
    pub const fn new(level: &PriorityLevel) -> Self {
        Self {
            state: BallState::START,
            speed: level.speed,
            color: level.color,
            last_drawn: None,
        }
    }

    #[must_use]
    pub const fn with_state(mut self, state: BallState) -> Self {
        self.state = state;
        self
    }

    pub const fn state(&self) -> BallState {
        self.state
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Inclusive bounds the ball position is kept within for an extent
    #[allow(clippy::cast_precision_loss)]
    pub fn bounds(extent: usize) -> (f32, f32) {
        (MIN_BOUND, extent as f32 - FAR_MARGIN)
    }

    /// Integrate one axis and reflect it at the bounds.
    ///
    /// Returns true when the velocity was flipped.
    pub fn step_axis(position: &mut f32, velocity: &mut f32, speed: f32, extent: usize) -> bool {
        let (min, max) = Self::bounds(extent);
        *position += *velocity * speed;
        if *position <= min || *position >= max {
            *velocity = -*velocity;
            *position = if *position <= min {
                min + BOUNCE_INSET
            } else {
                max - BOUNCE_INSET
            };
            return true;
        }
        false
    }

    fn paint<C: Canvas + ?Sized>(canvas: &mut C, origin: (i32, i32), color: Rgb) {
        for dy in 0..BALL_SIZE {
            for dx in 0..BALL_SIZE {
                canvas.set_pixel(origin.0 + dx, origin.1 + dy, color);
            }
        }
    }
}

impl Pattern for QuadrantBall {
    fn advance(&mut self, width: usize, height: usize) {
        let speed = self.speed;
        let state = &mut self.state;
        Self::step_axis(&mut state.x, &mut state.vx, speed, width);
        Self::step_axis(&mut state.y, &mut state.vy, speed, height);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        if let Some(previous) = self.last_drawn {
            Self::paint(canvas, previous, BLACK);
        }
        let origin = (self.state.x as i32, self.state.y as i32);
        Self::paint(canvas, origin, self.color);
        self.last_drawn = Some(origin);
    }

    fn apply_level(&mut self, level: &PriorityLevel) {
        self.speed = level.speed;
        self.color = level.color;
    }

    /// Restart from the center. The old footprint is erased on the next draw.
    fn reset(&mut self) {
        self.state = BallState::START;
    }
}
