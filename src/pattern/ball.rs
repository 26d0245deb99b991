//! Bouncing ball over the whole canvas
//!
//! A 3x3 ball that sets the blue channel of whatever is under it, leaving
//! red and green alone so it can ride on top of another pattern.

use super::Pattern;
use crate::frame::Canvas;

const START_POSITION: f32 = 8.0;
const START_VELOCITY: (f32, f32) = (0.3, 0.2);
/// Distance kept between the ball center and the canvas edge
const EDGE_MARGIN: f32 = 1.0;
/// Position used after a bounce, just inside the margin
const BOUNCE_INSET: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct BallPattern {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

impl Default for BallPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl BallPattern {
    pub const fn new() -> Self {
        Self {
            x: START_POSITION,
            y: START_POSITION,
            vx: START_VELOCITY.0,
            vy: START_VELOCITY.1,
        }
    }

    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub const fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    /// Move one axis and reflect it off `[EDGE_MARGIN, extent - 2]`
    #[allow(clippy::cast_precision_loss)]
    fn step_axis(position: &mut f32, velocity: &mut f32, extent: usize) {
        let max = extent as f32 - 2.0;
        *position += *velocity;
        if *position <= EDGE_MARGIN || *position >= max {
            *velocity = -*velocity;
            *position = if *position <= EDGE_MARGIN {
                EDGE_MARGIN + BOUNCE_INSET
            } else {
                max - BOUNCE_INSET
            };
        }
    }
}

impl Pattern for BallPattern {
    fn advance(&mut self, width: usize, height: usize) {
        Self::step_axis(&mut self.x, &mut self.vx, width);
        Self::step_axis(&mut self.y, &mut self.vy, height);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let center_x = (self.x + 0.5) as i32;
        let center_y = (self.y + 0.5) as i32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (px, py) = (center_x + dx, center_y + dy);
                let mut pixel = canvas.get_pixel(px, py);
                pixel.b = 255;
                canvas.set_pixel(px, py, pixel);
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
