//! Breathing border
//!
//! Ramps the green channel of the outermost ring of pixels up and down,
//! keeping the other channels intact.

use super::Pattern;
use crate::frame::Canvas;

const STEP: i16 = 5;
const MIN_LEVEL: i16 = 5;
const MAX_LEVEL: i16 = 250;

#[derive(Debug, Clone)]
pub struct BreathPattern {
    level: i16,
    direction: i16,
}

impl Default for BreathPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathPattern {
    pub const fn new() -> Self {
        Self {
            level: 0,
            direction: 1,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn level(&self) -> u8 {
        self.level as u8
    }

    fn set_green<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, level: u8) {
        let mut pixel = canvas.get_pixel(x, y);
        pixel.g = level;
        canvas.set_pixel(x, y, pixel);
    }
}

impl Pattern for BreathPattern {
    fn advance(&mut self, _width: usize, _height: usize) {
        self.level += self.direction * STEP;
        if self.level >= MAX_LEVEL {
            self.level = MAX_LEVEL;
            self.direction = -1;
        } else if self.level <= MIN_LEVEL {
            self.level = MIN_LEVEL;
            self.direction = 1;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;
        if width == 0 || height == 0 {
            return;
        }
        let level = self.level();

        for x in 0..width {
            Self::set_green(canvas, x, 0, level);
            Self::set_green(canvas, x, height - 1, level);
        }
        for y in 1..height - 1 {
            Self::set_green(canvas, 0, y, level);
            Self::set_green(canvas, width - 1, y, level);
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
