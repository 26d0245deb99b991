//! Scrolling sine wave
//!
//! One full sine period spans the width of the canvas; the wave moves one
//! column per step.

use core::f32::consts::TAU;

use super::Pattern;
use crate::color::Rgb;
use crate::frame::Canvas;

#[derive(Debug, Clone, Default)]
pub struct WavePattern {
    offset: usize,
}

impl WavePattern {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Channel level for a column at `position` of a `width`-wide wave
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn level(position: usize, width: usize) -> u8 {
        if width == 0 {
            return 0;
        }
        let phase = TAU * (position % width) as f32 / width as f32;
        (128.0 + 127.0 * libm::sinf(phase)) as u8
    }
}

impl Pattern for WavePattern {
    fn advance(&mut self, width: usize, _height: usize) {
        if width > 0 {
            self.offset = (self.offset + 1) % width;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let width = canvas.width();
        for y in 0..canvas.height() {
            for x in 0..width {
                let level = Self::level(x + self.offset, width);
                canvas.set_pixel(
                    x as i32,
                    y as i32,
                    Rgb {
                        r: level,
                        g: level,
                        b: 0,
                    },
                );
            }
        }
    }

    fn reset(&mut self) {
        self.offset = 0;
    }
}
