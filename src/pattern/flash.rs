//! Flash burst
//!
//! Ten frames of solid yellow fading out in steps of 25. Meant to be run as
//! a short-lived task that owns the whole matrix while it plays.

use super::Pattern;
use crate::color::Rgb;
use crate::frame::Canvas;

pub const FLASH_FRAMES: u8 = 10;
const FADE_STEP: u8 = 25;

#[derive(Debug, Clone, Default)]
pub struct FlashBurst {
    /// Number of frames started so far
    step: u8,
}

impl FlashBurst {
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    /// Level of frame `frame`, counting from 0
    pub const fn frame_level(frame: u8) -> u8 {
        255u8.saturating_sub(frame.saturating_mul(FADE_STEP))
    }

    /// True once every frame has been drawn
    pub const fn is_finished(&self) -> bool {
        self.step >= FLASH_FRAMES
    }
}

impl Pattern for FlashBurst {
    fn advance(&mut self, _width: usize, _height: usize) {
        self.step = self.step.saturating_add(1);
    }

    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        if self.step == 0 || self.step > FLASH_FRAMES {
            return;
        }
        let level = Self::frame_level(self.step - 1);
        canvas.fill(Rgb {
            r: level,
            g: level,
            b: 0,
        });
    }

    fn reset(&mut self) {
        self.step = 0;
    }
}
