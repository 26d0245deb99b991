//! Rainbow sweep
//!
//! Spreads one full hue circle across the canvas width and scrolls it by
//! two hue steps per tick.

use super::Pattern;
use crate::color::{Hsv, hsv2rgb};
use crate::frame::Canvas;

const HUE_STEP: u8 = 2;

#[derive(Debug, Clone)]
pub struct RainbowSweep {
    offset: u8,
    saturation: u8,
    value: u8,
}

impl Default for RainbowSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowSweep {
    pub const fn new() -> Self {
        Self {
            offset: 0,
            saturation: 255,
            value: 255,
        }
    }

    /// Set the saturation
    #[must_use]
    pub const fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the brightness value
    #[must_use]
    pub const fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    /// Hue of column `x` on a `width`-wide canvas
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hue_at(&self, x: usize, width: usize) -> u8 {
        if width == 0 {
            return self.offset;
        }
        ((x * 255 / width) as u8).wrapping_add(self.offset)
    }
}

impl Pattern for RainbowSweep {
    fn advance(&mut self, _width: usize, _height: usize) {
        self.offset = self.offset.wrapping_add(HUE_STEP);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let width = canvas.width();
        for x in 0..width {
            let color = hsv2rgb(Hsv {
                hue: self.hue_at(x, width),
                sat: self.saturation,
                val: self.value,
            });
            for y in 0..canvas.height() {
                canvas.set_pixel(x as i32, y as i32, color);
            }
        }
    }

    fn reset(&mut self) {
        self.offset = 0;
    }
}
