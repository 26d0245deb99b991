//! Priority activity bars
//!
//! Each priority level owns a pair of rows. Activity spikes to full when a
//! simulated wakeup fires and decays by 10% per step; the lit part of the
//! bar is proportional to the current activity.

use super::Pattern;
use crate::color::Rgb;
use crate::frame::Canvas;
use crate::math8::{Prng, fade8, scale_linear};

/// Number of visualised priority levels
pub const PRIORITY_LEVELS: usize = 8;

const ROWS_PER_LEVEL: usize = 2;
const DECAY_NUMERATOR: u8 = 9;
const DECAY_DENOMINATOR: u8 = 10;
const WAKEUP_BASE: u32 = 50;
const WAKEUP_STEP: u32 = 30;
const DIM_DIVISOR: u8 = 10;

/// Row colors, most urgent level first
const LEVEL_COLORS: [Rgb; PRIORITY_LEVELS] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 255, g: 128, b: 0 },
    Rgb { r: 255, g: 255, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 255, b: 255 },
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 128, g: 0, b: 255 },
    Rgb { r: 255, g: 0, b: 255 },
];

/// Lit length of a bar: `floor(activity * width / 255)`
pub const fn bar_length(activity: u8, width: usize) -> usize {
    activity as usize * width / 255
}

#[derive(Debug, Clone)]
pub struct PriorityBars {
    seed: u64,
    rng: Prng,
    activity: [u8; PRIORITY_LEVELS],
}

impl PriorityBars {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Prng::new(seed),
            activity: [0; PRIORITY_LEVELS],
        }
    }

    pub const fn activity(&self) -> &[u8; PRIORITY_LEVELS] {
        &self.activity
    }

    /// Force the activity of one level; indices past the table are ignored
    pub fn set_activity(&mut self, level: usize, activity: u8) {
        if let Some(slot) = self.activity.get_mut(level) {
            *slot = activity;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw_level<C: Canvas + ?Sized>(canvas: &mut C, level: usize, color: Rgb, activity: u8) {
        let width = canvas.width();
        let lit = bar_length(activity, width);
        let active = Rgb {
            r: scale_linear(color.r, activity),
            g: scale_linear(color.g, activity),
            b: scale_linear(color.b, activity),
        };
        let dim = Rgb {
            r: color.r / DIM_DIVISOR,
            g: color.g / DIM_DIVISOR,
            b: color.b / DIM_DIVISOR,
        };

        let first_row = level * ROWS_PER_LEVEL;
        for row in first_row..first_row + ROWS_PER_LEVEL {
            for x in 0..width {
                let pixel = if x < lit { active } else { dim };
                canvas.set_pixel(x as i32, row as i32, pixel);
            }
        }
    }
}

impl Pattern for PriorityBars {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, _width: usize, _height: usize) {
        for activity in &mut self.activity {
            *activity = fade8(*activity, DECAY_NUMERATOR, DECAY_DENOMINATOR);
        }
        for (level, activity) in self.activity.iter_mut().enumerate() {
            let threshold = WAKEUP_BASE + level as u32 * WAKEUP_STEP;
            if self.rng.below(255) > threshold {
                *activity = 255;
            }
        }
    }

    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        for (level, (color, activity)) in LEVEL_COLORS.iter().zip(self.activity).enumerate() {
            if level * ROWS_PER_LEVEL >= canvas.height() {
                break;
            }
            Self::draw_level(canvas, level, *color, activity);
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.seed);
    }
}
