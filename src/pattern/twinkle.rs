//! Random twinkle
//!
//! Each step adds a few white sparkles at random positions, then fades the
//! whole canvas to 95% so older sparkles die away.

use super::Pattern;
use crate::frame::Canvas;
use crate::math8::{Prng, fade8, qadd8};

const SPARKLES_PER_STEP: usize = 5;
const FADE_NUMERATOR: u8 = 95;
const FADE_DENOMINATOR: u8 = 100;

#[derive(Debug, Clone)]
pub struct TwinklePattern {
    seed: u64,
    rng: Prng,
}

impl TwinklePattern {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Prng::new(seed),
        }
    }
}

impl Pattern for TwinklePattern {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let width = canvas.width();
        let height = canvas.height();
        if width == 0 || height == 0 {
            return;
        }

        for _ in 0..SPARKLES_PER_STEP {
            let x = self.rng.below(width as u32) as i32;
            let y = self.rng.below(height as u32) as i32;
            let brightness = 128 + self.rng.below(128) as u8;
            let add = brightness / 3;

            let mut pixel = canvas.get_pixel(x, y);
            pixel.r = qadd8(pixel.r, add);
            pixel.g = qadd8(pixel.g, add);
            pixel.b = qadd8(pixel.b, add);
            canvas.set_pixel(x, y, pixel);
        }

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let mut pixel = canvas.get_pixel(x, y);
                pixel.r = fade8(pixel.r, FADE_NUMERATOR, FADE_DENOMINATOR);
                pixel.g = fade8(pixel.g, FADE_NUMERATOR, FADE_DENOMINATOR);
                pixel.b = fade8(pixel.b, FADE_NUMERATOR, FADE_DENOMINATOR);
                canvas.set_pixel(x, y, pixel);
            }
        }
    }

    fn reset(&mut self) {
        self.rng = Prng::new(self.seed);
    }
}
