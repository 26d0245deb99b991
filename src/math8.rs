//! 8-bit integer helpers used by the encoder and the patterns.

/// Scale an 8-bit channel by `scale / 255` with integer truncation.
///
/// `scale == 255` is the identity and the result never decreases as
/// `scale` grows.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_linear(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 255) as u8
}

/// Saturating 8-bit add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Multiply by `numerator / denominator`, truncating.
///
/// Used for the fixed fade factors (0.95, 0.9) applied every tick.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fade8(value: u8, numerator: u8, denominator: u8) -> u8 {
    if denominator == 0 {
        return 0;
    }
    ((value as u16 * numerator as u16) / denominator as u16) as u8
}

/// Small deterministic pseudo-random source for sparkle-style patterns.
///
/// SplitMix64 stepping, folded down to 32 bits.
#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as u32
    }

    /// Uniform-ish value in `0..bound`. Returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}
