//! WS2812 pulse-width encoding over a clocked serial line.
//!
//! Every protocol bit becomes one symbol byte. Clocked out MSB first at
//! [`WireTiming::bit_rate_hz`], a symbol is a high pulse followed by low
//! time, and the length of the high pulse tells the LED whether it saw a
//! 0 or a 1. Runs of `0x00` bytes before and/or after the pixel data hold
//! the line low long enough to latch the frame.

use core::iter;

use crate::color::{ChannelOrder, Rgb};
use crate::error::{Error, Result};
use crate::math8::scale_linear;

/// Color channels per pixel on the wire
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Symbol bytes emitted per color byte
pub const SYMBOLS_PER_BYTE: usize = 8;

/// Symbol bytes emitted per pixel
pub const SYMBOLS_PER_PIXEL: usize = CHANNELS_PER_PIXEL * SYMBOLS_PER_BYTE;

/// Value of every reset padding byte
pub const RESET_SYMBOL: u8 = 0x00;

const NS_PER_SECOND: u64 = 1_000_000_000;

/// The two symbol bytes standing for a logical 0 and a logical 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub zero: u8,
    pub one: u8,
}

impl SymbolSet {
    /// `0b1100_0000` / `0b1111_0000`: about 312 ns and 625 ns high at 6.4 MHz.
    pub const WS2812_6M4: Self = Self {
        zero: 0xC0,
        one: 0xF0,
    };

    /// Symbol byte for one protocol bit
    #[inline]
    pub const fn for_bit(self, set: bool) -> u8 {
        if set { self.one } else { self.zero }
    }

    /// High time of a symbol: its leading one bits at the given bit rate.
    pub const fn high_time_ns(symbol: u8, bit_rate_hz: u32) -> u32 {
        if bit_rate_hz == 0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation)]
        let bit_ns = (NS_PER_SECOND / bit_rate_hz as u64) as u32;
        symbol.leading_ones() * bit_ns
    }

    /// Check that the symbols are usable on a line running at `bit_rate_hz`
    pub const fn validate(self, bit_rate_hz: u32, pulse: PulseTiming) -> Result<()> {
        if self.zero == self.one {
            return Err(Error::InvalidConfig {
                reason: "zero and one symbols must differ",
            });
        }
        if self.zero == RESET_SYMBOL || self.one == RESET_SYMBOL {
            return Err(Error::InvalidConfig {
                reason: "symbols must not collide with the reset byte",
            });
        }
        if bit_rate_hz == 0 {
            return Err(Error::InvalidConfig {
                reason: "bit rate must be non-zero",
            });
        }
        let zero_high = Self::high_time_ns(self.zero, bit_rate_hz);
        let one_high = Self::high_time_ns(self.one, bit_rate_hz);
        if zero_high.abs_diff(pulse.zero_high_ns) > pulse.tolerance_ns {
            return Err(Error::InvalidConfig {
                reason: "zero symbol high time outside device tolerance",
            });
        }
        if one_high.abs_diff(pulse.one_high_ns) > pulse.tolerance_ns {
            return Err(Error::InvalidConfig {
                reason: "one symbol high time outside device tolerance",
            });
        }
        Ok(())
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::WS2812_6M4
    }
}

/// Device-side high pulse widths and the accepted deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub zero_high_ns: u32,
    pub one_high_ns: u32,
    pub tolerance_ns: u32,
}

impl PulseTiming {
    pub const WS2812: Self = Self {
        zero_high_ns: 400,
        one_high_ns: 800,
        tolerance_ns: 250,
    };
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::WS2812
    }
}

/// Which ends of the frame receive reset padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPlacement {
    Leading,
    Trailing,
    #[default]
    Both,
}

/// Serial line timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireTiming {
    /// Bus clock; one symbol bit per clock
    pub bit_rate_hz: u32,
    /// Minimum low time the device needs to latch a frame
    pub reset_ns: u32,
    /// Where the reset padding goes
    pub reset: ResetPlacement,
    /// Quiet time enforced by the transport after each write
    pub post_write_delay_us: u32,
}

impl WireTiming {
    pub const WS2812_6M4: Self = Self {
        bit_rate_hz: 6_400_000,
        reset_ns: 50_000,
        reset: ResetPlacement::Both,
        post_write_delay_us: 60,
    };

    /// Duration of one bus bit, truncated to whole nanoseconds
    #[allow(clippy::cast_possible_truncation)]
    pub const fn bit_duration_ns(self) -> u32 {
        if self.bit_rate_hz == 0 {
            return 0;
        }
        (NS_PER_SECOND / self.bit_rate_hz as u64) as u32
    }

    /// Number of zero bytes whose low time strictly exceeds `reset_ns`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn reset_padding_bytes(self) -> usize {
        let bits = (self.reset_ns as u64 * self.bit_rate_hz as u64) / NS_PER_SECOND + 1;
        bits.div_ceil(8) as usize
    }
}

impl Default for WireTiming {
    fn default() -> Self {
        Self::WS2812_6M4
    }
}

/// Pure translation from pixels to the symbol stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    order: ChannelOrder,
    symbols: SymbolSet,
    leading: usize,
    trailing: usize,
}

impl Encoder {
    pub const fn new(order: ChannelOrder, symbols: SymbolSet, timing: WireTiming) -> Self {
        let padding = timing.reset_padding_bytes();
        let (leading, trailing) = match timing.reset {
            ResetPlacement::Leading => (padding, 0),
            ResetPlacement::Trailing => (0, padding),
            ResetPlacement::Both => (padding, padding),
        };
        Self {
            order,
            symbols,
            leading,
            trailing,
        }
    }

    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    pub const fn symbols(&self) -> SymbolSet {
        self.symbols
    }

    pub const fn leading_padding(&self) -> usize {
        self.leading
    }

    pub const fn trailing_padding(&self) -> usize {
        self.trailing
    }

    /// Exact stream length for `pixels` addressed pixels
    pub const fn encoded_len(&self, pixels: usize) -> usize {
        pixels * SYMBOLS_PER_PIXEL + self.leading + self.trailing
    }

    /// Lazily produce the symbol stream for `pixels` at `brightness`
    pub fn stream<'a>(
        &self,
        pixels: &'a [Rgb],
        brightness: u8,
    ) -> impl Iterator<Item = u8> + 'a {
        let order = self.order;
        let symbols = self.symbols;
        let data = pixels
            .iter()
            .flat_map(move |pixel| order.apply(*pixel))
            .map(move |channel| scale_linear(channel, brightness))
            .flat_map(move |byte| {
                (0..SYMBOLS_PER_BYTE)
                    .rev()
                    .map(move |bit| symbols.for_bit(byte & (1 << bit) != 0))
            });

        iter::repeat_n(RESET_SYMBOL, self.leading)
            .chain(data)
            .chain(iter::repeat_n(RESET_SYMBOL, self.trailing))
    }

    /// Encode into `out`, returning the number of bytes written
    pub fn encode_into(&self, pixels: &[Rgb], brightness: u8, out: &mut [u8]) -> Result<usize> {
        let required = self.encoded_len(pixels.len());
        let Some(target) = out.get_mut(..required) else {
            return Err(Error::BufferTooSmall {
                required,
                available: out.len(),
            });
        };

        for (slot, symbol) in target.iter_mut().zip(self.stream(pixels, brightness)) {
            *slot = symbol;
        }
        Ok(required)
    }
}
