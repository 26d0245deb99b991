//! Pixel storage for a zigzag-wired matrix.
//!
//! The buffer is kept in physical order: slot `i` is the color for the
//! `i`-th LED on the data line. Logical `(x, y)` coordinates are translated
//! through the serpentine mapping and then through an optional
//! [`IndexRemap`] before they touch storage.

use crate::color::{BLACK, Rgb};
use crate::error::{Error, Result};
use crate::region::{Region, RegionView};

/// Anything a pattern can draw on.
///
/// Coordinates are signed so that motion code can compute positions that
/// land off the edge without extra branches; such writes are dropped and
/// such reads return black.
pub trait Canvas {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    fn get_pixel(&self, x: i32, y: i32) -> Rgb;

    /// Paint every pixel of the canvas
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn fill(&mut self, color: Rgb) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}

/// Second-stage index translation applied after the serpentine mapping.
///
/// `Shift` rotates every slot down by `offset`, moving logical pixels off
/// the tail of the chain. The wrapped-around slots are never sent to the
/// device, so a strip whose head LED is dead can still be driven with
/// logical pixel 1 landing on the first working LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexRemap {
    #[default]
    Identity,
    Shift { offset: usize },
}

impl IndexRemap {
    /// Translate a serpentine index into a storage slot for a chain of `len`
    pub const fn apply(self, index: usize, len: usize) -> usize {
        match self {
            Self::Identity => index,
            Self::Shift { offset } => {
                if len == 0 {
                    return index;
                }
                (index + len - offset % len) % len
            }
        }
    }

    /// Number of leading slots that are actually clocked out
    pub const fn addressed(self, len: usize) -> usize {
        match self {
            Self::Identity => len,
            Self::Shift { offset } => len.saturating_sub(offset),
        }
    }
}

/// Fixed-size `W` x `H` pixel grid in wiring order
#[derive(Debug, Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    slots: [[Rgb; W]; H],
    remap: IndexRemap,
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Total number of pixels
    pub const LEN: usize = W * H;

    /// Create a black buffer with no defect remapping
    pub const fn new() -> Self {
        Self {
            slots: [[BLACK; W]; H],
            remap: IndexRemap::Identity,
        }
    }

    /// Create a black buffer with a defect remap.
    ///
    /// A shift that would skip the whole chain is rejected.
    pub const fn with_remap(remap: IndexRemap) -> Result<Self> {
        if let IndexRemap::Shift { offset } = remap {
            if offset >= W * H {
                return Err(Error::InvalidConfig {
                    reason: "remap offset must be smaller than the pixel count",
                });
            }
        }
        Ok(Self {
            slots: [[BLACK; W]; H],
            remap,
        })
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    pub const fn remap(&self) -> IndexRemap {
        self.remap
    }

    /// Serpentine index of `(x, y)`: even rows run left to right, odd rows
    /// right to left.
    pub const fn serpentine_index(x: usize, y: usize) -> Option<usize> {
        if x >= W || y >= H {
            return None;
        }
        let column = if y % 2 == 0 { x } else { W - 1 - x };
        Some(y * W + column)
    }

    /// Storage slot for a logical coordinate, after remapping
    pub fn slot_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let index = Self::serpentine_index(x, y)?;
        Some(self.remap.apply(index, Self::LEN))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let Some(slot) = self.slot_of(x, y) else {
            return;
        };
        if let Some(pixel) = self.slots.as_flattened_mut().get_mut(slot) {
            *pixel = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Rgb {
        self.slot_of(x, y)
            .and_then(|slot| self.slots.as_flattened().get(slot).copied())
            .unwrap_or(BLACK)
    }

    pub fn clear(&mut self) {
        for row in &mut self.slots {
            row.fill(BLACK);
        }
    }

    /// All slots in physical order
    pub fn slots(&self) -> &[Rgb] {
        self.slots.as_flattened()
    }

    /// Slots that are clocked out to the device, in scan order
    pub fn addressed(&self) -> &[Rgb] {
        let slots = self.slots.as_flattened();
        let count = self.remap.addressed(slots.len());
        &slots[..count]
    }

    /// Bounds-checked window over `region`
    pub fn view(&mut self, region: Region) -> RegionView<'_, W, H> {
        RegionView::new(self, region)
    }
}

impl<const W: usize, const H: usize> Canvas for FrameBuffer<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        FrameBuffer::set_pixel(self, x, y, color);
    }

    fn get_pixel(&self, x: i32, y: i32) -> Rgb {
        FrameBuffer::get_pixel(self, x, y)
    }
}
