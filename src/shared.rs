//! The one lock-guarded frame that every task draws into.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::color::Rgb;
use crate::frame::{FrameBuffer, IndexRemap};
use crate::region::Region;

/// Full brightness, no attenuation
pub const FULL_BRIGHTNESS: u8 = 255;

/// Everything guarded by the frame lock
#[derive(Debug, Clone)]
pub struct FrameState<const W: usize, const H: usize> {
    pub buffer: FrameBuffer<W, H>,
    pub brightness: u8,
}

/// Frame buffer plus global brightness behind a single mutex.
///
/// `R` is the host's raw mutex (for example `CriticalSectionRawMutex`).
/// Access is closure-scoped: the lock is released when the closure
/// returns, which keeps every critical section short and makes holding the
/// lock across a sleep impossible from safe code. The lock is not
/// reentrant; calling back into the same `SharedFrame` from inside
/// [`lock`](Self::lock) panics.
pub struct SharedFrame<R: RawMutex, const W: usize, const H: usize> {
    inner: Mutex<R, RefCell<FrameState<W, H>>>,
}

impl<R: RawMutex, const W: usize, const H: usize> SharedFrame<R, W, H> {
    /// Create a black frame at full brightness with no defect remap
    pub const fn new() -> Self {
        Self::with_buffer(FrameBuffer::new())
    }

    pub const fn with_buffer(buffer: FrameBuffer<W, H>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(FrameState {
                buffer,
                brightness: FULL_BRIGHTNESS,
            })),
        }
    }

    /// Run `f` with exclusive access to the frame
    pub fn lock<U>(&self, f: impl FnOnce(&mut FrameState<W, H>) -> U) -> U {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn set_pixel(&self, x: i32, y: i32, color: Rgb) {
        self.lock(|state| state.buffer.set_pixel(x, y, color));
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Rgb {
        self.lock(|state| state.buffer.get_pixel(x, y))
    }

    pub fn clear(&self) {
        self.lock(|state| state.buffer.clear());
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.lock(|state| state.brightness = brightness);
    }

    pub fn brightness(&self) -> u8 {
        self.lock(|state| state.brightness)
    }

    pub fn remap(&self) -> IndexRemap {
        self.lock(|state| state.buffer.remap())
    }

    /// Copy the pixels of `region` row by row into `out`.
    ///
    /// Returns how many pixels were written; pixels beyond the end of
    /// `out` are skipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn snapshot_region(&self, region: Region, out: &mut [Rgb]) -> usize {
        let region = region.clipped(W, H);
        self.lock(|state| {
            let coords = (region.y..region.y + region.height)
                .flat_map(|y| (region.x..region.x + region.width).map(move |x| (x, y)));
            let mut written = 0;
            for (slot, (x, y)) in out.iter_mut().zip(coords) {
                *slot = state.buffer.get_pixel(x as i32, y as i32);
                written += 1;
            }
            written
        })
    }
}

impl<R: RawMutex, const W: usize, const H: usize> Default for SharedFrame<R, W, H> {
    fn default() -> Self {
        Self::new()
    }
}
