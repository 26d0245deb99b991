use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};

use super::TickResult;
use crate::Transport;
use crate::color::ChannelOrder;
use crate::encoder::{Encoder, PulseTiming, SymbolSet, WireTiming};
use crate::error::{Error, Result};
use crate::frame_scheduler::{DEFAULT_DISPLAY_PERIOD, FrameScheduler};
use crate::log::log;
use crate::priority::Priority;
use crate::shared::SharedFrame;

/// Everything the flusher needs to know about the device and its cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    pub order: ChannelOrder,
    pub symbols: SymbolSet,
    pub wire: WireTiming,
    pub pulse: PulseTiming,
    pub frame_duration: Duration,
    /// Should be more urgent than every animation task
    pub priority: Priority,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        order: ChannelOrder::Grb,
        symbols: SymbolSet::WS2812_6M4,
        wire: WireTiming::WS2812_6M4,
        pulse: PulseTiming::WS2812,
        frame_duration: DEFAULT_DISPLAY_PERIOD,
        priority: Priority(1),
    };

    pub const fn encoder(&self) -> Encoder {
        Encoder::new(self.order, self.symbols, self.wire)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Flush counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayStats {
    pub frames_sent: u32,
    pub frames_dropped: u32,
}

/// Single consumer of the shared frame.
///
/// Encodes the whole frame into a `BUF`-byte scratch buffer and writes it
/// out while holding the lock, so no producer can change a pixel halfway
/// through a frame.
pub struct DisplayTask<'a, T, R: RawMutex, const W: usize, const H: usize, const BUF: usize> {
    frame: &'a SharedFrame<R, W, H>,
    transport: T,
    config: DisplayConfig,
    encoder: Encoder,
    scratch: [u8; BUF],
    scheduler: FrameScheduler,
    stats: DisplayStats,
}

impl<'a, T, R, const W: usize, const H: usize, const BUF: usize> DisplayTask<'a, T, R, W, H, BUF>
where
    T: Transport,
    R: RawMutex,
{
    pub fn new(frame: &'a SharedFrame<R, W, H>, transport: T, config: &DisplayConfig) -> Self {
        Self {
            frame,
            transport,
            config: *config,
            encoder: config.encoder(),
            scratch: [0; BUF],
            scheduler: FrameScheduler::new(config.frame_duration),
            stats: DisplayStats::default(),
        }
    }

    /// Validate the configuration, check the device and blank the matrix.
    ///
    /// On error rendering should stay disabled; the host decides whether
    /// that is fatal. A failed blanking write only drops that frame.
    pub fn init(&mut self) -> Result<()> {
        self.config
            .symbols
            .validate(self.config.wire.bit_rate_hz, self.config.pulse)?;

        let required = self
            .encoder
            .encoded_len(self.frame.remap().addressed(W * H));
        if required > BUF {
            log!(
                "[DisplayTask.init] scratch buffer too small: {} < {}",
                BUF,
                required
            );
            return Err(Error::BufferTooSmall {
                required,
                available: BUF,
            });
        }

        if !self.transport.is_ready() {
            log!("[DisplayTask.init] LED transport not ready");
            return Err(Error::DeviceNotReady);
        }

        self.frame.clear();
        if self.flush().is_err() {
            log!("[DisplayTask.init] blanking frame dropped");
            self.stats.frames_dropped = self.stats.frames_dropped.wrapping_add(1);
        }
        log!("[DisplayTask.init] {}x{} matrix ready", W, H);
        Ok(())
    }

    /// Encode the frame and write it out, returning the bytes sent
    pub fn flush(&mut self) -> Result<usize> {
        let Self {
            frame,
            transport,
            encoder,
            scratch,
            ..
        } = self;

        frame.lock(|state| {
            let len = encoder.encode_into(
                state.buffer.addressed(),
                state.brightness,
                scratch.as_mut_slice(),
            )?;
            let stream = scratch.get(..len).ok_or(Error::BufferTooSmall {
                required: len,
                available: BUF,
            })?;
            transport.write(stream).map_err(|err| {
                log!("[DisplayTask.flush] transport write failed: {:?}", err);
                Error::Transport
            })?;
            Ok(len)
        })
    }

    /// Run one loop iteration. A failed flush drops the frame.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        match self.flush() {
            Ok(_) => self.stats.frames_sent = self.stats.frames_sent.wrapping_add(1),
            Err(_) => self.stats.frames_dropped = self.stats.frames_dropped.wrapping_add(1),
        }
        TickResult::from_frame(self.scheduler.tick(now), None)
    }

    pub const fn stats(&self) -> DisplayStats {
        self.stats
    }

    pub const fn priority(&self) -> Priority {
        self.config.priority
    }

    pub const fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
