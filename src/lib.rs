#![no_std]

mod log;

pub mod color;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod frame_scheduler;
pub mod math8;
pub mod pattern;
pub mod priority;
pub mod quadrant;
pub mod region;
pub mod shared;
pub mod task;
pub mod transport;

pub use encoder::{Encoder, PulseTiming, ResetPlacement, SymbolSet, WireTiming};
pub use error::{Error, Result};
pub use frame::{Canvas, FrameBuffer, IndexRemap};
pub use frame_scheduler::FrameScheduler;
pub use pattern::{Pattern, PatternId, PatternSlot};
pub use priority::{
    EventChannel, EventReceiver, EventSender, Priority, PriorityCycle, PriorityEvent,
    PriorityLevel, button_pressed,
};
pub use region::{Region, RegionView};
pub use shared::{FrameState, SharedFrame};
pub use task::{AnimationTask, DisplayConfig, DisplayStats, DisplayTask, TickResult};
pub use transport::SpiTransport;

pub use color::{ChannelOrder, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED transport trait
///
/// Implement this trait to support different hardware platforms.
/// The display task is generic over this trait.
pub trait Transport {
    /// Bus error, reported through the log when a frame is dropped
    type Error: core::fmt::Debug;

    /// Whether the device can accept frames. Checked once during init.
    fn is_ready(&mut self) -> bool {
        true
    }

    /// Write one encoded frame. Must not retry.
    fn write(&mut self, symbols: &[u8]) -> core::result::Result<(), Self::Error>;
}
