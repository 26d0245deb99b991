//! Error type shared by the whole rendering core.

use derive_more::{Display, Error};

/// Failures reported to the host.
///
/// Out-of-range pixel coordinates are deliberately absent: they are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// The serial bus did not report ready during [`init`](crate::DisplayTask::init).
    #[display("LED transport is not ready")]
    DeviceNotReady,
    /// The underlying bus write failed. The frame is dropped.
    #[display("LED transport write failed")]
    Transport,
    /// The symbol scratch buffer cannot hold an encoded frame.
    #[display("symbol buffer too small: need {required} bytes, have {available}")]
    BufferTooSmall { required: usize, available: usize },
    /// A configuration value is unusable.
    #[display("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
