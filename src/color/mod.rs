mod order;

pub use order::ChannelOrder;
pub use smart_leds::hsv::hsv2rgb;
use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// The zero pixel: every channel off.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
