use crate::color::Rgb;

/// Order in which a device expects the three color bytes on the wire.
///
/// WS2812 datasheets specify GRB. Some matrices ship with BGR-wired dies,
/// so the order is configuration rather than a hardwired constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    Rgb,
    Rbg,
    #[default]
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ChannelOrder {
    /// Reorder a logical color into wire order.
    pub const fn apply(self, color: Rgb) -> [u8; 3] {
        let Rgb { r, g, b } = color;
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }
}
