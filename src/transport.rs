//! Symbol stream output over an `embedded-hal` SPI bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiBus;

use crate::Transport;
use crate::encoder::WireTiming;

/// Drives the LED data line from the MOSI pin of a SPI bus.
///
/// The bus must be configured by the host for 8-bit words, MSB first, at
/// [`WireTiming::bit_rate_hz`]. After every write the line is left idle for
/// the configured post-write delay so the next frame cannot start before
/// the LEDs have latched.
pub struct SpiTransport<SPI, D> {
    spi: SPI,
    delay: D,
    post_write_delay_us: u32,
}

impl<SPI, D> SpiTransport<SPI, D>
where
    SPI: SpiBus<u8>,
    D: DelayNs,
{
    pub const fn new(spi: SPI, delay: D, timing: &WireTiming) -> Self {
        Self {
            spi,
            delay,
            post_write_delay_us: timing.post_write_delay_us,
        }
    }

    /// Give the bus and delay back to the host
    pub fn release(self) -> (SPI, D) {
        (self.spi, self.delay)
    }
}

impl<SPI, D> Transport for SpiTransport<SPI, D>
where
    SPI: SpiBus<u8>,
    D: DelayNs,
{
    type Error = SPI::Error;

    fn write(&mut self, symbols: &[u8]) -> Result<(), Self::Error> {
        let result = self
            .spi
            .write(symbols)
            .and_then(|()| self.spi.flush());
        self.delay.delay_us(self.post_write_delay_us);
        result
    }
}
