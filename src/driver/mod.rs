use anyhow::Error;
use log::{debug, info};

use crate::config::Config;

#[cfg(feature = "pi")]
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

#[cfg(feature = "pi")]
const BAUD: u32 = 6_400_000;

/// Byte-level link to the strip controller. Encoding those bytes into the
/// NeoPixel waveform is the controller's job, not ours.
pub trait PixelTransport {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

impl<T: PixelTransport + ?Sized> PixelTransport for &mut T {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error> {
        (**self).transmit(bytes)
    }
}

pub struct SpiTransport {
    #[cfg(feature = "pi")]
    spi: Spi,
}

impl SpiTransport {
    pub fn init(config: &Config) -> Result<Self, Error> {
        info!(
            "Strip: initializing {} pixels on pin {}",
            config.pixel_count,
            config.data_pin().0
        );

        // Set up SPI
        #[cfg(feature = "pi")]
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, BAUD, Mode::Mode0)?;

        Ok(SpiTransport {
            #[cfg(feature = "pi")]
            spi,
        })
    }
}

impl PixelTransport for SpiTransport {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error> {
        debug!("Transmitting {} channel bytes", bytes.len());

        #[cfg(feature = "pi")]
        self.spi.write(bytes)?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "pi"))]
    fn test_host_transport_accepts_bytes() {
        // Off the Pi the transport is a logging no-op, which keeps the
        // binary runnable on a development host.
        let mut transport = SpiTransport::init(&Config::default()).unwrap();
        assert!(transport.transmit(&[1, 2, 3]).is_ok());
    }
}
