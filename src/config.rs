use std::path::Path;

use anyhow::{bail, Error};
use log::debug;
use pi_pinout::{GpioPin, PhysicalPin, WiringPiPin};
use serde::{Deserialize, Serialize};

use crate::pixel::ChannelOrder;
use crate::strip::PIXEL_COUNT;

/// BCM pins that can clock NeoPixel data on a Pi.
const DATA_PINS: [u8; 4] = [10, 12, 18, 21];

const CONFIG_PATH: &str = "config.ron";

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub pin: Pin,
    pub pixel_count: usize,
    pub channel_order: ChannelOrder,
    pub brightness: f32,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub enum Pin {
    Physical(PhysicalPin),
    Gpio(GpioPin),
    WiringPi(WiringPiPin),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // NeoPixels must be connected to GPIO10, GPIO12, GPIO18 or
            // GPIO21 to work
            pin: Pin::Gpio(GpioPin(18)),
            pixel_count: PIXEL_COUNT,
            channel_order: ChannelOrder::Grb,
            brightness: 1.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> Result<Config, Error> {
        if !Path::new(path).exists() {
            debug!("No {} found, using the default strip setup", path);
            return Ok(Config::default());
        }

        let config = std::fs::read_to_string(path)?;
        let config: Config = ron::from_str(&config)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        let GpioPin(pin) = self.data_pin();
        if !DATA_PINS.contains(&pin) {
            bail!(
                "pin {} cannot drive NeoPixel data (use GPIO 10, 12, 18 or 21)",
                pin
            );
        }

        Ok(())
    }

    /// The configured pin as a BCM GPIO number.
    pub fn data_pin(&self) -> GpioPin {
        // Turn this pin into a GPIO pin
        match self.pin {
            Pin::Physical(pin) => pin.into(),
            Pin::Gpio(pin) => pin,
            Pin::WiringPi(pin) => pin.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        // Write an example config file
        let path = std::env::temp_dir().join("rusty-pixels-load-test.ron");
        std::fs::write(
            &path,
            r#"(
    pin: Gpio(GpioPin(12)),
    pixel_count: 24,
    channel_order: Grb,
    brightness: 0.5,
)"#,
        )
        .unwrap();

        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(
            config,
            Config {
                pin: Pin::Gpio(GpioPin(12)),
                pixel_count: 24,
                channel_order: ChannelOrder::Grb,
                brightness: 0.5,
            }
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_from("does-not-exist.ron").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(GpioPin(18), config.data_pin());
    }

    #[test]
    fn test_rejects_pins_without_neopixel_support() {
        let path = std::env::temp_dir().join("rusty-pixels-bad-pin-test.ron");
        std::fs::write(
            &path,
            r#"(
    pin: Gpio(GpioPin(4)),
    pixel_count: 24,
    channel_order: Grb,
    brightness: 1.0,
)"#,
        )
        .unwrap();

        assert!(Config::load_from(path.to_str().unwrap()).is_err());
    }
}
