use std::fmt;

use anyhow::{ensure, Error};
use log::debug;

use crate::config::Config;
use crate::driver::PixelTransport;
use crate::pixel::{ChannelOrder, Pixel};

pub const PIXEL_COUNT: usize = 24;

/// Errors surfaced by the pixel buffer.
#[derive(Debug)]
pub enum StripError {
    /// A pixel index past the end of the strip. The dispatcher never
    /// produces one, so hitting this is a programming error.
    OutOfRange { index: usize, len: usize },
    /// The strip controller could not be reached. Not retried.
    DeviceUnavailable(Error),
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::OutOfRange { index, len } => {
                write!(f, "pixel {} is out of range (the strip has {} pixels)", index, len)
            }
            StripError::DeviceUnavailable(source) => {
                write!(f, "LED transport unavailable: {}", source)
            }
        }
    }
}

impl std::error::Error for StripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StripError::OutOfRange { .. } => None,
            StripError::DeviceUnavailable(source) => Some(source.as_ref()),
        }
    }
}

/// In-memory image of the strip. All mutation happens here; nothing
/// reaches the wire until `show`.
pub struct PixelStrip<T: PixelTransport> {
    pixels: Vec<Pixel>,
    order: ChannelOrder,
    brightness: f32,
    dirty: bool,
    transport: T,
}

impl<T: PixelTransport> PixelStrip<T> {
    /// Build the buffer from the loaded config. The length is fixed from
    /// here on.
    pub fn configure(transport: T, config: &Config) -> Result<Self, Error> {
        ensure!(
            (0.0..=1.0).contains(&config.brightness),
            "brightness {} is outside 0.0..=1.0",
            config.brightness
        );
        ensure!(config.pixel_count > 0, "the strip needs at least one pixel");

        Ok(PixelStrip {
            pixels: vec![Pixel::BLACK; config.pixel_count],
            order: config.channel_order,
            brightness: config.brightness,
            dirty: false,
            transport,
        })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pixel(&self, index: usize) -> Result<Pixel, StripError> {
        self.pixels.get(index).copied().ok_or(StripError::OutOfRange {
            index,
            len: self.pixels.len(),
        })
    }

    /// Set every pixel to the same color.
    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(color);
        self.dirty = true;
    }

    pub fn set(&mut self, index: usize, color: Pixel) -> Result<(), StripError> {
        let len = self.pixels.len();
        let slot = self
            .pixels
            .get_mut(index)
            .ok_or(StripError::OutOfRange { index, len })?;
        *slot = color;
        self.dirty = true;
        Ok(())
    }

    /// Blank the buffer. Takes effect on the next `show`.
    pub fn clear(&mut self) {
        self.fill(Pixel::BLACK);
    }

    /// Serialize the whole buffer and push it to the transport in one
    /// write. Always transmits, mutated or not.
    pub fn show(&mut self) -> Result<(), StripError> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&self.order.ordered(pixel.scaled(self.brightness)));
        }

        debug!("Flushing {} pixels ({} bytes)", self.pixels.len(), bytes.len());

        self.transport
            .transmit(&bytes)
            .map_err(StripError::DeviceUnavailable)?;

        self.dirty = false;
        Ok(())
    }
}
