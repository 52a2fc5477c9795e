use serde::{Deserialize, Serialize};

/// A single RGB pixel. Channels are 8-bit with no alpha; brightness is a
/// strip-wide scalar applied at flush time, never stored per pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel {
        red: 0,
        green: 0,
        blue: 0,
    };

    pub const WHITE: Pixel = Pixel {
        red: 255,
        green: 255,
        blue: 255,
    };

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// Scale every channel by the strip brightness, rounding to the
    /// nearest step and clamping to the 8-bit range.
    pub fn scaled(self, brightness: f32) -> Pixel {
        let scale = |channel: u8| (f32::from(channel) * brightness).round().clamp(0.0, 255.0) as u8;

        Pixel {
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
        }
    }
}

/// The byte order the strip controller expects on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
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
    /// A pixel's channels rearranged into wire order.
    pub fn ordered(self, pixel: Pixel) -> [u8; 3] {
        let Pixel { red, green, blue } = pixel;

        match self {
            ChannelOrder::Rgb => [red, green, blue],
            ChannelOrder::Rbg => [red, blue, green],
            ChannelOrder::Grb => [green, red, blue],
            ChannelOrder::Gbr => [green, blue, red],
            ChannelOrder::Brg => [blue, red, green],
            ChannelOrder::Bgr => [blue, green, red],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_full_brightness_is_identity() {
        let pixel = Pixel::new(10, 128, 255);
        assert_eq!(pixel, pixel.scaled(1.0));
    }

    #[test]
    fn test_scaled_rounds_to_nearest() {
        // 255 * 0.5 = 127.5 rounds up
        assert_eq!(Pixel::new(128, 64, 0), Pixel::new(255, 128, 0).scaled(0.5));
    }

    #[test]
    fn test_scaled_zero_blanks_the_pixel() {
        assert_eq!(Pixel::BLACK, Pixel::WHITE.scaled(0.0));
    }

    #[test]
    fn test_grb_order() {
        let wire = ChannelOrder::Grb.ordered(Pixel::new(10, 20, 30));
        assert_eq!([20, 10, 30], wire);
    }

    #[test]
    fn test_all_orders_keep_the_same_channels() {
        let pixel = Pixel::new(1, 2, 3);

        for order in [
            ChannelOrder::Rgb,
            ChannelOrder::Rbg,
            ChannelOrder::Grb,
            ChannelOrder::Gbr,
            ChannelOrder::Brg,
            ChannelOrder::Bgr,
        ] {
            let mut wire = order.ordered(pixel);
            wire.sort_unstable();
            assert_eq!([1, 2, 3], wire);
        }
    }
}
