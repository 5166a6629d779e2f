//! Color type and scaling helpers.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Scale a single channel by a brightness factor, truncating toward zero.
///
/// The result never exceeds the input channel for factors in `[0, 1]`.
pub fn scale_channel(channel: u8, brightness: f32) -> u8 {
    (f32::from(channel) * brightness) as u8
}

/// Scale all three channels of a color by a brightness factor.
pub fn scale_color(color: Rgb, brightness: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}
