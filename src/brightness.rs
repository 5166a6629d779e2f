//! Potentiometer-driven global brightness.

use crate::AnalogSource;

/// Largest value the 12-bit ADC can report.
pub const ADC_MAX: u16 = 4095;

/// Hard safety ceiling on the global brightness factor.
///
/// Full brightness across hundreds of LEDs would exceed the supply
/// current budget, so the ceiling holds even if the curve below changes.
pub const BRIGHTNESS_CEILING: f32 = 0.5;

/// ADC channel the potentiometer is wired to.
pub const BRIGHTNESS_CHANNEL: u8 = 0;

/// Map a raw ADC reading to the global brightness factor.
///
/// Normalizes to `[0, 1]`, squares so the low end of the pot gives fine
/// control, then clamps to [`BRIGHTNESS_CEILING`]. Monotonic in the
/// input; a full-scale reading yields exactly the ceiling.
pub fn brightness_curve(raw: u16) -> f32 {
    let normalized = f32::from(raw.min(ADC_MAX)) / f32::from(ADC_MAX);
    let curved = normalized * normalized;
    if curved > BRIGHTNESS_CEILING {
        BRIGHTNESS_CEILING
    } else {
        curved
    }
}

/// Brightness input bound to one ADC channel.
pub struct BrightnessInput<A: AnalogSource> {
    source: A,
    channel: u8,
}

impl<A: AnalogSource> BrightnessInput<A> {
    /// Bind to the default potentiometer channel.
    pub const fn new(source: A) -> Self {
        Self::on_channel(source, BRIGHTNESS_CHANNEL)
    }

    /// Bind to a specific ADC channel.
    pub const fn on_channel(source: A, channel: u8) -> Self {
        Self { source, channel }
    }

    /// Read one conversion and return the curved, clamped factor.
    ///
    /// Called once per frame; the result is applied uniformly during
    /// render and never persisted.
    pub fn read(&mut self) -> f32 {
        brightness_curve(self.source.read_channel(self.channel))
    }
}
