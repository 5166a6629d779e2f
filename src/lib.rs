#![no_std]

pub mod brightness;
pub mod color;
pub mod command;
pub mod frame;
pub mod map;
pub mod pattern;
pub mod scheduler;
pub mod transmit;

pub use brightness::{BrightnessInput, brightness_curve};
pub use command::{CommandQueue, CommandReceiver, CommandSender, CubeCommand};
pub use frame::CubeFrame;
pub use map::{CUBE_SIZE, LED_COUNT, LIVE_LED_COUNT};
pub use pattern::{Pattern, PatternId, PatternSlot};
pub use scheduler::{CubeScheduler, FrameResult};
pub use transmit::{Transmitter, TxError};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract analog input trait
///
/// Implement this trait over the platform ADC. The brightness pipeline
/// reads one conversion per frame through it.
pub trait AnalogSource {
    /// Read one 12-bit conversion (0..=4095) from the given channel
    fn read_channel(&mut self, channel: u8) -> u16;
}

/// Abstract byte-serial transport trait
///
/// Implement this trait over the peripheral that shifts encoded symbol
/// bytes onto the LED data line (an SPI TX FIFO on most platforms).
/// The transmitter is generic over this trait.
pub trait WireBus {
    /// Whether the transport can accept another byte right now
    fn is_ready(&self) -> bool;

    /// Queue one byte for transmission
    ///
    /// Only called after `is_ready` returned true.
    fn push(&mut self, byte: u8);

    /// Whether the transport is still shifting bits out
    fn is_busy(&self) -> bool;

    /// Disable and re-enable the transport to recover from a stall
    fn reset(&mut self);
}
