//! Physical-order framebuffer for the cube.
//!
//! The frame holds one GRB byte triple per live LED, already in chain
//! order, so a full mapping pass per frame is not needed. Colors are
//! stored unscaled; global brightness is applied exactly once, in
//! [`CubeFrame::render`].

use crate::color::{Rgb, scale_channel};
use crate::map::{self, LIVE_LED_COUNT};

/// Bytes per LED on the wire.
pub const CHANNELS: usize = 3;

const BUFFER_LEN: usize = LIVE_LED_COUNT * CHANNELS;

/// Framebuffer in compacted physical chain order.
pub struct CubeFrame {
    /// Unscaled GRB bytes, one triple per live LED
    pixels: [u8; BUFFER_LEN],
    /// Brightness-scaled copy handed to the transmitter
    scaled: [u8; BUFFER_LEN],
}

impl CubeFrame {
    /// Create a blank (all black) frame.
    pub const fn new() -> Self {
        Self {
            pixels: [0; BUFFER_LEN],
            scaled: [0; BUFFER_LEN],
        }
    }

    /// Number of LEDs this frame renders.
    pub const fn led_count(&self) -> usize {
        LIVE_LED_COUNT
    }

    /// Zero the whole physical buffer.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write one voxel.
    ///
    /// Out-of-range, unmapped and dead-LED coordinates are silently
    /// dropped; pattern code is expected to occasionally compute
    /// near-boundary values.
    pub fn set_voxel(&mut self, x: usize, y: usize, z: usize, color: Rgb) {
        let Some(slot) = map::physical_slot(x, y, z) else {
            return;
        };
        self.write_slot(slot, color);
    }

    /// Write one LED by its 0-based chain index, with the same dead-LED
    /// compaction and silent-drop policy as [`CubeFrame::set_voxel`].
    pub fn set_led(&mut self, index: usize, color: Rgb) {
        let Some(slot) = map::compact_index(index) else {
            return;
        };
        self.write_slot(slot, color);
    }

    fn write_slot(&mut self, slot: usize, color: Rgb) {
        // WS2812 wire order is GRB
        let at = slot * CHANNELS;
        self.pixels[at] = color.g;
        self.pixels[at + 1] = color.r;
        self.pixels[at + 2] = color.b;
    }

    /// Produce the brightness-scaled byte stream for transmission.
    ///
    /// Each channel is scaled by `floor(channel * brightness)`; the
    /// result never exceeds the stored value. The returned slice stays
    /// valid until the next call.
    pub fn render(&mut self, brightness: f32) -> &[u8] {
        let brightness = brightness.clamp(0.0, 1.0);
        for (out, &raw) in self.scaled.iter_mut().zip(self.pixels.iter()) {
            *out = scale_channel(raw, brightness);
        }
        &self.scaled
    }

    /// Raw unscaled buffer, mainly for inspection in tests.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl Default for CubeFrame {
    fn default() -> Self {
        Self::new()
    }
}
