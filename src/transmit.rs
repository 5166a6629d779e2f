//! WS2812 wire-protocol encoder and transmitter.
//!
//! Each logical bit is expanded into a 3-byte symbol on the underlying
//! byte-serial transport: `110` for a one, `100` for a zero, padded with
//! two idle bytes so the pulse rate matches the chain's timing window.
//! All waiting on the transport is a bounded iteration count, never an
//! unbounded block: a stuck peripheral costs one frame, not the loop.

use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::WireBus;
use crate::map::LIVE_LED_COUNT;

/// Symbol byte for a logical 1 bit (`110`).
const SYMBOL_ONE: u8 = 0x06;

/// Symbol byte for a logical 0 bit (`100`).
const SYMBOL_ZERO: u8 = 0x04;

/// Transport bytes per logical bit.
const SYMBOL_LEN: usize = 3;

/// Transport bytes per LED color byte.
const ENCODED_PER_BYTE: usize = 8 * SYMBOL_LEN;

/// Maximum ready/busy poll iterations before declaring a stall.
pub const MAX_WAIT: u32 = 1000;

/// Minimum low period after a frame so the chain latches (datasheet
/// floor is 50us; held longer for margin).
const LATCH_HOLD: Duration = Duration::from_micros(150);

const ENCODED_LEN: usize = LIVE_LED_COUNT * 3 * ENCODED_PER_BYTE;

/// Encoded transport bytes for a frame of `count` LEDs.
pub const fn encoded_len(count: usize) -> usize {
    count * 3 * ENCODED_PER_BYTE
}

/// Why a frame was not (fully) shown.
///
/// The caller's recourse is the same for every variant: wait, clear,
/// retry next frame. The distinction exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxError {
    /// Frame rejected before any transport interaction: zero LEDs,
    /// more LEDs than the chain holds, or a short buffer.
    BadFrame,
    /// A bounded transport poll was exhausted mid-frame. The transport
    /// was reset; a prefix of the frame may have reached the LEDs.
    Stalled,
}

/// Frame transmitter over a [`WireBus`].
///
/// Owns the encoded symbol buffer so sending allocates nothing.
pub struct Transmitter<B: WireBus> {
    bus: B,
    encoded: [u8; ENCODED_LEN],
    push_stalls: u32,
    drain_stalls: u32,
}

impl<B: WireBus> Transmitter<B> {
    /// Take ownership of a configured transport.
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            encoded: [0; ENCODED_LEN],
            push_stalls: 0,
            drain_stalls: 0,
        }
    }

    /// Encode and push one frame, then hold the latch period.
    ///
    /// `grb` is the physical-order byte stream from the framebuffer;
    /// `count` is the number of LEDs to drive. On `Err` the transport
    /// has been reset and is usable for the next frame; the visual
    /// state of the chain is unspecified.
    pub fn send(&mut self, grb: &[u8], count: usize) -> Result<(), TxError> {
        if count == 0 || count > LIVE_LED_COUNT || grb.len() < count * 3 {
            return Err(TxError::BadFrame);
        }

        let byte_count = encoded_len(count);
        for (index, &byte) in grb[..count * 3].iter().enumerate() {
            let at = index * ENCODED_PER_BYTE;
            encode_byte(byte, &mut self.encoded[at..at + ENCODED_PER_BYTE]);
        }

        for index in 0..byte_count {
            if !self.poll(Self::ready) {
                self.push_stalls += 1;
                #[cfg(feature = "esp32-log")]
                println!("cube tx stalled at byte {} of {}", index, byte_count);
                self.bus.reset();
                return Err(TxError::Stalled);
            }
            self.bus.push(self.encoded[index]);
        }

        if !self.poll(Self::drained) {
            self.drain_stalls += 1;
            #[cfg(feature = "esp32-log")]
            println!("cube tx stalled draining {} bytes", byte_count);
            self.bus.reset();
            return Err(TxError::Stalled);
        }

        block_for(LATCH_HOLD);
        Ok(())
    }

    fn ready(&self) -> bool {
        self.bus.is_ready()
    }

    fn drained(&self) -> bool {
        !self.bus.is_busy()
    }

    /// Spin on a transport condition for at most [`MAX_WAIT`] iterations.
    fn poll(&self, condition: fn(&Self) -> bool) -> bool {
        let mut budget = MAX_WAIT;
        while budget > 0 {
            if condition(self) {
                return true;
            }
            budget -= 1;
        }
        false
    }

    /// How often the ready poll exhausted its budget.
    pub const fn push_stalls(&self) -> u32 {
        self.push_stalls
    }

    /// How often the post-frame drain poll exhausted its budget.
    pub const fn drain_stalls(&self) -> u32 {
        self.drain_stalls
    }

    /// Borrow the underlying transport.
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Give the transport back.
    pub fn release(self) -> B {
        self.bus
    }
}

/// Expand one color byte, MSB first, into 3-byte bit symbols.
fn encode_byte(byte: u8, dst: &mut [u8]) {
    for bit in 0..8 {
        let symbol = if byte & (0x80 >> bit) == 0 {
            SYMBOL_ZERO
        } else {
            SYMBOL_ONE
        };
        let at = bit * SYMBOL_LEN;
        dst[at] = symbol;
        dst[at + 1] = 0;
        dst[at + 2] = 0;
    }
}
