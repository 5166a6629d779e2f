//! Frame pacing and the render-transmit control loop.
//!
//! One tick runs the whole pipeline in order: drain control commands,
//! advance the animation clocks, draw the active pattern, read the
//! potentiometer, scale and transmit. Exactly one frame is ever in
//! flight; the scheduler owns every piece of mutable state the loop
//! touches. The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::brightness::BrightnessInput;
use crate::command::{CommandReceiver, CubeCommand};
use crate::frame::CubeFrame;
use crate::map::{CUBE_SIZE, LIVE_LED_COUNT};
use crate::pattern::{PatternId, PatternSlot};
use crate::transmit::{Transmitter, TxError};
use crate::{AnalogSource, WireBus};

/// Target interval between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// Pause after a failed transmit before the next attempt.
pub const FAILURE_COOLDOWN: Duration = Duration::from_millis(500);

/// Automatic animation step interval.
const POSITION_INTERVAL: Duration = Duration::from_secs(1);

/// Automatic pattern rotation interval.
const PATTERN_INTERVAL: Duration = Duration::from_secs(15);

/// Position wraps here so long-running patterns get extended phases.
const POSITION_RANGE: u8 = (CUBE_SIZE * 10) as u8;

/// Maximum drift before frame timing resets instead of catching up.
const MAX_DRIFT_FRAMES: u32 = 2;

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Deadline for the next tick.
    pub next_deadline: Instant,
    /// How long the caller should wait (zero when behind schedule).
    pub sleep_duration: Duration,
    /// Whether the frame reached the LEDs.
    pub sent: Result<(), TxError>,
}

/// The cube control loop, minus the platform glue.
///
/// Owns the framebuffer, transmitter, brightness input and pattern
/// state outright, so nothing about a running cube lives in globals.
pub struct CubeScheduler<'a, A: AnalogSource, B: WireBus, const COMMANDS: usize> {
    brightness: BrightnessInput<A>,
    frame: CubeFrame,
    transmitter: Transmitter<B>,
    commands: CommandReceiver<'a, COMMANDS>,
    pattern: PatternSlot,
    position: u8,
    started: bool,
    position_deadline: Instant,
    pattern_deadline: Instant,
    next_frame: Instant,
}

impl<'a, A: AnalogSource, B: WireBus, const COMMANDS: usize>
    CubeScheduler<'a, A, B, COMMANDS>
{
    /// Assemble the loop from its collaborators.
    pub fn new(
        brightness: BrightnessInput<A>,
        transmitter: Transmitter<B>,
        commands: CommandReceiver<'a, COMMANDS>,
    ) -> Self {
        Self {
            brightness,
            frame: CubeFrame::new(),
            transmitter,
            commands,
            pattern: PatternSlot::default(),
            position: 0,
            started: false,
            position_deadline: Instant::from_millis(0),
            pattern_deadline: Instant::from_millis(0),
            next_frame: Instant::from_millis(0),
        }
    }

    /// Run one frame.
    ///
    /// On transmit failure the frame is cleared and the next deadline
    /// moves out by [`FAILURE_COOLDOWN`] so a wedged transport is not
    /// hammered.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if !self.started {
            self.started = true;
            self.position_deadline = now + POSITION_INTERVAL;
            self.pattern_deadline = now + PATTERN_INTERVAL;
            self.next_frame = now;
        }

        self.process_commands();
        self.advance_clocks(now);

        self.pattern.render(self.position, &mut self.frame);

        let factor = self.brightness.read();
        let sent = self.render_and_send(factor);

        // Drift correction: after a long stall, skip the backlog
        let max_drift = Duration::from_millis(
            u64::from(MAX_DRIFT_FRAMES) * FRAME_INTERVAL.as_millis(),
        );
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        match sent {
            Ok(()) => self.next_frame += FRAME_INTERVAL,
            Err(_) => {
                self.frame.clear();
                self.next_frame = now + FAILURE_COOLDOWN;
            }
        }

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            sent,
        }
    }

    /// Scale the current frame and push it to the LEDs.
    ///
    /// Exposed separately so callers driving the framebuffer themselves
    /// can still use the transmit path.
    pub fn render_and_send(&mut self, brightness: f32) -> Result<(), TxError> {
        let bytes = self.frame.render(brightness);
        self.transmitter.send(bytes, LIVE_LED_COUNT)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.commands.try_receive() {
            match command {
                CubeCommand::NextPattern => self.switch_pattern(self.pattern.id().next()),
                CubeCommand::AdvancePosition => {
                    self.position = (self.position + 1) % (CUBE_SIZE as u8 * 2);
                }
            }
        }
    }

    fn advance_clocks(&mut self, now: Instant) {
        if now >= self.position_deadline {
            self.position_deadline = now + POSITION_INTERVAL;
            self.position = (self.position + 1) % POSITION_RANGE;
        }
        if now >= self.pattern_deadline {
            self.pattern_deadline = now + PATTERN_INTERVAL;
            self.switch_pattern(self.pattern.id().next());
        }
    }

    fn switch_pattern(&mut self, id: PatternId) {
        self.pattern = id.to_slot();
        self.pattern.reset();
        self.position = 0;
    }

    /// Force a specific pattern.
    pub fn set_pattern(&mut self, id: PatternId) {
        self.switch_pattern(id);
    }

    /// Id of the currently active pattern.
    pub const fn pattern_id(&self) -> PatternId {
        self.pattern.id()
    }

    /// Current animation step counter.
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Mutable access to the framebuffer for external generators.
    pub fn frame_mut(&mut self) -> &mut CubeFrame {
        &mut self.frame
    }

    /// The transmitter, e.g. for reading stall diagnostics.
    pub const fn transmitter(&self) -> &Transmitter<B> {
        &self.transmitter
    }
}
