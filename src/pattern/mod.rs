//! Built-in animation generators.
//!
//! Generators draw full-intensity colors through [`CubeFrame::set_voxel`];
//! global brightness is applied once at render time, not here. All state
//! lives in the pattern structs, stored without allocation in
//! [`PatternSlot`].

mod planes;
mod rain;
mod spiral;

pub use planes::{Axis, PlanesPattern};
pub use rain::RainPattern;
pub use spiral::SpiralPattern;

use crate::frame::CubeFrame;

const PATTERN_NAME_PLANES_X: &str = "planes_x";
const PATTERN_NAME_PLANES_Y: &str = "planes_y";
const PATTERN_NAME_PLANES_Z: &str = "planes_z";
const PATTERN_NAME_RAIN: &str = "rain";
const PATTERN_NAME_SPIRAL: &str = "spiral";

pub trait Pattern {
    /// Draw one animation step into the frame.
    ///
    /// `position` is the loop's advancing step counter; patterns derive
    /// all motion from it or from their own state.
    fn render(&mut self, position: u8, frame: &mut CubeFrame);

    /// Reset pattern state when it becomes active.
    fn reset(&mut self) {}
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    PlanesX = 0,
    PlanesY = 1,
    PlanesZ = 2,
    Rain = 3,
    Spiral = 4,
}

impl PatternId {
    pub const COUNT: u8 = 5;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::PlanesX,
            1 => Self::PlanesY,
            2 => Self::PlanesZ,
            3 => Self::Rain,
            4 => Self::Spiral,
            _ => return None,
        })
    }

    /// The next id in rotation, wrapping at the end.
    pub fn next(self) -> Self {
        Self::from_raw((self as u8 + 1) % Self::COUNT).unwrap_or(Self::PlanesX)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlanesX => PATTERN_NAME_PLANES_X,
            Self::PlanesY => PATTERN_NAME_PLANES_Y,
            Self::PlanesZ => PATTERN_NAME_PLANES_Z,
            Self::Rain => PATTERN_NAME_RAIN,
            Self::Spiral => PATTERN_NAME_SPIRAL,
        }
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::PlanesX => PatternSlot::Planes(PlanesPattern::new(Axis::X)),
            Self::PlanesY => PatternSlot::Planes(PlanesPattern::new(Axis::Y)),
            Self::PlanesZ => PatternSlot::Planes(PlanesPattern::new(Axis::Z)),
            Self::Rain => PatternSlot::Rain(RainPattern::new()),
            Self::Spiral => PatternSlot::Spiral(SpiralPattern::new()),
        }
    }
}

/// Pattern slot - enum containing all built-in patterns.
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Colored plane sweeping along one axis
    Planes(PlanesPattern),
    /// Blue drops falling from the top layer
    Rain(RainPattern),
    /// Rotating spiral riding a sine wave
    Spiral(SpiralPattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        PatternId::PlanesX.to_slot()
    }
}

impl PatternSlot {
    /// Render the active pattern.
    pub fn render(&mut self, position: u8, frame: &mut CubeFrame) {
        match self {
            Self::Planes(pattern) => pattern.render(position, frame),
            Self::Rain(pattern) => pattern.render(position, frame),
            Self::Spiral(pattern) => pattern.render(position, frame),
        }
    }

    /// Reset the active pattern's state.
    pub fn reset(&mut self) {
        match self {
            Self::Planes(pattern) => Pattern::reset(pattern),
            Self::Rain(pattern) => Pattern::reset(pattern),
            Self::Spiral(pattern) => Pattern::reset(pattern),
        }
    }

    /// Id of the active pattern for external observation.
    pub const fn id(&self) -> PatternId {
        match self {
            Self::Planes(pattern) => match pattern.axis() {
                Axis::X => PatternId::PlanesX,
                Axis::Y => PatternId::PlanesY,
                Axis::Z => PatternId::PlanesZ,
            },
            Self::Rain(_) => PatternId::Rain,
            Self::Spiral(_) => PatternId::Spiral,
        }
    }
}
