//! Plane sweep pattern
//!
//! One solid plane of color walks along a single axis, one layer per
//! position step. Each axis carries its own color so the cube's
//! orientation is obvious at a glance.

use super::Pattern;
use crate::color::Rgb;
use crate::frame::CubeFrame;
use crate::map::CUBE_SIZE;

const PLANE_INTENSITY: u8 = 40;

/// Sweep axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Plane sweep along one axis.
#[derive(Debug, Clone)]
pub struct PlanesPattern {
    axis: Axis,
}

impl PlanesPattern {
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub const fn axis(&self) -> Axis {
        self.axis
    }

    const fn color(&self) -> Rgb {
        // Red left-to-right, green front-to-back, blue bottom-to-top
        match self.axis {
            Axis::X => Rgb {
                r: PLANE_INTENSITY,
                g: 0,
                b: 0,
            },
            Axis::Y => Rgb {
                r: 0,
                g: PLANE_INTENSITY,
                b: 0,
            },
            Axis::Z => Rgb {
                r: 0,
                g: 0,
                b: PLANE_INTENSITY,
            },
        }
    }
}

impl Pattern for PlanesPattern {
    fn render(&mut self, position: u8, frame: &mut CubeFrame) {
        frame.clear();

        let layer = position as usize % CUBE_SIZE;
        let color = self.color();

        for a in 0..CUBE_SIZE {
            for b in 0..CUBE_SIZE {
                match self.axis {
                    Axis::X => frame.set_voxel(layer, a, b, color),
                    Axis::Y => frame.set_voxel(a, layer, b, color),
                    Axis::Z => frame.set_voxel(a, b, layer, color),
                }
            }
        }
    }
}
