//! Spiral pattern
//!
//! A flat spiral rotates around the cube's center column while the
//! whole figure rides a slow sine wave up and down. Color shifts from
//! red at the center to green at the rim.

use libm::{cosf, sinf};

use super::Pattern;
use crate::color::Rgb;
use crate::frame::CubeFrame;
use crate::map::CUBE_SIZE;

const ARM_STEPS: u32 = 36;
const DEG_TO_RAD: f32 = 0.017_453_3;
const PI: f32 = 3.141_59;

/// Rotating spiral riding a sine wave.
#[derive(Debug, Clone)]
pub struct SpiralPattern {
    angle: u8,
    height_step: u8,
}

impl SpiralPattern {
    pub const fn new() -> Self {
        Self {
            angle: 0,
            height_step: 0,
        }
    }
}

impl Default for SpiralPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for SpiralPattern {
    fn render(&mut self, position: u8, frame: &mut CubeFrame) {
        frame.clear();

        self.angle = (self.angle + 1) % ARM_STEPS as u8;
        if position % 10 == 0 {
            self.height_step = (self.height_step + 1) % (CUBE_SIZE as u8 * 2);
        }

        let half = CUBE_SIZE as f32 / 2.0;
        let height = half + (half - 0.5) * sinf(f32::from(self.height_step) * 0.1 * PI);
        let center = (CUBE_SIZE - 1) as f32 / 2.0;

        for step in 0..ARM_STEPS {
            let angle = (step as f32 * 10.0 + f32::from(self.angle)) * DEG_TO_RAD;
            let radius = step as f32 / ARM_STEPS as f32 * (half - 0.5);

            let x = (center + radius * cosf(angle)) as i32;
            let y = (center + radius * sinf(angle)) as i32;
            let z = height as i32;
            if x < 0 || y < 0 || z < 0 {
                continue;
            }

            let along = step as f32 / ARM_STEPS as f32;
            let color = Rgb {
                r: (40.0 * (1.0 - along)) as u8,
                g: (40.0 * along) as u8,
                b: 20,
            };
            // set_voxel drops anything past the cube's far faces
            frame.set_voxel(x as usize, y as usize, z as usize, color);
        }
    }

    fn reset(&mut self) {
        self.angle = 0;
        self.height_step = 0;
    }
}
