//! Rain pattern
//!
//! Blue drops spawn on the top layer and fall one voxel per step,
//! leaving a dimmer trail behind. Uses a small xorshift generator so
//! drop placement needs no platform entropy source.

use super::Pattern;
use crate::color::Rgb;
use crate::frame::CubeFrame;
use crate::map::CUBE_SIZE;

const MAX_DROPS: usize = 10;
const DROP_COLOR: Rgb = Rgb { r: 0, g: 0, b: 40 };
const TRAIL_COLOR: Rgb = Rgb { r: 0, g: 0, b: 20 };
const SPAWN_SEED: u32 = 0x1234_5678;

#[derive(Debug, Clone, Copy, Default)]
struct Raindrop {
    x: u8,
    y: u8,
    z: u8,
    active: bool,
}

/// Falling rain drops.
#[derive(Debug, Clone)]
pub struct RainPattern {
    drops: [Raindrop; MAX_DROPS],
    rng: u32,
}

impl RainPattern {
    pub const fn new() -> Self {
        Self {
            drops: [Raindrop {
                x: 0,
                y: 0,
                z: 0,
                active: false,
            }; MAX_DROPS],
            rng: SPAWN_SEED,
        }
    }

    fn next_random(&mut self) -> u32 {
        // xorshift32
        let mut state = self.rng;
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        self.rng = state;
        state
    }

    fn spawn_one(&mut self) {
        // 30% chance per spawn window, at most one new drop
        if self.next_random() % 10 >= 3 {
            return;
        }
        let x = (self.next_random() % CUBE_SIZE as u32) as u8;
        let y = (self.next_random() % CUBE_SIZE as u32) as u8;
        for drop in &mut self.drops {
            if !drop.active {
                *drop = Raindrop {
                    x,
                    y,
                    z: (CUBE_SIZE - 1) as u8,
                    active: true,
                };
                break;
            }
        }
    }
}

impl Default for RainPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for RainPattern {
    fn render(&mut self, position: u8, frame: &mut CubeFrame) {
        frame.clear();

        if position % 5 == 0 {
            self.spawn_one();
        }

        for index in 0..self.drops.len() {
            let mut drop = self.drops[index];
            if !drop.active {
                continue;
            }
            if drop.z == 0 {
                drop.active = false;
            } else {
                drop.z -= 1;
            }
            self.drops[index] = drop;

            if drop.active {
                frame.set_voxel(drop.x as usize, drop.y as usize, drop.z as usize, DROP_COLOR);
                if (drop.z as usize) < CUBE_SIZE - 1 {
                    frame.set_voxel(
                        drop.x as usize,
                        drop.y as usize,
                        drop.z as usize + 1,
                        TRAIL_COLOR,
                    );
                }
            }
        }
    }

    fn reset(&mut self) {
        for drop in &mut self.drops {
            drop.active = false;
        }
        self.rng = SPAWN_SEED;
    }
}
