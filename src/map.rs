//! Voxel-to-chain address mapping with dead-LED compaction.
//!
//! The cube is wired as a single serial chain in a serpentine: within each
//! X slab, consecutive Y columns alternate direction along Z. The map and
//! the dead-LED set are pure data, fixed for the life of the process and
//! built at compile time.

/// Cube edge length in voxels.
pub const CUBE_SIZE: usize = 7;

/// Number of LED positions on the physical chain.
pub const LED_COUNT: usize = CUBE_SIZE * CUBE_SIZE * CUBE_SIZE;

/// Chain positions (0-based) of LEDs known not to function.
pub const DEAD_LEDS: [u16; 7] = [0, 108, 156, 157, 206, 213, 221];

/// Number of addressable LEDs after removing the dead ones.
pub const LIVE_LED_COUNT: usize = LED_COUNT - DEAD_LEDS.len();

/// 1-based LED number for every voxel, indexed `[x][y][z]`.
///
/// An entry of 0 means no LED is wired at that logical slot. With the
/// current cube every slot is wired, but lookups still honor the reserved
/// value.
pub static LED_MAP: [[[u16; CUBE_SIZE]; CUBE_SIZE]; CUBE_SIZE] = build_led_map();

/// For each chain index, how many dead LEDs lie strictly below it.
static DEAD_BEFORE: [u16; LED_COUNT] = build_dead_before();

const fn build_led_map() -> [[[u16; CUBE_SIZE]; CUBE_SIZE]; CUBE_SIZE] {
    let mut map = [[[0u16; CUBE_SIZE]; CUBE_SIZE]; CUBE_SIZE];
    let mut x = 0;
    while x < CUBE_SIZE {
        let mut y = 0;
        while y < CUBE_SIZE {
            let base = (x * CUBE_SIZE * CUBE_SIZE + y * CUBE_SIZE) as u16;
            let mut z = 0;
            while z < CUBE_SIZE {
                // Even columns run top-of-count down, odd columns run up.
                map[x][y][z] = if y % 2 == 0 {
                    base + (CUBE_SIZE - z) as u16
                } else {
                    base + z as u16 + 1
                };
                z += 1;
            }
            y += 1;
        }
        x += 1;
    }
    map
}

const fn build_dead_before() -> [u16; LED_COUNT] {
    let mut table = [0u16; LED_COUNT];
    let mut index = 0;
    while index < LED_COUNT {
        let mut count = 0;
        let mut dead = 0;
        while dead < DEAD_LEDS.len() {
            if (DEAD_LEDS[dead] as usize) < index {
                count += 1;
            }
            dead += 1;
        }
        table[index] = count;
        index += 1;
    }
    table
}

const fn is_dead(index: usize) -> bool {
    let mut dead = 0;
    while dead < DEAD_LEDS.len() {
        if DEAD_LEDS[dead] as usize == index {
            return true;
        }
        dead += 1;
    }
    false
}

/// Compact a 0-based chain index into its render-buffer slot.
///
/// Returns `None` for out-of-range or dead indices. Indices past a dead
/// LED shift down so the output buffer has no gap where the dead LED
/// would have been.
pub fn compact_index(index: usize) -> Option<usize> {
    if index >= LED_COUNT || is_dead(index) {
        return None;
    }
    Some(index - DEAD_BEFORE[index] as usize)
}

/// Resolve a voxel coordinate to its compacted render-buffer slot.
///
/// Returns `None` when the coordinate is out of bounds, the slot is
/// unmapped, or the LED at that position is dead. Callers treat `None`
/// as a silent drop, never an error.
pub fn physical_slot(x: usize, y: usize, z: usize) -> Option<usize> {
    if x >= CUBE_SIZE || y >= CUBE_SIZE || z >= CUBE_SIZE {
        return None;
    }
    let number = LED_MAP[x][y][z];
    if number == 0 {
        return None;
    }
    compact_index(number as usize - 1)
}
