use std::time::Duration;

/// Width of the display in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Height of the display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 0x1000;

/// Addresses are 12 bits wide
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where ROMs are loaded into memory and where the pc starts
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the sprite sheet is loaded into memory
pub const FONT_START: u16 = 0x050;

/// Each character of the sprite sheet is 5 rows tall
pub const FONT_CHAR_HEIGHT: u16 = 5;

/// Number of return addresses the stack can hold
pub const STACK_SIZE: usize = 16;

/// Instructions executed per frame unless configured otherwise
pub const CYCLES_PER_FRAME: usize = 10;

/// Frames (and timer decrements) per second
pub const FRAME_RATE: u32 = 60;

/// Wall clock time between two frames (~16.667ms)
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// # Sprite Sheet
/// Hexadecimal digits 0..F, each 8 pixels wide and 5 rows tall.
/// Only the high nibble of every row is used.
///
/// ```text
/// "0"       Binary   Hex
/// ****      11110000 0xF0
/// *  *      10010000 0x90
/// *  *      10010000 0x90
/// *  *      10010000 0x90
/// ****      11110000 0xF0
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
