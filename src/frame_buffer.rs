use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Rows of on/off pixels, indexed as [y][x] with the origin at the top left
pub type Pixels = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # FrameBuffer
/// The 64x32 monochrome screen.
///
/// Pixels only change through `clear` and `xor_sprite`; both mark the buffer dirty so the host
/// knows to present it.
#[derive(Clone, Copy)]
pub struct FrameBuffer {
    pixels: Pixels,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// XORs `rows` onto the screen with its top left corner at (x0, y0).
    ///
    /// Each row byte is 8 pixels, most significant bit leftmost. The starting position wraps
    /// around the screen but the sprite itself is clipped at the right and bottom edges.
    ///
    /// Returns whether any pixel was switched from on to off.
    pub fn xor_sprite(&mut self, x0: u8, y0: u8, rows: &[u8]) -> bool {
        let x0 = usize::from(x0) % DISPLAY_WIDTH;
        let y0 = usize::from(y0) % DISPLAY_HEIGHT;
        let mut collided = false;

        for (y, row) in (y0..DISPLAY_HEIGHT).zip(rows) {
            for (x, bit) in (x0..DISPLAY_WIDTH).zip(0..8u8) {
                if row & (0x80u8 >> bit) == 0 {
                    continue;
                }
                let pixel = &mut self.pixels[y][x];
                collided |= *pixel;
                *pixel = !*pixel;
            }
        }

        self.dirty = true;
        collided
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    /// Read only view for rendering
    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called once the host has presented the current frame
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
