use crate::constants::{ADDRESS_MASK, FONT_START, MEMORY_SIZE};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of byte-addressable RAM.
///
/// - `0x000..0x200` is reserved for the interpreter; the sprite sheet lives at `0x050`
/// - `0x200..0x1000` holds the loaded ROM
///
/// Every address is masked to 12 bits on access, so reads and writes wrap around the end of
/// memory instead of panicking.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }

    pub fn read8(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr & ADDRESS_MASK)]
    }

    /// Reads a big-endian 16-bit word; the second byte wraps to `0x000` after `0xFFF`.
    pub fn read16(&self, addr: u16) -> u16 {
        let left = u16::from(self.read8(addr));
        let right = u16::from(self.read8(addr.wrapping_add(1)));
        left << 8 | right
    }

    pub fn write8(&mut self, addr: u16, byte: u8) {
        self.bytes[usize::from(addr & ADDRESS_MASK)] = byte;
    }

    /// Copies `src` into memory starting at `offset`.
    ///
    /// Unlike single byte writes this never wraps; a block that doesn't fit is rejected whole.
    pub fn write_bytes(&mut self, src: &[u8], offset: usize) -> Result<()> {
        let end = offset
            .checked_add(src.len())
            .filter(|end| *end <= MEMORY_SIZE)
            .ok_or(Error::OutOfRange {
                offset,
                len: src.len(),
            })?;
        self.bytes[offset..end].copy_from_slice(src);
        Ok(())
    }

    /// Places the sprite sheet at `FONT_START`
    pub fn load_font(&mut self, font: &[u8; 80]) {
        let start = usize::from(FONT_START);
        self.bytes[start..start + font.len()].copy_from_slice(font);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_starts_zeroed() {
        let memory = Memory::new();
        assert!(memory.as_slice().iter().all(|b| *b == 0));
        assert_eq!(memory.as_slice().len(), 4096);
    }

    #[test]
    fn test_read16_is_big_endian() {
        let mut memory = Memory::new();
        memory.write8(0x200, 0xAA);
        memory.write8(0x201, 0xBB);
        assert_eq!(memory.read16(0x200), 0xAABB);
    }

    #[test]
    fn test_read8_masks_address() {
        let mut memory = Memory::new();
        memory.write8(0x001, 0x42);
        assert_eq!(memory.read8(0x1001), 0x42);
    }

    #[test]
    fn test_write8_masks_address() {
        let mut memory = Memory::new();
        memory.write8(0xF300, 0x7);
        assert_eq!(memory.read8(0x300), 0x7);
    }

    #[test]
    fn test_read16_wraps_at_end_of_memory() {
        let mut memory = Memory::new();
        memory.write8(0xFFF, 0x12);
        memory.write8(0x000, 0x34);
        assert_eq!(memory.read16(0xFFF), 0x1234);
    }

    #[test]
    fn test_load_font() {
        let mut memory = Memory::new();
        memory.load_font(&crate::constants::SPRITE_SHEET);
        assert_eq!(memory.as_slice()[0x050..0x055], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(memory.read8(0x09F), 0x80);
        assert_eq!(memory.read8(0x0A0), 0x00);
    }

    #[test]
    fn test_write_bytes_copies() {
        let mut memory = Memory::new();
        memory.write_bytes(&[0x1, 0x2, 0x3], 0x200).unwrap();
        assert_eq!(memory.as_slice()[0x200..0x203], [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_write_bytes_fills_to_the_last_byte() {
        let mut memory = Memory::new();
        memory.write_bytes(&[0xAB; 2], 0xFFE).unwrap();
        assert_eq!(memory.read8(0xFFF), 0xAB);
    }

    #[test]
    fn test_write_bytes_rejects_overflow() {
        let mut memory = Memory::new();
        let result = memory.write_bytes(&[0x1, 0x2], 0xFFF);
        assert!(matches!(
            result,
            Err(Error::OutOfRange {
                offset: 0xFFF,
                len: 2
            })
        ));
        assert_eq!(memory.read8(0xFFF), 0x0);
    }
}
