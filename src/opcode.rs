/// # Opcode fields
///
/// Every instruction is one big-endian 16-bit word. Reading it as four nibbles `[a x y n]`:
///
/// | field | bits     | meaning                                   |
/// |-------|----------|-------------------------------------------|
/// | `a`   | `F000`   | instruction family                        |
/// | `x`   | `0F00`   | register Vx, or the last register of V0..Vx |
/// | `y`   | `00F0`   | register Vy                               |
/// | `n`   | `000F`   | sprite height, or a sub-operation          |
/// | `kk`  | `00FF`   | 8-bit immediate                           |
/// | `nnn` | `0FFF`   | 12-bit address                            |
///
/// Which fields are meaningful depends on the family; the decoder always extracts all of them.
pub trait Opcode {
    /// `(a, x, y, n)`
    fn nibbles(&self) -> (u8, u8, u8, u8);
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn n(&self) -> u8;
    fn kk(&self) -> u8;
    fn nnn(&self) -> u16;
}

/// The 4-bit group `index` places from the right
fn nibble(word: u16, index: u32) -> u8 {
    (word >> (4 * index)) as u8 & 0xF
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (nibble(*self, 3), self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        nibble(*self, 2)
    }

    fn y(&self) -> u8 {
        nibble(*self, 1)
    }

    fn n(&self) -> u8 {
        nibble(*self, 0)
    }

    fn kk(&self) -> u8 {
        *self as u8
    }

    fn nnn(&self) -> u16 {
        *self & 0x0FFF
    }
}
