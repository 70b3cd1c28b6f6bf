use crate::constants::{PROGRAM_START, STACK_SIZE};

/// # Chip-8 CPU
///
/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 12-bit memory address register, kept in 16 bits
///
/// # Counter
/// - (pc) a 12-bit program counter
///
/// # Stack
/// - 16 return addresses with a pointer (sp) to the next free slot
///
/// # Timers
/// - 2 8-bit timers (delay & sound)
///     - both are decremented once per frame until they reach 0
///     - the host beeps while the sound timer is above 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cpu {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    /// Decrements both timers towards 0
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
