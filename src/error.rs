use thiserror::Error;

/// Everything that can end a Chip-8 session.
///
/// None of these are recoverable; the interpreter stops on the first one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),

    #[error("{len} bytes written at {offset:#05X} would run past the end of memory")]
    OutOfRange { offset: usize, len: usize },

    #[error("illegal instruction {instr:#06X} at {pc:#05X}")]
    IllegalInstruction { instr: u16, pc: u16 },

    #[error("stack overflow calling a subroutine at {pc:#05X}")]
    StackOverflow { pc: u16 },

    #[error("stack underflow returning from a subroutine at {pc:#05X}")]
    StackUnderflow { pc: u16 },

    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_instruction_message() {
        let err = Error::IllegalInstruction {
            instr: 0x0123,
            pc: 0x200,
        };
        assert_eq!(err.to_string(), "illegal instruction 0x0123 at 0x200");
    }

    #[test]
    fn test_rom_too_large_message() {
        let err = Error::RomTooLarge {
            size: 4000,
            max: 3584,
        };
        assert_eq!(
            err.to_string(),
            "ROM is too large (4000 bytes), max size is 3584 bytes"
        );
    }
}
