//! A CHIP-8 interpreter core.
//!
//! The machine runs against a [`Host`] that supplies input, presents frames and paces the
//! 60Hz loop, so it can be driven by a window or headless in tests.

pub use chip8::{Chip8, Status};
pub use config::Config;
pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_DURATION};
pub use error::{Error, Result};
pub use frame_buffer::{FrameBuffer, Pixels};
pub use host::{Event, Host};
pub use instruction::{decode, AluOp, Instruction, Op};

mod chip8;
mod config;
pub mod constants;
pub mod cpu;
mod error;
mod frame_buffer;
mod host;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
