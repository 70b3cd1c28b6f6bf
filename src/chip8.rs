use std::io::Read;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{ADDRESS_MASK, MAX_ROM_SIZE, PROGRAM_START, SPRITE_SHEET};
use crate::cpu::Cpu;
use crate::error::{Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::host::{Event, Host};
use crate::keypad::Keypad;
use crate::memory::Memory;

/// Where the interpreter is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    /// An `Fx0A` is blocking until the next key press
    WaitingForKey,
    /// Terminal; a stopped session never runs again
    Stopped,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the whole machine for the length of a session:
///  - `cpu` registers, stack and timers
///  - `memory` with the sprite sheet and the loaded ROM
///  - `frame_buffer` for some host to present
///  - `keypad` with the pending `Fx0A`, if any
///
/// Supplies interfaces for:
/// - loading roms
/// - feeding host events
/// - advancing the CPU one instruction or a whole frame at a time
/// - running against a `Host` until it quits
pub struct Chip8 {
    pub(crate) cpu: Cpu,
    pub(crate) memory: Memory,
    pub(crate) frame_buffer: FrameBuffer,
    pub(crate) keypad: Keypad,
    pub(crate) rng: StdRng,
    pub(crate) status: Status,
    config: Config,
}

impl Chip8 {
    pub fn new(config: Config) -> Self {
        let mut memory = Memory::new();
        memory.load_font(&SPRITE_SHEET);

        Chip8 {
            cpu: Cpu::new(),
            memory,
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            rng: StdRng::seed_from_u64(config.seed_or_clock()),
            status: Status::Running,
            config,
        }
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    /// Reading stops one byte past `MAX_ROM_SIZE`, so an endless source is still rejected.
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize> {
        let mut rom = Vec::new();
        Read::take(reader, MAX_ROM_SIZE as u64 + 1).read_to_end(&mut rom)?;
        self.load_program(&rom)?;
        Ok(rom.len())
    }

    /// Copies a program image to `PROGRAM_START`
    pub fn load_program(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        self.memory.write_bytes(rom, usize::from(PROGRAM_START))?;
        info!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Applies a single host event
    /// - key presses may resolve a pending `Fx0A`
    /// - quitting stops the session for good
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => {
                debug!("quit requested");
                self.status = Status::Stopped;
            }
            Event::KeyDown(key) => {
                if let Some(register) = self.keypad.press(key) {
                    self.cpu.v[usize::from(register)] = key & 0xF;
                    if self.status == Status::WaitingForKey {
                        debug!("key {:X} stored in V{:X}, resuming", key & 0xF, register);
                        self.status = Status::Running;
                    }
                }
            }
            Event::KeyUp(key) => self.keypad.release(key),
        }
    }

    /// Advances the CPU by a single instruction
    /// - fetches the instruction at pc and moves pc past it
    /// - decodes and executes it
    ///
    /// Does nothing unless the interpreter is `Running`.
    pub fn step(&mut self) -> Result<()> {
        if self.status != Status::Running {
            return Ok(());
        }
        let pc = self.cpu.pc;
        let instr = self.memory.read16(pc);
        self.cpu.pc = next(pc);
        self.execute(instr, pc)
    }

    /// Runs up to `cycles_per_frame` instructions, stopping early if one blocks on the keypad.
    ///
    /// Any error stops the session.
    pub fn run_cycles(&mut self) -> Result<()> {
        for _ in 0..self.config.cycles_per_frame {
            if self.status != Status::Running {
                break;
            }
            if let Err(err) = self.step() {
                self.status = Status::Stopped;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Runs a single 60Hz frame:
    /// 1. applies every pending host event
    /// 2. executes this frame's instructions
    /// 3. decrements the timers
    /// 4. presents the frame buffer if it changed
    /// 5. sleeps until the next frame is due
    pub fn run_frame<H: Host>(&mut self, host: &mut H) -> Result<()> {
        for event in host.poll_events() {
            self.handle_event(event);
        }
        if self.status == Status::Stopped {
            return Ok(());
        }

        self.run_cycles()?;

        self.cpu.tick_timers();
        host.buzz(self.cpu.sound_timer > 0);

        if self.frame_buffer.is_dirty() {
            host.present(&self.frame_buffer)?;
            self.frame_buffer.clear_dirty();
        }

        host.wait_until_next_tick();
        Ok(())
    }

    /// Runs frames until the host quits or an instruction fails
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<()> {
        info!(
            "running at {} instructions per frame",
            self.config.cycles_per_frame
        );
        host.present(&self.frame_buffer)?;
        while self.status != Status::Stopped {
            self.run_frame(host)?;
        }
        host.buzz(false);
        info!("stopped");
        Ok(())
    }
}

/// The address after `pc`, wrapping within 12 bits
pub(crate) fn next(pc: u16) -> u16 {
    pc.wrapping_add(2) & ADDRESS_MASK
}
