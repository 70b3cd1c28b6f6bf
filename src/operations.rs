use log::{debug, trace};
use rand::Rng;

use crate::chip8::{next, Chip8, Status};
use crate::constants::{ADDRESS_MASK, FONT_CHAR_HEIGHT, FONT_START, STACK_SIZE};
use crate::error::{Error, Result};
use crate::instruction::{decode, AluOp, Instruction, Op};

/// Vx (op) Vy
///
/// Returns the new value of Vx and, for operations that set it, the new value of VF.
pub fn alu(op: AluOp, vx: u8, vy: u8) -> (u8, Option<u8>) {
    match op {
        AluOp::Ld => (vy, None),
        AluOp::Or => (vx | vy, None),
        AluOp::And => (vx & vy, None),
        AluOp::Xor => (vx ^ vy, None),
        AluOp::Add => {
            let (res, carry) = vx.overflowing_add(vy);
            (res, Some(carry as u8))
        }
        AluOp::Sub => (vx.wrapping_sub(vy), Some((vx > vy) as u8)),
        AluOp::Shr => (vx >> 1, Some(vx & 0x1)),
        AluOp::Subn => (vy.wrapping_sub(vx), Some((vy > vx) as u8)),
        AluOp::Shl => (vx << 1, Some(vx >> 7)),
    }
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(value: u8) -> [u8; 3] {
    [value / 100, value / 10 % 10, value % 10]
}

impl Chip8 {
    /// Decodes and executes `instr`, which was fetched from `pc`.
    ///
    /// The program counter has already been moved past the instruction.
    pub(crate) fn execute(&mut self, instr: u16, pc: u16) -> Result<()> {
        let instruction = decode(instr);
        trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:03X} sp{}",
            pc,
            instr,
            instruction.to_string(),
            self.cpu.v,
            self.cpu.i,
            self.cpu.sp
        );

        let Instruction {
            op, x, y, n, kk, nnn,
        } = instruction;
        let (x, y) = (usize::from(x), usize::from(y));
        let (vx, vy) = (self.cpu.v[x], self.cpu.v[y]);

        match op {
            Op::Cls => self.frame_buffer.clear(),
            Op::Ret => {
                if self.cpu.sp == 0 {
                    return Err(Error::StackUnderflow { pc });
                }
                self.cpu.sp -= 1;
                self.cpu.pc = self.cpu.stack[usize::from(self.cpu.sp)];
            }
            Op::Jp => self.cpu.pc = nnn,
            Op::Call => {
                let sp = usize::from(self.cpu.sp);
                // SP may not reach STACK_SIZE, leaving 15 usable return addresses
                if sp + 1 >= STACK_SIZE {
                    return Err(Error::StackOverflow { pc });
                }
                self.cpu.stack[sp] = self.cpu.pc;
                self.cpu.sp += 1;
                self.cpu.pc = nnn;
            }
            Op::SeImm => self.skip_if(vx == kk),
            Op::SneImm => self.skip_if(vx != kk),
            Op::SeReg => self.skip_if(vx == vy),
            Op::LdImm => self.cpu.v[x] = kk,
            Op::AddImm => self.cpu.v[x] = vx.wrapping_add(kk),
            Op::Alu(alu_op) => {
                let (res, flag) = alu(alu_op, vx, vy);
                self.cpu.v[x] = res;
                if let Some(flag) = flag {
                    self.cpu.v[0xF] = flag;
                }
            }
            Op::SneReg => self.skip_if(vx != vy),
            Op::LdI => self.cpu.i = nnn,
            Op::JpV0 => self.cpu.pc = nnn.wrapping_add(u16::from(self.cpu.v[0x0])) & ADDRESS_MASK,
            Op::Rnd => self.cpu.v[x] = self.rng.gen::<u8>() & kk,
            Op::Drw => {
                let mut rows = [0u8; 15];
                let rows = &mut rows[..usize::from(n)];
                for (offset, row) in (0u16..).zip(rows.iter_mut()) {
                    *row = self.memory.read8(self.cpu.i.wrapping_add(offset));
                }
                let collided = self.frame_buffer.xor_sprite(vx, vy, rows);
                self.cpu.v[0xF] = collided as u8;
            }
            Op::Skp => {
                let pressed = self.keypad.is_pressed(vx);
                self.skip_if(pressed)
            }
            Op::Sknp => {
                let pressed = self.keypad.is_pressed(vx);
                self.skip_if(!pressed)
            }
            Op::LdVxDt => self.cpu.v[x] = self.cpu.delay_timer,
            Op::LdK => {
                debug!("waiting for a key to store in V{:X}", x);
                self.keypad.begin_wait(x as u8);
                self.status = Status::WaitingForKey;
            }
            Op::LdDtVx => self.cpu.delay_timer = vx,
            Op::LdStVx => self.cpu.sound_timer = vx,
            Op::AddI => self.cpu.i = self.cpu.i.wrapping_add(u16::from(vx)),
            Op::LdF => self.cpu.i = FONT_START + u16::from(vx & 0xF) * FONT_CHAR_HEIGHT,
            Op::LdBcd => {
                for (offset, digit) in (0u16..).zip(bcd(vx).iter()) {
                    self.memory.write8(self.cpu.i.wrapping_add(offset), *digit);
                }
            }
            Op::StRegs => {
                for (offset, reg) in (0u16..).zip(0..=x) {
                    self.memory
                        .write8(self.cpu.i.wrapping_add(offset), self.cpu.v[reg]);
                }
            }
            Op::LdRegs => {
                for (offset, reg) in (0u16..).zip(0..=x) {
                    self.cpu.v[reg] = self.memory.read8(self.cpu.i.wrapping_add(offset));
                }
            }
            Op::Invalid => return Err(Error::IllegalInstruction { instr, pc }),
        }
        Ok(())
    }

    /// if condition then pc += 2
    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.cpu.pc = next(self.cpu.pc);
        }
    }
}
