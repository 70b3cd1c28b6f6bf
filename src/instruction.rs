use std::fmt;

use crate::opcode::Opcode;

/// Register to register operations (`8xy_`), keyed by their last nibble
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// 8xy0: Vx = Vy
    Ld,
    /// 8xy1: Vx |= Vy
    Or,
    /// 8xy2: Vx &= Vy
    And,
    /// 8xy3: Vx ^= Vy
    Xor,
    /// 8xy4: Vx += Vy; VF = carry
    Add,
    /// 8xy5: Vx -= Vy; VF = !borrow
    Sub,
    /// 8xy6: Vx >>= 1; VF = shifted out bit
    Shr,
    /// 8xy7: Vx = Vy - Vx; VF = !borrow
    Subn,
    /// 8xyE: Vx <<= 1; VF = shifted out bit
    Shl,
}

impl AluOp {
    fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Ld => "LD",
            AluOp::Or => "OR",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Shr => "SHR",
            AluOp::Subn => "SUBN",
            AluOp::Shl => "SHL",
        }
    }
}

/// The operation an instruction performs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// 00E0: clear the screen
    Cls,
    /// 00EE: PC = STACK.pop()
    Ret,
    /// 1nnn: PC = nnn
    Jp,
    /// 2nnn: STACK.push(PC); PC = nnn
    Call,
    /// 3xkk: if Vx == kk then skip
    SeImm,
    /// 4xkk: if Vx != kk then skip
    SneImm,
    /// 5xy0: if Vx == Vy then skip
    SeReg,
    /// 6xkk: Vx = kk
    LdImm,
    /// 7xkk: Vx += kk without touching VF
    AddImm,
    /// 8xy_
    Alu(AluOp),
    /// 9xy0: if Vx != Vy then skip
    SneReg,
    /// Annn: I = nnn
    LdI,
    /// Bnnn: PC = nnn + V0
    JpV0,
    /// Cxkk: Vx = rand_byte & kk
    Rnd,
    /// Dxyn: draw_sprite(x=Vx y=Vy height=n)
    Drw,
    /// Ex9E: if Vx.pressed then skip
    Skp,
    /// ExA1: if !Vx.pressed then skip
    Sknp,
    /// Fx07: Vx = DT
    LdVxDt,
    /// Fx0A: await keypress for Vx
    LdK,
    /// Fx15: DT = Vx
    LdDtVx,
    /// Fx18: ST = Vx
    LdStVx,
    /// Fx1E: I += Vx
    AddI,
    /// Fx29: I = address of the sprite for the low nibble of Vx
    LdF,
    /// Fx33: mem[I..I+3] = bcd(Vx)
    LdBcd,
    /// Fx55: mem[I..=I+x] = V0..=Vx
    StRegs,
    /// Fx65: V0..=Vx = mem[I..=I+x]
    LdRegs,
    Invalid,
}

/// A decoded instruction: its operation and every operand field it could use.
///
/// Fields an operation doesn't use are still filled in from the raw instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub op: Op,
    pub x: u8,
    pub y: u8,
    pub n: u8,
    pub kk: u8,
    pub nnn: u16,
}

/// Selects the correct Op for a raw instruction
pub fn decode(instr: u16) -> Instruction {
    let op = match instr.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Op::Cls,
        (0x0, 0x0, 0xE, 0xE) => Op::Ret,
        (0x1, ..) => Op::Jp,
        (0x2, ..) => Op::Call,
        (0x3, ..) => Op::SeImm,
        (0x4, ..) => Op::SneImm,
        (0x5, .., 0x0) => Op::SeReg,
        (0x6, ..) => Op::LdImm,
        (0x7, ..) => Op::AddImm,
        (0x8, .., 0x0) => Op::Alu(AluOp::Ld),
        (0x8, .., 0x1) => Op::Alu(AluOp::Or),
        (0x8, .., 0x2) => Op::Alu(AluOp::And),
        (0x8, .., 0x3) => Op::Alu(AluOp::Xor),
        (0x8, .., 0x4) => Op::Alu(AluOp::Add),
        (0x8, .., 0x5) => Op::Alu(AluOp::Sub),
        (0x8, .., 0x6) => Op::Alu(AluOp::Shr),
        (0x8, .., 0x7) => Op::Alu(AluOp::Subn),
        (0x8, .., 0xE) => Op::Alu(AluOp::Shl),
        (0x9, .., 0x0) => Op::SneReg,
        (0xA, ..) => Op::LdI,
        (0xB, ..) => Op::JpV0,
        (0xC, ..) => Op::Rnd,
        (0xD, ..) => Op::Drw,
        (0xE, _, 0x9, 0xE) => Op::Skp,
        (0xE, _, 0xA, 0x1) => Op::Sknp,
        (0xF, _, 0x0, 0x7) => Op::LdVxDt,
        (0xF, _, 0x0, 0xA) => Op::LdK,
        (0xF, _, 0x1, 0x5) => Op::LdDtVx,
        (0xF, _, 0x1, 0x8) => Op::LdStVx,
        (0xF, _, 0x1, 0xE) => Op::AddI,
        (0xF, _, 0x2, 0x9) => Op::LdF,
        (0xF, _, 0x3, 0x3) => Op::LdBcd,
        (0xF, _, 0x5, 0x5) => Op::StRegs,
        (0xF, _, 0x6, 0x5) => Op::LdRegs,
        _ => Op::Invalid,
    };

    Instruction {
        op,
        x: instr.x(),
        y: instr.y(),
        n: instr.n(),
        kk: instr.kk(),
        nnn: instr.nnn(),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Instruction { x, y, n, kk, nnn, .. } = *self;
        match self.op {
            Op::Cls => write!(f, "CLS"),
            Op::Ret => write!(f, "RET"),
            Op::Jp => write!(f, "JP {:03X}", nnn),
            Op::Call => write!(f, "CALL {:03X}", nnn),
            Op::SeImm => write!(f, "SE V{:X}, {:02X}", x, kk),
            Op::SneImm => write!(f, "SNE V{:X}, {:02X}", x, kk),
            Op::SeReg => write!(f, "SE V{:X}, V{:X}", x, y),
            Op::LdImm => write!(f, "LD V{:X}, {:02X}", x, kk),
            Op::AddImm => write!(f, "ADD V{:X}, {:02X}", x, kk),
            Op::Alu(alu) => write!(f, "{} V{:X}, V{:X}", alu.mnemonic(), x, y),
            Op::SneReg => write!(f, "SNE V{:X}, V{:X}", x, y),
            Op::LdI => write!(f, "LD I, {:03X}", nnn),
            Op::JpV0 => write!(f, "JP V0, {:03X}", nnn),
            Op::Rnd => write!(f, "RND V{:X}, {:02X}", x, kk),
            Op::Drw => write!(f, "DRW V{:X}, V{:X}, {:X}", x, y, n),
            Op::Skp => write!(f, "SKP V{:X}", x),
            Op::Sknp => write!(f, "SKNP V{:X}", x),
            Op::LdVxDt => write!(f, "LD V{:X}, DT", x),
            Op::LdK => write!(f, "LD V{:X}, K", x),
            Op::LdDtVx => write!(f, "LD DT, V{:X}", x),
            Op::LdStVx => write!(f, "LD ST, V{:X}", x),
            Op::AddI => write!(f, "ADD I, V{:X}", x),
            Op::LdF => write!(f, "LD F, V{:X}", x),
            Op::LdBcd => write!(f, "LD B, V{:X}", x),
            Op::StRegs => write!(f, "LD [I], V{:X}", x),
            Op::LdRegs => write!(f, "LD V{:X}, [I]", x),
            Op::Invalid => write!(f, "???"),
        }
    }
}
