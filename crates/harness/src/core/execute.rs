//! Instruction execution for the behavioral core.
//!
//! One instruction per rising clock edge. Arithmetic is wrapping: the
//! behavioral model takes the ADD/ADDI overflow trap of real MIPS hardware
//! out of scope and treats the signed and unsigned variants identically.
//! Data memory is big-endian, the classic MIPS byte order. Out-of-range
//! memory accesses read zero and drop writes; bounds are this storage's
//! own concern, not an error surface.

use tracing::warn;

use crate::core::MipsCore;
use crate::isa::codec::FieldBits;
use crate::isa::funct::*;
use crate::isa::opcodes::*;

impl MipsCore {
    /// Fetches, decodes, and retires one instruction.
    pub(super) fn step(&mut self) {
        let index = (self.pc / 4) as usize;
        let past_program = self.highest_loaded.is_none_or(|hi| index > hi);
        if past_program || index >= self.instr_mem.len() {
            // Running off the loaded program is the $finish analogue.
            self.finished = true;
            return;
        }

        let word = self.instr_mem[index];
        self.current_instr = word;
        let mut next_pc = self.pc.wrapping_add(4);

        let rs = self.regs.read(word.rs());
        let rt = self.regs.read(word.rt());
        let simm = i32::from(word.immediate() as u16 as i16);
        let zimm = word.immediate();

        match word.opcode() {
            OP_RTYPE => next_pc = self.execute_rtype(word, next_pc),
            OP_ADDI | OP_ADDIU => self.regs.write(word.rt(), rs.wrapping_add(simm as u32)),
            OP_SLTI => self
                .regs
                .write(word.rt(), u32::from((rs as i32) < simm)),
            OP_SLTIU => self.regs.write(word.rt(), u32::from(rs < simm as u32)),
            OP_ANDI => self.regs.write(word.rt(), rs & zimm),
            OP_ORI => self.regs.write(word.rt(), rs | zimm),
            OP_XORI => self.regs.write(word.rt(), rs ^ zimm),
            OP_LUI => self.regs.write(word.rt(), zimm << 16),

            OP_BEQ if rs == rt => next_pc = branch_target(self.pc, simm),
            OP_BNE if rs != rt => next_pc = branch_target(self.pc, simm),
            OP_BLEZ if (rs as i32) <= 0 => next_pc = branch_target(self.pc, simm),
            OP_BGTZ if (rs as i32) > 0 => next_pc = branch_target(self.pc, simm),
            OP_BEQ | OP_BNE | OP_BLEZ | OP_BGTZ => {}

            OP_J => next_pc = jump_target(self.pc, word.target()),
            OP_JAL => {
                self.regs.write(31, self.pc.wrapping_add(4));
                next_pc = jump_target(self.pc, word.target());
            }

            OP_LB => {
                let byte = self.load_byte(rs, simm);
                self.regs.write(word.rt(), i32::from(byte as i8) as u32);
            }
            OP_LBU => {
                let byte = self.load_byte(rs, simm);
                self.regs.write(word.rt(), u32::from(byte));
            }
            OP_LH => {
                let half = self.load_half(rs, simm);
                self.regs.write(word.rt(), i32::from(half as i16) as u32);
            }
            OP_LHU => {
                let half = self.load_half(rs, simm);
                self.regs.write(word.rt(), u32::from(half));
            }
            OP_LW => {
                let val = self.load_word(rs, simm);
                self.regs.write(word.rt(), val);
            }
            OP_SB => self.store_byte(rs, simm, rt as u8),
            OP_SH => self.store_half(rs, simm, rt as u16),
            OP_SW => self.store_word(rs, simm, rt),

            opcode => warn!(opcode, pc = self.pc, "unknown opcode; treated as nop"),
        }

        self.pc = next_pc;
    }

    /// Dispatches a register-format instruction; returns the next pc.
    fn execute_rtype(&mut self, word: u32, fallthrough: u32) -> u32 {
        let rs = self.regs.read(word.rs());
        let rt = self.regs.read(word.rt());
        let rd = word.rd();
        let shamt = word.shamt();
        let mut next_pc = fallthrough;

        match word.funct() {
            FN_ADD | FN_ADDU => self.regs.write(rd, rs.wrapping_add(rt)),
            FN_SUB | FN_SUBU => self.regs.write(rd, rs.wrapping_sub(rt)),
            FN_AND => self.regs.write(rd, rs & rt),
            FN_OR => self.regs.write(rd, rs | rt),
            FN_XOR => self.regs.write(rd, rs ^ rt),
            FN_NOR => self.regs.write(rd, !(rs | rt)),
            FN_SLT => self.regs.write(rd, u32::from((rs as i32) < (rt as i32))),
            FN_SLTU => self.regs.write(rd, u32::from(rs < rt)),
            FN_SLL => self.regs.write(rd, rt << shamt),
            FN_SRL => self.regs.write(rd, rt >> shamt),
            FN_SRA => self.regs.write(rd, ((rt as i32) >> shamt) as u32),
            FN_SLLV => self.regs.write(rd, rt << (rs & 31)),
            FN_SRLV => self.regs.write(rd, rt >> (rs & 31)),
            FN_SRAV => self.regs.write(rd, ((rt as i32) >> (rs & 31)) as u32),
            FN_JR => next_pc = rs,
            FN_JALR => {
                self.regs.write(rd, self.pc.wrapping_add(4));
                next_pc = rs;
            }
            funct => warn!(funct, pc = self.pc, "unknown funct; treated as nop"),
        }

        next_pc
    }

    fn mem_addr(base: u32, offset: i32) -> usize {
        base.wrapping_add(offset as u32) as usize
    }

    fn load_byte(&self, base: u32, offset: i32) -> u8 {
        self.load_byte_at(Self::mem_addr(base, offset))
    }

    fn load_half(&self, base: u32, offset: i32) -> u16 {
        let addr = Self::mem_addr(base, offset);
        u16::from(self.load_byte_at(addr)) << 8 | u16::from(self.load_byte_at(addr + 1))
    }

    fn load_word(&self, base: u32, offset: i32) -> u32 {
        let addr = Self::mem_addr(base, offset);
        (0..4).fold(0u32, |acc, i| acc << 8 | u32::from(self.load_byte_at(addr + i)))
    }

    fn load_byte_at(&self, addr: usize) -> u8 {
        self.data_mem.get(addr).copied().unwrap_or(0)
    }

    fn store_byte_at(&mut self, addr: usize, value: u8) {
        if let Some(slot) = self.data_mem.get_mut(addr) {
            *slot = value;
        }
    }

    fn store_byte(&mut self, base: u32, offset: i32, value: u8) {
        self.store_byte_at(Self::mem_addr(base, offset), value);
    }

    fn store_half(&mut self, base: u32, offset: i32, value: u16) {
        let addr = Self::mem_addr(base, offset);
        self.store_byte_at(addr, (value >> 8) as u8);
        self.store_byte_at(addr + 1, value as u8);
    }

    fn store_word(&mut self, base: u32, offset: i32, value: u32) {
        let addr = Self::mem_addr(base, offset);
        for i in 0..4 {
            self.store_byte_at(addr + i, (value >> (24 - 8 * i)) as u8);
        }
    }
}

/// Branch target: `pc + 4 + (sign_extended_offset << 2)`.
fn branch_target(pc: u32, simm: i32) -> u32 {
    pc.wrapping_add(4).wrapping_add((simm << 2) as u32)
}

/// Jump target: the 26-bit word target spliced into the high bits of
/// `pc + 4`.
fn jump_target(pc: u32, target: u32) -> u32 {
    (pc.wrapping_add(4) & 0xF000_0000) | (target << 2)
}
