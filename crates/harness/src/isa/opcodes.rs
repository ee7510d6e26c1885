//! MIPS-I primary opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the integer instruction set.
//! `OP_RTYPE` is the escape value selecting the register format; the
//! specific operation then comes from the funct field.

/// Register-format escape; the funct field selects the operation.
pub const OP_RTYPE: u32 = 0b000000;

/// Add Immediate (traps on signed overflow in real hardware).
pub const OP_ADDI: u32 = 0b001000;

/// Add Immediate Unsigned (no overflow trap).
pub const OP_ADDIU: u32 = 0b001001;

/// Set on Less Than Immediate (signed compare).
pub const OP_SLTI: u32 = 0b001010;

/// Set on Less Than Immediate Unsigned.
pub const OP_SLTIU: u32 = 0b001011;

/// AND Immediate (zero-extended).
pub const OP_ANDI: u32 = 0b001100;

/// OR Immediate (zero-extended).
pub const OP_ORI: u32 = 0b001101;

/// XOR Immediate (zero-extended).
pub const OP_XORI: u32 = 0b001110;

/// Load Upper Immediate.
pub const OP_LUI: u32 = 0b001111;

/// Jump.
pub const OP_J: u32 = 0b000010;

/// Jump And Link.
pub const OP_JAL: u32 = 0b000011;

/// Branch on Equal.
pub const OP_BEQ: u32 = 0b000100;

/// Branch on Not Equal.
pub const OP_BNE: u32 = 0b000101;

/// Branch on Less Than or Equal to Zero.
pub const OP_BLEZ: u32 = 0b000110;

/// Branch on Greater Than Zero.
pub const OP_BGTZ: u32 = 0b000111;

/// Load Byte (sign-extended).
pub const OP_LB: u32 = 0b100000;

/// Load Halfword (sign-extended).
pub const OP_LH: u32 = 0b100001;

/// Load Word.
pub const OP_LW: u32 = 0b100011;

/// Load Byte Unsigned.
pub const OP_LBU: u32 = 0b100100;

/// Load Halfword Unsigned.
pub const OP_LHU: u32 = 0b100101;

/// Store Byte.
pub const OP_SB: u32 = 0b101000;

/// Store Halfword.
pub const OP_SH: u32 = 0b101001;

/// Store Word.
pub const OP_SW: u32 = 0b101011;
