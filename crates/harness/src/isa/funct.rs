//! MIPS-I function codes.
//!
//! Defines the funct field values (bits 5-0) selecting the operation of a
//! register-format instruction. Only meaningful when the opcode is
//! `OP_RTYPE`.

/// Add (traps on signed overflow in real hardware).
pub const FN_ADD: u32 = 0b100000;

/// Add Unsigned (wrapping).
pub const FN_ADDU: u32 = 0b100001;

/// Subtract (traps on signed overflow in real hardware).
pub const FN_SUB: u32 = 0b100010;

/// Subtract Unsigned (wrapping).
pub const FN_SUBU: u32 = 0b100011;

/// Bitwise AND.
pub const FN_AND: u32 = 0b100100;

/// Bitwise OR.
pub const FN_OR: u32 = 0b100101;

/// Bitwise XOR.
pub const FN_XOR: u32 = 0b100110;

/// Bitwise NOR.
pub const FN_NOR: u32 = 0b100111;

/// Set on Less Than (signed compare).
pub const FN_SLT: u32 = 0b101010;

/// Set on Less Than Unsigned.
pub const FN_SLTU: u32 = 0b101011;

/// Shift Left Logical (by shamt).
pub const FN_SLL: u32 = 0b000000;

/// Shift Right Logical (by shamt).
pub const FN_SRL: u32 = 0b000010;

/// Shift Right Arithmetic (by shamt).
pub const FN_SRA: u32 = 0b000011;

/// Shift Left Logical Variable (by rs).
pub const FN_SLLV: u32 = 0b000100;

/// Shift Right Logical Variable (by rs).
pub const FN_SRLV: u32 = 0b000110;

/// Shift Right Arithmetic Variable (by rs).
pub const FN_SRAV: u32 = 0b000111;

/// Jump Register.
pub const FN_JR: u32 = 0b001000;

/// Jump And Link Register.
pub const FN_JALR: u32 = 0b001001;
