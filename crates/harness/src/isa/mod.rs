//! MIPS-I instruction set definitions.
//!
//! This module covers the architectural constants and the instruction codec:
//! 1. **Opcodes:** Primary (6-bit) opcode values for the integer ISA.
//! 2. **Funct:** Secondary function codes for register-type instructions.
//! 3. **ABI:** Conventional register names and indices.
//! 4. **Codec:** Bit-exact encode/decode for the R/I/J formats.
//!
//! The codec never infers an instruction's format from a raw word; the
//! opcode-to-format mapping is policy owned by the caller.

/// ABI register name constants.
pub mod abi;
/// Encode/decode for the three instruction formats.
pub mod codec;
/// Function codes for register-type instructions.
pub mod funct;
/// Primary opcode values.
pub mod opcodes;

pub use codec::{
    FieldBits, IType, Instruction, JType, RType, decode_i, decode_j, decode_r, encode_i, encode_j,
    encode_r,
};
