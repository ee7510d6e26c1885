//! Instruction encoding and decoding.
//!
//! Bit-exact packing and unpacking for the three MIPS-I instruction formats:
//!
//! - R-type: `opcode(6)=0 | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)`
//! - I-type: `opcode(6) | rs(5) | rt(5) | immediate(16)`
//! - J-type: `opcode(6) | target(26)`
//!
//! Every field is masked to its declared width before packing; out-of-range
//! inputs are truncated, never rejected. Decoding extracts at the same bit
//! positions with the same widths, so decode-then-reencode with the matching
//! format reproduces the original word exactly. The immediate is packed
//! verbatim; sign extension, where an instruction calls for it, happens at
//! execution time in the device, not here.

/// Bit mask for the 6-bit opcode field (bits 31-26).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 5-bit shift amount field (bits 10-6).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for the 6-bit funct field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the rd field.
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shamt field.
pub const SHAMT_SHIFT: u32 = 6;

use crate::isa::opcodes::OP_RTYPE;

/// Trait for extracting instruction fields from encoded words.
///
/// Extraction uses the same bit positions and widths as the encoders, for
/// all fields of all three formats. Which fields are meaningful for a given
/// word is the caller's concern; the codec never infers the format.
pub trait FieldBits {
    /// Extracts the 6-bit opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the 5-bit rs field (bits 25-21).
    ///
    /// Returns the register index (0-31) of the first source operand.
    fn rs(&self) -> usize;

    /// Extracts the 5-bit rt field (bits 20-16).
    ///
    /// Returns the register index (0-31) of the second source operand, or
    /// the destination for I-type instructions.
    fn rt(&self) -> usize;

    /// Extracts the 5-bit rd field (bits 15-11).
    ///
    /// Returns the destination register index (0-31) for R-type
    /// instructions. Register 0 (`$zero`) is hardwired and writes to it
    /// are ignored by the device.
    fn rd(&self) -> usize;

    /// Extracts the 5-bit shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the 6-bit funct field (bits 5-0).
    ///
    /// Selects the operation when the opcode is the register-type escape.
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate field (bits 15-0), raw.
    ///
    /// No sign extension is applied; extension is the device's concern at
    /// execution time.
    fn immediate(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 25-0).
    fn target(&self) -> u32;
}

impl FieldBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn immediate(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Encodes a register-format (R-type) instruction.
///
/// The opcode is forced to the register-type escape value; the operation is
/// selected by `funct`. All fields are masked to their declared widths.
#[inline]
pub fn encode_r(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    (OP_RTYPE & OPCODE_MASK) << OPCODE_SHIFT
        | (rs & REG_MASK) << RS_SHIFT
        | (rt & REG_MASK) << RT_SHIFT
        | (rd & REG_MASK) << RD_SHIFT
        | (shamt & SHAMT_MASK) << SHAMT_SHIFT
        | (funct & FUNCT_MASK)
}

/// Encodes an immediate-format (I-type) instruction.
///
/// The immediate occupies the low 16 bits verbatim; values wider than
/// 16 bits are truncated.
#[inline]
pub fn encode_i(opcode: u32, rs: u32, rt: u32, immediate: u32) -> u32 {
    (opcode & OPCODE_MASK) << OPCODE_SHIFT
        | (rs & REG_MASK) << RS_SHIFT
        | (rt & REG_MASK) << RT_SHIFT
        | (immediate & IMM_MASK)
}

/// Encodes a jump-format (J-type) instruction.
///
/// The target is masked to 26 bits.
#[inline]
pub fn encode_j(opcode: u32, target: u32) -> u32 {
    (opcode & OPCODE_MASK) << OPCODE_SHIFT | (target & TARGET_MASK)
}

/// Decoded register-format fields.
///
/// The opcode is not carried: every R-type word encodes the fixed
/// register-type escape, which `encode_r` restores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RType {
    /// First source register index.
    pub rs: u32,
    /// Second source register index.
    pub rt: u32,
    /// Destination register index.
    pub rd: u32,
    /// Shift amount.
    pub shamt: u32,
    /// Function code selecting the operation.
    pub funct: u32,
}

/// Decoded immediate-format fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IType {
    /// Primary opcode.
    pub opcode: u32,
    /// Source register index.
    pub rs: u32,
    /// Target register index (destination for loads and immediates).
    pub rt: u32,
    /// Raw 16-bit immediate, not sign-extended.
    pub immediate: u32,
}

/// Decoded jump-format fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JType {
    /// Primary opcode.
    pub opcode: u32,
    /// 26-bit jump target (word address within the current 256 MiB region).
    pub target: u32,
}

/// Decodes the R-type fields of an instruction word.
#[inline]
pub fn decode_r(word: u32) -> RType {
    RType {
        rs: word.rs() as u32,
        rt: word.rt() as u32,
        rd: word.rd() as u32,
        shamt: word.shamt(),
        funct: word.funct(),
    }
}

/// Decodes the I-type fields of an instruction word.
#[inline]
pub fn decode_i(word: u32) -> IType {
    IType {
        opcode: word.opcode(),
        rs: word.rs() as u32,
        rt: word.rt() as u32,
        immediate: word.immediate(),
    }
}

/// Decodes the J-type fields of an instruction word.
#[inline]
pub fn decode_j(word: u32) -> JType {
    JType {
        opcode: word.opcode(),
        target: word.target(),
    }
}

/// A decoded instruction, tagged by format.
///
/// The format tag is supplied by whoever decoded the word; the codec itself
/// never maps opcodes to formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register format.
    R(RType),
    /// Immediate format.
    I(IType),
    /// Jump format.
    J(JType),
}

impl Instruction {
    /// Re-encodes this instruction into its 32-bit word.
    ///
    /// Format-stable: decoding a word with the format-appropriate decoder
    /// and converting back yields the original word exactly.
    #[inline]
    pub fn word(&self) -> u32 {
        match *self {
            Self::R(r) => encode_r(r.rs, r.rt, r.rd, r.shamt, r.funct),
            Self::I(i) => encode_i(i.opcode, i.rs, i.rt, i.immediate),
            Self::J(j) => encode_j(j.opcode, j.target),
        }
    }
}

impl From<Instruction> for u32 {
    fn from(instr: Instruction) -> Self {
        instr.word()
    }
}
