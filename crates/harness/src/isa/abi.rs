//! MIPS ABI register name constants.
//!
//! Defines the conventional O32 register names and their indices. Register
//! `$zero` is hardwired to zero; the harness refuses back-door writes to it.

/// Register 0 (`$zero`, hardwired zero).
pub const REG_ZERO: usize = 0;
/// Register 1 (`$at`, assembler temporary).
pub const REG_AT: usize = 1;
/// Register 2 (`$v0`, return value).
pub const REG_V0: usize = 2;
/// Register 3 (`$v1`, return value).
pub const REG_V1: usize = 3;
/// Register 4 (`$a0`, first argument).
pub const REG_A0: usize = 4;
/// Register 5 (`$a1`, second argument).
pub const REG_A1: usize = 5;
/// Register 6 (`$a2`, third argument).
pub const REG_A2: usize = 6;
/// Register 7 (`$a3`, fourth argument).
pub const REG_A3: usize = 7;
/// Register 8 (`$t0`, caller-saved temporary).
pub const REG_T0: usize = 8;
/// Register 9 (`$t1`, caller-saved temporary).
pub const REG_T1: usize = 9;
/// Register 10 (`$t2`, caller-saved temporary).
pub const REG_T2: usize = 10;
/// Register 11 (`$t3`, caller-saved temporary).
pub const REG_T3: usize = 11;
/// Register 12 (`$t4`, caller-saved temporary).
pub const REG_T4: usize = 12;
/// Register 13 (`$t5`, caller-saved temporary).
pub const REG_T5: usize = 13;
/// Register 14 (`$t6`, caller-saved temporary).
pub const REG_T6: usize = 14;
/// Register 15 (`$t7`, caller-saved temporary).
pub const REG_T7: usize = 15;
/// Register 16 (`$s0`, callee-saved).
pub const REG_S0: usize = 16;
/// Register 17 (`$s1`, callee-saved).
pub const REG_S1: usize = 17;
/// Register 18 (`$s2`, callee-saved).
pub const REG_S2: usize = 18;
/// Register 19 (`$s3`, callee-saved).
pub const REG_S3: usize = 19;
/// Register 20 (`$s4`, callee-saved).
pub const REG_S4: usize = 20;
/// Register 21 (`$s5`, callee-saved).
pub const REG_S5: usize = 21;
/// Register 22 (`$s6`, callee-saved).
pub const REG_S6: usize = 22;
/// Register 23 (`$s7`, callee-saved).
pub const REG_S7: usize = 23;
/// Register 24 (`$t8`, caller-saved temporary).
pub const REG_T8: usize = 24;
/// Register 25 (`$t9`, caller-saved temporary).
pub const REG_T9: usize = 25;
/// Register 26 (`$k0`, kernel reserved).
pub const REG_K0: usize = 26;
/// Register 27 (`$k1`, kernel reserved).
pub const REG_K1: usize = 27;
/// Register 28 (`$gp`, global pointer).
pub const REG_GP: usize = 28;
/// Register 29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register 30 (`$fp`, frame pointer).
pub const REG_FP: usize = 30;
/// Register 31 (`$ra`, return address).
pub const REG_RA: usize = 31;
