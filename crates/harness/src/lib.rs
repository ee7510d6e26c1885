//! MIPS-I verification harness library.
//!
//! This crate drives a cycle-accurate MIPS-I class processor model through a
//! deterministic two-phase clock protocol. It provides the following:
//! 1. **ISA:** Bit-exact encode/decode for the three MIPS instruction formats
//!    (R, I, J), plus opcode, funct, and ABI register tables.
//! 2. **Harness:** A `Testbench` implementing reset sequencing, two-phase
//!    ticking, waveform synchronization, and back-door state injection
//!    against an opaque device under test.
//! 3. **Trace:** A `TraceSink` boundary and a VCD file sink.
//! 4. **Core:** A behavioral single-cycle MIPS-I integer core usable as the
//!    device under test.

/// Common types (error definitions).
pub mod common;
/// Harness configuration (defaults, trace and memory sizing).
pub mod config;
/// Behavioral single-cycle MIPS-I core.
pub mod core;
/// Testbench driver and the device-under-test boundary.
pub mod harness;
/// Instruction set (codec, opcode/funct tables, ABI register names).
pub mod isa;
/// Waveform trace sinks.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Behavioral MIPS-I core; the stock device under test.
pub use crate::core::MipsCore;
/// Harness error type for contract violations and trace I/O failures.
pub use crate::common::HarnessError;
/// Testbench driver; owns the device under test and the trace sink.
pub use crate::harness::Testbench;
/// VCD waveform sink; the stock trace implementation.
pub use crate::trace::VcdSink;
