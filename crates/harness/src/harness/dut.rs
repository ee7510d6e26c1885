//! Device-under-test boundary.
//!
//! The harness drives an opaque processor model through this capability
//! trait rather than a concrete type, so the stepping protocol can be
//! exercised against a lightweight fake in tests and against any backend
//! in production. The trait mirrors a synthesized core's outer surface:
//! two single-bit inputs (clock, reset), an evaluate operation, a one-shot
//! finished signal, and direct access to the internal storage arrays used
//! for back-door test setup.

use crate::trace::Signal;

/// Capability interface for the device under test.
///
/// The back-door accessors write straight into internal storage, bypassing
/// the fetch/load/store interfaces the device uses during execution. They
/// must only be called between ticks, never mid-cycle. Index 0 of the
/// register file is hardwired to zero: implementations ignore writes to it,
/// and the harness additionally rejects them before they get here.
pub trait Dut {
    /// Drives the clock input to the given level.
    fn set_clock(&mut self, high: bool);

    /// Drives the reset input.
    fn set_reset(&mut self, asserted: bool);

    /// Evaluates the device's combinational and sequential update for the
    /// current input levels.
    fn eval(&mut self);

    /// Polls the one-shot "simulation finished" signal. Pure query.
    fn finished(&self) -> bool;

    /// Back-door write of an encoded instruction word at word-address
    /// `index` in instruction memory.
    fn write_instruction(&mut self, index: usize, word: u32);

    /// Back-door write into the register file.
    ///
    /// Implementations must preserve the hardwired zero register.
    fn write_register(&mut self, index: usize, value: u32);

    /// Reads a register file entry. Index 0 always reads zero.
    fn read_register(&self, index: usize) -> u32;

    /// Back-door write of one byte into data memory at `addr`.
    fn write_data_byte(&mut self, addr: usize, value: u8);

    /// Reads one byte of data memory at `addr`.
    fn read_data_byte(&self, addr: usize) -> u8;

    /// Snapshots the device signals for waveform tracing.
    ///
    /// Names and ordering must be stable across calls; the harness filters
    /// the snapshot against the configured trace depth.
    fn signals(&self) -> Vec<Signal>;
}
