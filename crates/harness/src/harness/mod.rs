//! Testbench driver and device boundary.
//!
//! This module implements the clock-stepping and test-injection protocol:
//! 1. **Device Boundary:** The `Dut` capability trait an opaque device
//!    model implements (clock/reset inputs, evaluate, back-door storage
//!    access, finished signal, signal snapshots).
//! 2. **Driver:** The `Testbench` owning one device and one trace sink,
//!    sequencing reset, two-phase ticks, waveform dumps, and back-door
//!    state injection.

/// Device-under-test capability trait.
pub mod dut;
/// Testbench driver.
pub mod testbench;

pub use dut::Dut;
pub use testbench::Testbench;
