//! Waveform tracing.
//!
//! This module defines the trace boundary of the harness:
//! 1. **Signals:** A flat snapshot format for device state (`Signal`).
//! 2. **Sink Trait:** The `TraceSink` collaborator receiving timestamped
//!    dumps with a flush/close lifecycle.
//! 3. **VCD Sink:** A Value Change Dump file writer.
//!
//! Timestamps are monotonically increasing half-cycle indices, two per
//! tick. The on-disk format is owned entirely by the sink implementation.

use std::path::Path;

use crate::common::HarnessError;

/// VCD file writer.
pub mod vcd;

pub use vcd::VcdSink;

/// One named device signal and its current value.
///
/// Names are dotted hierarchical paths (`"cpu.pc"`); the harness filters
/// them against the configured trace depth before handing them to the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signal {
    /// Hierarchical signal name. Must be stable across snapshots.
    pub name: &'static str,
    /// Signal width in bits (1-64).
    pub width: u8,
    /// Current value, zero-extended to 64 bits.
    pub value: u64,
}

impl Signal {
    /// Creates a signal snapshot entry.
    pub const fn new(name: &'static str, width: u8, value: u64) -> Self {
        Self { name, width, value }
    }

    /// Number of dot-separated segments in the signal's path.
    pub fn depth(&self) -> u32 {
        self.name.split('.').count() as u32
    }
}

/// Trait for waveform trace sinks.
///
/// A sink is driven by the harness through a strict lifecycle: one `open`,
/// any number of `dump`/`flush` pairs with strictly increasing timestamps,
/// then exactly one `close`. `dump` and `flush` before `open` or after
/// `close` must be ignored.
pub trait TraceSink {
    /// Opens the trace file at `path`.
    fn open(&mut self, path: &Path) -> Result<(), HarnessError>;

    /// Whether the sink currently has an open trace file.
    fn is_open(&self) -> bool;

    /// Records a snapshot of the device signals at `timestamp`.
    ///
    /// Timestamps are half-cycle indices: `2*tick` for the clock-low phase
    /// and `2*tick + 1` for the clock-high phase.
    fn dump(&mut self, timestamp: u64, signals: &[Signal]);

    /// Flushes buffered trace data to the file.
    fn flush(&mut self);

    /// Closes the trace file. Idempotent.
    fn close(&mut self);
}
