//! Testbench: reset, clocked stepping, trace synchronization, injection.
//!
//! One `Testbench` owns one device and one trace sink for its whole
//! lifetime and drives them from a single sequential caller. Each tick is
//! two ordered half-cycles (clock-low then clock-high), each separately
//! evaluated and dumped; the trace is flushed and the tick counter
//! incremented only after both halves complete, so tick-indexed state is
//! never observed mid-cycle.

use std::path::Path;

use tracing::{debug, trace};

use crate::common::HarnessError;
use crate::config::Config;
use crate::harness::Dut;
use crate::trace::{Signal, TraceSink};

/// Testbench driver for an opaque device under test.
///
/// The device and sink are supplied at construction; tracing is off until
/// [`open_trace`](Self::open_trace) is called. [`reset`](Self::reset) must
/// run before any [`tick`](Self::tick) used for program execution. On drop
/// the trace, if open, is closed exactly once.
pub struct Testbench<D: Dut, T: TraceSink> {
    dut: D,
    sink: T,
    ticks: u64,
    trace_depth: u32,
}

impl<D: Dut, T: TraceSink> Testbench<D, T> {
    /// Creates a testbench owning `dut` and `sink`.
    pub fn new(dut: D, sink: T, config: &Config) -> Self {
        Self {
            dut,
            sink,
            ticks: 0,
            trace_depth: config.trace_depth,
        }
    }

    /// Opens the waveform trace at `path`.
    ///
    /// Idempotent: a second call while a trace is already open is a no-op,
    /// not an error and not a second file.
    pub fn open_trace(&mut self, path: &Path) -> Result<(), HarnessError> {
        if self.sink.is_open() {
            return Ok(());
        }
        self.sink.open(path)?;
        debug!(path = %path.display(), depth = self.trace_depth, "trace opened");
        Ok(())
    }

    /// Resets the device: assert the reset line, run exactly one full tick,
    /// deassert.
    ///
    /// This is the only sanctioned device initialization. The reset cycle
    /// counts toward the tick counter and is dumped like any other cycle.
    pub fn reset(&mut self) {
        debug!("reset");
        self.dut.set_reset(true);
        self.tick();
        self.dut.set_reset(false);
    }

    /// Advances simulated time by one full clock cycle.
    ///
    /// Both half-cycles are evaluated and dumped in order (low at
    /// `2*ticks`, high at `2*ticks + 1`), then the trace is flushed and
    /// the tick counter incremented. A tick always completes both halves.
    pub fn tick(&mut self) {
        for half in 0..2u64 {
            self.dut.set_clock(half == 1);
            self.dut.eval();
            if self.sink.is_open() {
                let signals = self.visible_signals();
                self.sink.dump(2 * self.ticks + half, &signals);
            }
        }

        if self.sink.is_open() {
            self.sink.flush();
        }
        self.ticks += 1;
        trace!(ticks = self.ticks, "tick complete");
    }

    /// Polls the device's one-shot finished signal. Pure query.
    pub fn done(&self) -> bool {
        self.dut.finished()
    }

    /// Number of completed ticks, including the reset cycle.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Back-door write of an encoded instruction into device instruction
    /// memory at word-address `index`.
    ///
    /// Unchecked poke: bounds are the device storage's concern. Only call
    /// between ticks.
    pub fn set_instruction(&mut self, index: usize, word: u32) {
        trace!(index, word, "set_instruction");
        self.dut.write_instruction(index, word);
    }

    /// Back-door write into the device register file.
    ///
    /// # Errors
    ///
    /// Rejects index 0 (`$zero` is hardwired and must never be written)
    /// and any index above 31, without touching device storage.
    pub fn set_register(&mut self, index: usize, value: u32) -> Result<(), HarnessError> {
        if index == 0 {
            return Err(HarnessError::ZeroRegisterWrite);
        }
        if index > 31 {
            return Err(HarnessError::RegisterIndexOutOfRange { index });
        }
        trace!(index, value, "set_register");
        self.dut.write_register(index, value);
        Ok(())
    }

    /// Back-door write of one byte into device data memory.
    ///
    /// Unchecked poke: bounds are the device storage's concern. Only call
    /// between ticks.
    pub fn set_memory(&mut self, addr: usize, value: u8) {
        trace!(addr, value, "set_memory");
        self.dut.write_data_byte(addr, value);
    }

    /// Shared access to the device under test.
    pub fn dut(&self) -> &D {
        &self.dut
    }

    /// Mutable access to the device under test. Only use between ticks.
    pub fn dut_mut(&mut self) -> &mut D {
        &mut self.dut
    }

    /// Device signals at or above the configured trace depth.
    fn visible_signals(&self) -> Vec<Signal> {
        self.dut
            .signals()
            .into_iter()
            .filter(|sig| sig.depth() <= self.trace_depth)
            .collect()
    }
}

impl<D: Dut, T: TraceSink> Drop for Testbench<D, T> {
    fn drop(&mut self) {
        if self.sink.is_open() {
            self.sink.close();
        }
    }
}
