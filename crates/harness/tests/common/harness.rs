use mipstb_core::harness::Dut;
use mipstb_core::{Config, MipsCore, Testbench};

use crate::common::mocks::event_log;
use crate::common::mocks::sink::MockSink;

/// Convenience alias used by the context.
pub type BenchUnderTest = Testbench<MipsCore, MockSink>;

/// Test context: a real behavioral core behind the testbench, traced into
/// a recording sink.
pub struct TestContext {
    pub bench: BenchUnderTest,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let config = Config::default();
        let core = MipsCore::new(&config.core);
        let bench = Testbench::new(core, MockSink::new(event_log()), &config);
        Self { bench }
    }

    /// Reset, then back-door load `instructions` in ascending index order.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        self.bench.reset();
        for (i, word) in instructions.iter().enumerate() {
            self.bench.set_instruction(i, *word);
        }
        self
    }

    /// Read a register through the device boundary.
    pub fn reg(&self, idx: usize) -> u32 {
        self.bench.dut().read_register(idx)
    }

    /// Read a data memory byte through the device boundary.
    pub fn mem(&self, addr: usize) -> u8 {
        self.bench.dut().read_data_byte(addr)
    }

    /// Tick until the core signals finished or `max_ticks` elapse.
    /// Returns `true` when the core finished.
    pub fn run_until_done(&mut self, max_ticks: u64) -> bool {
        while !self.bench.done() {
            if self.bench.ticks() >= max_ticks {
                return false;
            }
            self.bench.tick();
        }
        true
    }
}
