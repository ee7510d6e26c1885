use mipstb_core::harness::Dut;
use mipstb_core::trace::Signal;

use crate::common::mocks::{Event, EventLog};

/// Recording fake device.
///
/// Stores back-door writes verbatim (except the hardwired zero register)
/// and logs every harness interaction to the shared event log. `finished`
/// can be latched by the test to exercise termination polling.
pub struct MockDut {
    pub log: EventLog,
    pub regs: [u32; 32],
    pub instr: Vec<(usize, u32)>,
    pub mem: Vec<(usize, u8)>,
    pub finished: bool,
    pub evals: u64,
}

impl MockDut {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            regs: [0; 32],
            instr: Vec::new(),
            mem: Vec::new(),
            finished: false,
            evals: 0,
        }
    }
}

impl Dut for MockDut {
    fn set_clock(&mut self, high: bool) {
        self.log.borrow_mut().push(Event::SetClock(high));
    }

    fn set_reset(&mut self, asserted: bool) {
        self.log.borrow_mut().push(Event::SetReset(asserted));
    }

    fn eval(&mut self) {
        self.log.borrow_mut().push(Event::Eval);
        self.evals += 1;
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn write_instruction(&mut self, index: usize, word: u32) {
        self.instr.push((index, word));
    }

    fn write_register(&mut self, index: usize, value: u32) {
        if index != 0 {
            self.regs[index] = value;
        }
    }

    fn read_register(&self, index: usize) -> u32 {
        if index == 0 { 0 } else { self.regs[index] }
    }

    fn write_data_byte(&mut self, addr: usize, value: u8) {
        self.mem.push((addr, value));
    }

    fn read_data_byte(&self, addr: usize) -> u8 {
        self.mem
            .iter()
            .rev()
            .find(|(a, _)| *a == addr)
            .map_or(0, |(_, v)| *v)
    }

    fn signals(&self) -> Vec<Signal> {
        vec![
            Signal::new("clk", 1, 0),
            Signal::new("cpu.pc", 32, 0),
            Signal::new("cpu.alu.result", 32, 0),
        ]
    }
}
