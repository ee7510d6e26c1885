//! Behavioral single-cycle MIPS-I core.
//!
//! A lightweight device model implementing the [`Dut`] boundary:
//! 1. **State:** Program counter, 32-entry register file with `$zero`
//!    hardwired, word-indexed instruction memory, byte-addressable
//!    big-endian data memory.
//! 2. **Clocking:** `eval` detects rising clock edges; one instruction
//!    retires per rising edge when reset is deasserted.
//! 3. **Termination:** The core latches its one-shot finished signal when
//!    the program counter runs past the highest instruction loaded through
//!    the back door.
//!
//! The model is architectural, not microarchitectural: no pipeline, no
//! branch delay slots. Branches and jumps take effect on the next fetch
//! and the link registers receive `pc + 4`.

use crate::config::CoreConfig;
use crate::harness::Dut;
use crate::trace::Signal;

mod execute;

/// 32-entry general-purpose register file.
///
/// Register 0 (`$zero`) is hardwired: it always reads zero and writes to
/// it are ignored.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; 32],
}

impl RegisterFile {
    /// Creates a register file with all registers zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads register `idx`. Register 0 always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx & 31] }
    }

    /// Writes `val` to register `idx`. Writes to register 0 are ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx & 31] = val;
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Behavioral MIPS-I integer core.
#[derive(Debug)]
pub struct MipsCore {
    pc: u32,
    regs: RegisterFile,
    instr_mem: Vec<u32>,
    data_mem: Vec<u8>,
    /// Highest word index written through the back door; fetching past it
    /// terminates the simulation.
    highest_loaded: Option<usize>,
    clock_in: bool,
    clock_state: bool,
    reset_in: bool,
    finished: bool,
    current_instr: u32,
}

impl MipsCore {
    /// Creates a core with memories sized per `config`.
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            pc: 0,
            regs: RegisterFile::new(),
            instr_mem: vec![0; config.instr_words],
            data_mem: vec![0; config.data_bytes],
            highest_loaded: None,
            clock_in: false,
            clock_state: false,
            reset_in: false,
            finished: false,
            current_instr: 0,
        }
    }

    /// Current program counter (byte address).
    pub fn pc(&self) -> u32 {
        self.pc
    }
}

impl Dut for MipsCore {
    fn set_clock(&mut self, high: bool) {
        self.clock_in = high;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.reset_in = asserted;
    }

    fn eval(&mut self) {
        let rising = self.clock_in && !self.clock_state;
        self.clock_state = self.clock_in;
        if !rising {
            return;
        }
        if self.reset_in {
            // Memories survive reset so back-door seeding is preserved.
            self.pc = 0;
            self.regs = RegisterFile::new();
            self.finished = false;
            self.current_instr = 0;
            return;
        }
        if !self.finished {
            self.step();
        }
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn write_instruction(&mut self, index: usize, word: u32) {
        if let Some(slot) = self.instr_mem.get_mut(index) {
            *slot = word;
            self.highest_loaded = Some(self.highest_loaded.map_or(index, |hi| hi.max(index)));
        }
    }

    fn write_register(&mut self, index: usize, value: u32) {
        self.regs.write(index, value);
    }

    fn read_register(&self, index: usize) -> u32 {
        self.regs.read(index)
    }

    fn write_data_byte(&mut self, addr: usize, value: u8) {
        if let Some(slot) = self.data_mem.get_mut(addr) {
            *slot = value;
        }
    }

    fn read_data_byte(&self, addr: usize) -> u8 {
        self.data_mem.get(addr).copied().unwrap_or(0)
    }

    fn signals(&self) -> Vec<Signal> {
        vec![
            Signal::new("clk", 1, u64::from(self.clock_state)),
            Signal::new("reset", 1, u64::from(self.reset_in)),
            Signal::new("cpu.pc", 32, u64::from(self.pc)),
            Signal::new("cpu.instr", 32, u64::from(self.current_instr)),
            Signal::new("cpu.finished", 1, u64::from(self.finished)),
        ]
    }
}
