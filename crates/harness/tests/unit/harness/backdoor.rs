//! Back-door injection tests.
//!
//! Register writes are contract-checked (the hardwired zero register and
//! out-of-range indices are rejected without touching device storage);
//! instruction and data memory pokes are unchecked passthroughs.

use mipstb_core::harness::Dut;
use mipstb_core::{Config, HarnessError, Testbench};

use crate::common::mocks::{MockDut, MockSink, event_log};

fn bench() -> Testbench<MockDut, MockSink> {
    let log = event_log();
    let config = Config::default();
    Testbench::new(
        MockDut::new(log.clone()),
        MockSink::new(log),
        &config,
    )
}

#[test]
fn test_set_register_zero_rejected() {
    let mut bench = bench();
    let err = bench.set_register(0, 0xDEAD_BEEF);
    assert!(matches!(err, Err(HarnessError::ZeroRegisterWrite)));
    // The device never saw the write.
    assert_eq!(bench.dut().read_register(0), 0);
    assert!(bench.dut().regs.iter().all(|r| *r == 0));
}

#[test]
fn test_set_register_out_of_range_rejected() {
    let mut bench = bench();
    let err = bench.set_register(32, 1);
    assert!(matches!(
        err,
        Err(HarnessError::RegisterIndexOutOfRange { index: 32 })
    ));
    assert!(bench.dut().regs.iter().all(|r| *r == 0));
}

#[test]
fn test_set_register_valid_range_written() {
    let mut bench = bench();
    for idx in 1..=31 {
        bench
            .set_register(idx, idx as u32 * 3)
            .unwrap_or_else(|_| unreachable!("indices 1..=31 are valid"));
    }
    for idx in 1..=31 {
        assert_eq!(bench.dut().read_register(idx), idx as u32 * 3);
    }
}

#[test]
fn test_set_instruction_passthrough() {
    let mut bench = bench();
    bench.set_instruction(0, 0x3408_8000);
    bench.set_instruction(11, 0xAD68_0052);
    assert_eq!(
        bench.dut().instr,
        vec![(0, 0x3408_8000), (11, 0xAD68_0052)]
    );
}

#[test]
fn test_set_memory_passthrough() {
    let mut bench = bench();
    bench.set_memory(0x54, 0xFF);
    bench.set_memory(0x55, 0x02);
    assert_eq!(bench.dut().read_data_byte(0x54), 0xFF);
    assert_eq!(bench.dut().read_data_byte(0x55), 0x02);
}
