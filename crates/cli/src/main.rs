//! MIPS-I verification harness CLI.
//!
//! Drives the reference program on the behavioral core with a VCD trace:
//! 1. **Build:** Encode the twelve-instruction reference stream.
//! 2. **Run:** Reset, back-door load, then tick until the core signals
//!    finished or the tick bound is hit.
//! 3. **Report:** Log the tick count; exit 0 on completion, 1 on timeout.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mipstb_core::isa::abi::{REG_T0, REG_T1, REG_T2, REG_T3, REG_ZERO};
use mipstb_core::isa::funct::{FN_ADD, FN_SLT, FN_SUB, FN_SUBU};
use mipstb_core::isa::opcodes::{OP_ADDI, OP_BEQ, OP_BNE, OP_J, OP_ORI, OP_SW};
use mipstb_core::isa::{encode_i, encode_j, encode_r};
use mipstb_core::{Config, HarnessError, MipsCore, Testbench, VcdSink};

#[derive(Parser, Debug)]
#[command(
    name = "mipstb",
    version,
    about = "MIPS-I testbench driver",
    long_about = "Runs the reference instruction stream on the behavioral MIPS-I core, \
                  recording a VCD waveform trace of every half-cycle."
)]
struct Cli {
    /// Waveform trace output path.
    #[arg(long, default_value = "sim_data.vcd")]
    trace: PathBuf,

    /// Trace hierarchy depth (dotted path segments to record).
    #[arg(long, default_value_t = 99)]
    trace_depth: u32,

    /// Abort if the core has not finished after this many ticks.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
}

/// The reference instruction stream, encoded with the codec.
fn reference_program() -> [u32; 12] {
    let (zero, t0, t1, t2, t3) = (
        REG_ZERO as u32,
        REG_T0 as u32,
        REG_T1 as u32,
        REG_T2 as u32,
        REG_T3 as u32,
    );
    [
        encode_i(OP_ORI, zero, t0, 0x8000),
        encode_i(OP_ADDI, zero, t1, 0x8000),
        encode_i(OP_ORI, t0, t2, 0x8001),
        encode_i(OP_BEQ, t0, t1, 5),
        encode_r(t1, t0, t3, 0, FN_SLT),
        encode_i(OP_BNE, t3, zero, 1),
        encode_j(OP_J, 8),
        encode_r(t2, t0, t2, 0, FN_SUB),
        encode_i(OP_ORI, t0, t0, 0xFF),
        encode_r(t3, t2, t3, 0, FN_ADD),
        encode_r(t2, t0, t0, 0, FN_SUBU),
        encode_i(OP_SW, t3, t0, 0x52),
    ]
}

fn run(cli: &Cli) -> Result<bool, HarnessError> {
    let mut config = Config::default();
    config.trace_depth = cli.trace_depth;

    let core = MipsCore::new(&config.core);
    let mut bench = Testbench::new(core, VcdSink::new(), &config);
    bench.open_trace(&cli.trace)?;
    bench.reset();

    for (i, word) in reference_program().iter().enumerate() {
        bench.set_instruction(i, *word);
    }

    while !bench.done() {
        if bench.ticks() >= cli.max_ticks {
            return Ok(false);
        }
        bench.tick();
    }

    info!(ticks = bench.ticks(), trace = %cli.trace.display(), "simulation finished");
    Ok(true)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => {
            error!(max_ticks = cli.max_ticks, "core did not finish within the tick bound");
            process::exit(1);
        }
        Err(err) => {
            error!(%err, "harness failure");
            process::exit(1);
        }
    }
}
