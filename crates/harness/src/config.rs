//! Configuration system for the verification harness.
//!
//! This module defines the configuration structures used to parameterize the
//! harness and the behavioral core. It provides:
//! 1. **Defaults:** Baseline constants (trace depth, memory sizing).
//! 2. **Structures:** Hierarchical config for the harness and the core.
//!
//! Configuration is explicit construction-time state owned by each harness
//! instance; there is no process-global toggle. Supply it via
//! `Config::default()` or deserialize it from JSON.

use serde::Deserialize;

/// Default configuration constants for the harness.
mod defaults {
    /// Default hierarchy depth recorded in the waveform trace.
    ///
    /// Signal names are dotted paths; a signal is traced when its path has
    /// at most this many segments. 99 records everything the device exposes.
    pub const TRACE_DEPTH: u32 = 99;

    /// Instruction memory capacity of the behavioral core, in 32-bit words.
    pub const INSTR_WORDS: usize = 1024;

    /// Data memory capacity of the behavioral core, in bytes.
    pub const DATA_BYTES: usize = 4096;
}

/// Top-level harness configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hierarchy depth recorded in the waveform trace.
    pub trace_depth: u32,
    /// Behavioral core sizing.
    pub core: CoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_depth: defaults::TRACE_DEPTH,
            core: CoreConfig::default(),
        }
    }
}

/// Memory sizing for the behavioral core.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Instruction memory capacity in 32-bit words.
    pub instr_words: usize,
    /// Data memory capacity in bytes.
    pub data_bytes: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            instr_words: defaults::INSTR_WORDS,
            data_bytes: defaults::DATA_BYTES,
        }
    }
}
