//! Harness error definitions.
//!
//! All fallible harness operations report through `HarnessError`. The
//! instruction codec has no error path at all: field-width overflow is
//! masked, matching the hardware's own bit-level behavior. Failures here
//! are programmer errors or I/O errors, never transient conditions, so
//! there is no retry machinery.

use thiserror::Error;

/// Errors reported by testbench operations.
///
/// Back-door register writes are checked against the architectural
/// invariants of the register file; trace opening can fail on plain file
/// I/O. Everything else in the harness is infallible by design.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A back-door write targeted register `$zero`.
    ///
    /// Register 0 is hardwired to zero; writing it would corrupt the
    /// architectural invariant every test depends on, so the write is
    /// rejected before touching device storage.
    #[error("back-door write to hardwired zero register $0 rejected")]
    ZeroRegisterWrite,

    /// A back-door write named a register index outside 1..=31.
    #[error("register index {index} out of range (valid back-door targets are 1..=31)")]
    RegisterIndexOutOfRange {
        /// The rejected register index.
        index: usize,
    },

    /// The trace sink failed to open or write the waveform file.
    #[error("trace sink I/O failure: {0}")]
    Trace(#[from] std::io::Error),
}
