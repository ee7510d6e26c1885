//! Common types shared across the harness.
//!
//! This module provides the building blocks used by every component:
//! 1. **Error Handling:** The `HarnessError` type for contract violations
//!    and trace I/O failures.

/// Error types for harness operations.
pub mod error;

pub use error::HarnessError;
