//! VCD (Value Change Dump) trace sink.
//!
//! A minimal VCD writer over a buffered file. The variable header is
//! declared lazily on the first dump, once the signal set is known; after
//! that each dump emits a timestamp marker and change-only value records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::HarnessError;
use crate::trace::{Signal, TraceSink};

/// VCD waveform sink.
///
/// Construct with [`VcdSink::new`], then drive through the [`TraceSink`]
/// lifecycle. Write errors after a successful open are logged and the
/// offending record dropped; the simulation itself never fails on trace
/// I/O.
#[derive(Debug, Default)]
pub struct VcdSink {
    writer: Option<BufWriter<File>>,
    header_written: bool,
    last_values: Vec<Option<u64>>,
}

impl VcdSink {
    /// Creates a closed VCD sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Short identifier code for the signal at `index`.
    ///
    /// VCD identifiers are printable ASCII; one character suffices for the
    /// signal counts a harness exposes.
    fn id(index: usize) -> char {
        (b'!' + index as u8) as char
    }

    fn write_header(w: &mut BufWriter<File>, signals: &[Signal]) -> std::io::Result<()> {
        writeln!(w, "$timescale 1ns $end")?;
        writeln!(w, "$scope module dut $end")?;
        for (i, sig) in signals.iter().enumerate() {
            writeln!(w, "$var wire {} {} {} $end", sig.width, Self::id(i), sig.name)?;
        }
        writeln!(w, "$upscope $end")?;
        writeln!(w, "$enddefinitions $end")?;
        Ok(())
    }

    fn write_value(w: &mut BufWriter<File>, sig: &Signal, index: usize) -> std::io::Result<()> {
        if sig.width == 1 {
            writeln!(w, "{}{}", sig.value & 1, Self::id(index))
        } else {
            writeln!(w, "b{:b} {}", sig.value, Self::id(index))
        }
    }

    fn write_dump(&mut self, timestamp: u64, signals: &[Signal]) -> std::io::Result<()> {
        let Some(w) = self.writer.as_mut() else {
            return Ok(());
        };
        if !self.header_written {
            Self::write_header(w, signals)?;
            self.header_written = true;
            self.last_values = vec![None; signals.len()];
        }
        writeln!(w, "#{timestamp}")?;
        for (i, sig) in signals.iter().enumerate() {
            if self.last_values.get(i).copied().flatten() != Some(sig.value) {
                Self::write_value(w, sig, i)?;
                self.last_values[i] = Some(sig.value);
            }
        }
        Ok(())
    }
}

impl TraceSink for VcdSink {
    fn open(&mut self, path: &Path) -> Result<(), HarnessError> {
        let file = File::create(path)?;
        self.writer = Some(BufWriter::new(file));
        self.header_written = false;
        self.last_values.clear();
        debug!(path = %path.display(), "vcd trace opened");
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn dump(&mut self, timestamp: u64, signals: &[Signal]) {
        if let Err(err) = self.write_dump(timestamp, signals) {
            warn!(timestamp, %err, "vcd dump failed; record dropped");
        }
    }

    fn flush(&mut self) {
        if let Some(w) = self.writer.as_mut()
            && let Err(err) = w.flush()
        {
            warn!(%err, "vcd flush failed");
        }
    }

    fn close(&mut self) {
        if let Some(mut w) = self.writer.take() {
            if let Err(err) = w.flush() {
                warn!(%err, "vcd flush on close failed");
            }
            debug!("vcd trace closed");
        }
    }
}
