//! Audible emergency signal

use std::io::Write;

use sc_core::{AlertChime, ChimeError};

/// Rings the terminal bell on stderr
///
/// Only audible when the app was started from a terminal; a windowed launch
/// stays silent and the write still succeeds.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AlertChime for TerminalBell {
    fn play(&mut self) -> Result<(), ChimeError> {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}
