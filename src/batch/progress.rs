//! Single-line progress display for batch runs.
//!
//! Each row overwrites the previous one (carriage return, no newline), so
//! the terminal shows only the record currently being looked up. Progress
//! is advisory: write errors are logged and otherwise ignored.

use std::io::Write;

use crate::model::Record;

/// Width blanked out before each new progress line
const CLEAR_WIDTH: usize = 144;

/// Where progress lines go, if anywhere.
pub struct Progress {
    out: Option<Box<dyn Write + Send>>,
    shown: bool,
}

impl Progress {
    /// Progress on standard error.
    pub fn stderr() -> Self {
        Self::to_writer(std::io::stderr())
    }

    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Some(Box::new(writer)),
            shown: false,
        }
    }

    /// No progress output at all.
    pub fn hidden() -> Self {
        Self {
            out: None,
            shown: false,
        }
    }

    /// Show the record about to be looked up.
    pub fn row(&mut self, record: &Record) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        match write_row(out, record) {
            Ok(()) => self.shown = true,
            Err(e) => tracing::debug!("Progress output failed: {}", e),
        }
    }

    /// Move past the progress line so later output starts on a fresh line.
    pub fn finish(&mut self) {
        if !self.shown {
            return;
        }
        self.shown = false;

        if let Some(out) = self.out.as_mut()
            && let Err(e) = end_line(out)
        {
            tracing::debug!("Progress output failed: {}", e);
        }
    }
}

fn write_row(out: &mut dyn Write, record: &Record) -> std::io::Result<()> {
    write!(out, "{:width$}\r", "", width = CLEAR_WIDTH)?;
    write!(
        out,
        "{}: {:?} - {:?} (musicbrainz: {})\r",
        record.position, record.artist, record.title, record.external_id
    )?;
    out.flush()
}

fn end_line(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    out.flush()
}
