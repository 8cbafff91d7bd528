//! Append-only audit log of rephrase runs.
//!
//! Each record is two timestamped blocks and a separator:
//!
//! ```text
//! 2026-10-16T09:30:01.123456 - INPUT:
//! Hello world
//! 2026-10-16T09:30:02.654321 - OUTPUT:
//! Greetings, world.
//! ----------------------------------------
//! ```
//!
//! The file is only ever appended to. Concurrent writers are not coordinated.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{RephraseError, Result};

/// Length of the separator line closing each record
pub const SEPARATOR_WIDTH: usize = 40;

/// Local ISO-8601 timestamp with microseconds, captured now
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Append one record to the log at `path`, creating the file and its
/// directory if missing. The handle is closed on every exit path.
pub fn append_record(path: &Path, input: &str, output: &str) -> Result<()> {
    let io_err = |source: io::Error| RephraseError::LoggingIoFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    write_record(&mut file, input, output, timestamp).map_err(io_err)?;
    log::debug!("appended log record to {}", path.display());
    Ok(())
}

/// Write one record. `now` is called once per block.
pub fn write_record<W, F>(writer: &mut W, input: &str, output: &str, mut now: F) -> io::Result<()>
where
    W: Write,
    F: FnMut() -> String,
{
    writeln!(writer, "{} - INPUT:\n{}", now(), input)?;
    writeln!(writer, "{} - OUTPUT:\n{}", now(), output)?;
    writeln!(writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    writer.flush()
}
