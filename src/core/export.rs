// LogWidget - core/export.rs
//
// Plain-text export of the visible log lines.
// Writes one rendered line per record, each terminated by '\n', in store
// order. The target file is truncated; on failure no cleanup is attempted.

use crate::util::error::ExportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write lines to any `Write` implementation, one `\n` after each.
///
/// Returns the number of lines written.
pub fn write_lines<W, I, S>(lines: I, mut writer: W, export_path: &Path) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let io_err = |source| ExportError::Io {
        path: export_path.to_path_buf(),
        source,
    };

    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(io_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
        count += 1;
    }
    writer.flush().map_err(io_err)?;
    Ok(count)
}

/// Export lines to `path`, overwriting any existing file.
pub fn export<I, S>(path: &Path, lines: I) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let count = write_lines(lines, BufWriter::new(file), path)?;
    tracing::info!(path = %path.display(), lines = count, "Saved log file");
    Ok(count)
}
