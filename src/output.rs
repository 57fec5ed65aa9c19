//! Output file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Write `content` to `path`, replacing whatever was there.
///
/// The file handle lives only inside this call and is closed on every exit
/// path, including a failed write. A failed write can leave the file
/// truncated or partially written.
///
/// # Returns
/// * Number of bytes written
pub fn write_document(path: &Path, content: &str) -> Result<usize> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    writer.write_all(content.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(content.len())
}
