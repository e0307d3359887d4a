//! File load and save.
//!
//! Loading produces the document as lines with their terminators stripped; saving writes a
//! serialized buffer over the target file, truncating it to the new length.

use crate::error::{EditorError, Result};
use memchr::memchr_iter;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Check that `path` names an existing regular file.
pub fn validate_file_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|err| EditorError::from_open(path, err))?;
    if !metadata.is_file() {
        return Err(EditorError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read `path` and split it into lines.
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    validate_file_path(path)?;
    let content = std::fs::read(path).map_err(|err| EditorError::from_open(path, err))?;
    let lines = split_lines(&content);
    log::debug!(
        "read {} bytes, {} lines from {}",
        content.len(),
        lines.len(),
        path.display()
    );
    Ok(lines)
}

/// Split on `\n`, dropping trailing `\r`/`\n` bytes from each line. A final line without a
/// terminator is kept; no empty line is produced after a final terminator.
pub fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', content) {
        lines.push(strip_terminators(&content[start..end]).to_vec());
        start = end + 1;
    }
    if start < content.len() {
        lines.push(strip_terminators(&content[start..]).to_vec());
    }
    lines
}

fn strip_terminators(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&byte| byte != b'\r' && byte != b'\n')
        .map_or(0, |last| last + 1);
    &line[..end]
}

/// Overwrite `path` with `content`, creating it (mode 0644) if needed.
///
/// The file is resized to the new length before writing so a shorter document leaves no
/// stale tail behind.
pub fn write_truncating(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    let len = u64::try_from(content.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "buffer too large"))?;
    file.set_len(len)?;
    file.write_all(content)?;
    file.flush()
}
