//! Puzzle input helpers: file reading/writing and text-to-data conversion.
//!
//! These perform no validation beyond integer parsing; malformed numbers
//! and missing paths propagate the underlying std error to the caller.

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::num::ParseIntError;
use std::path::Path;

/// Read the contents of a file into a string.
pub fn read(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write text to a (plaintext) file.
///
/// When `exist_ok` is `false`, refuses to overwrite an existing file and
/// fails with [`io::ErrorKind::AlreadyExists`].
pub fn write(text: &str, path: impl AsRef<Path>, exist_ok: bool) -> io::Result<()> {
    let path = path.as_ref();
    let mut opts = OpenOptions::new();
    opts.write(true).truncate(true);
    if exist_ok {
        opts.create(true);
    } else {
        opts.create_new(true);
    }
    let mut file = opts.open(path)?;
    file.write_all(text.as_bytes())?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Split a string into its lines.
pub fn to_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Parse a string as one integer per line.
pub fn to_numbers(text: &str) -> Result<Vec<i64>, ParseIntError> {
    text.lines().map(|line| line.trim().parse()).collect()
}
