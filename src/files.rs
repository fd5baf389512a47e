#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Reads a whole file into a string. Bytes that are not valid UTF-8 are
/// replaced with `U+FFFD` rather than failing the read.
pub fn read_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file as a sequence of lines, with `\n` and `\r\n` terminators
/// stripped.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = fs::File::open(path)?;
    BufReader::new(file).lines().collect()
}

/// Whether anything is at `path`.
///
/// Only a definite "not found" counts as absent, so a path that exists but
/// cannot be inspected is still reported as present.
pub fn exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// Whether `path` is a directory. Any error counts as "no".
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
