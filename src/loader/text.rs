//! Raw text readers

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Map an open/read failure, keeping "not found" distinct
pub(crate) fn read_error(path: &Path, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::file_not_found(path)
    } else {
        Error::Io(err)
    }
}

/// Read the whole file into a string
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// First `n` lines of the file, joined with `\n`
///
/// `n == 0` returns an empty string without touching the file.
pub fn head(path: impl AsRef<Path>, n: usize) -> Result<String> {
    if n == 0 {
        return Ok(String::new());
    }

    let path = path.as_ref();
    let file = File::open(path).map_err(|e| read_error(path, e))?;

    let lines = BufReader::new(file)
        .lines()
        .take(n)
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

/// Last `n` lines of the file, joined with `\n`
///
/// Only `n` lines are buffered at any time.
pub fn tail(path: impl AsRef<Path>, n: usize) -> Result<String> {
    if n == 0 {
        return Ok(String::new());
    }

    let path = path.as_ref();
    let file = File::open(path).map_err(|e| read_error(path, e))?;

    let mut window = VecDeque::with_capacity(n.min(1024));
    for line in BufReader::new(file).lines() {
        if window.len() == n {
            window.pop_front();
        }
        window.push_back(line?);
    }

    Ok(window.into_iter().collect::<Vec<_>>().join("\n"))
}
