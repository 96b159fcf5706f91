//! Seed files: one word line or number per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Read `path` into trimmed, non-blank lines, keeping file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).map_err(|e| Error::io("cannot open input file", path, e))?;
    let mut out = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line.map_err(|e| Error::io("cannot read input file", path, e))?;
        let line = line.trim();
        if !line.is_empty() { out.push(line.to_string()); }
    }
    Ok(out)
}

/// Like [`read_lines`], but an empty result is fatal.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let words = read_lines(path)?;
    if words.is_empty() { return Err(Error::NoWords(path.to_path_buf())); }
    Ok(words)
}
