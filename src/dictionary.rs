//! Line-oriented word lists.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Read one word per line, skipping empty lines.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let word = line?;

        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}

/// Read a word list from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let words = read_words(BufReader::new(File::open(path)?))?;

    tracing::info!(path = %path.display(), words = words.len(), "loaded word list");

    Ok(words)
}
