// src/core/pipeline.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::normalize::normalize;
use crate::core::table::FrequencyTable;

/// Reads the file at `path` line by line and accumulates word counts.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a read fails, or the
/// content is not valid UTF-8.
pub fn count_file(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path)
        .with_context(|| format!("failed to open file: {}", path.display()))?;
    count_reader(BufReader::new(file))
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Accumulates word counts from any buffered reader. Input is consumed
/// incrementally, one line at a time.
///
/// # Errors
///
/// Returns an error if a read fails before end-of-input.
pub fn count_reader<R: BufRead>(reader: R) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for line in reader.lines() {
        let line = line?;
        for word in normalize(&line).split_whitespace() {
            table.increment(word);
        }
    }

    Ok(table)
}
