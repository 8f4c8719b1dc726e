// src/utils.rs
use crate::models::Entry;

/// Formats one ranked entry: the count right-aligned in a seven character
/// column, a space, then the word left-aligned in at least five columns.
#[must_use]
pub fn format_entry(entry: &Entry) -> String {
    format!("{:7} {:<5}", entry.count, entry.word)
}

pub fn print_top(entries: &[Entry]) {
    for entry in entries {
        println!("{}", format_entry(entry));
    }
}
