// src/models.rs
use std::cmp::Ordering;

/// A distinct word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub count: u64,
}

impl Entry {
    #[must_use]
    pub fn new(word: &str, count: u64) -> Self {
        Self {
            word: word.to_owned(),
            count,
        }
    }
}

impl Ord for Entry {
    // Higher counts rank first. Equal counts fall back to lexicographic
    // word order, so at count 2 "go" outranks "world".
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
