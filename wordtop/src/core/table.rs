// src/core/table.rs
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::models::Entry;

/// Accumulates occurrence counts per distinct word and ranks them on
/// demand. Storage is owned and only reachable through `increment`, so
/// nothing outside the table can alias or skew the counts.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`, creating its entry on first sight.
    pub fn increment(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    /// Number of distinct words seen so far.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all words; equals the number of times
    /// `increment` was called.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Occurrence count for `word`, zero if it was never seen.
    #[must_use]
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Returns the `n` most frequent entries in descending count order,
    /// breaking ties by lexicographic word order. The result is clamped
    /// to the number of distinct words, so asking for more than the
    /// table holds returns a shorter list.
    ///
    /// A bounded min-heap keeps selection at O(D log n) for D distinct
    /// words instead of sorting the whole table.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<Entry> {
        if n == 0 {
            return Vec::new();
        }

        let capacity = n.min(self.counts.len()) + 1;
        let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::with_capacity(capacity);
        for (word, &count) in &self.counts {
            heap.push(Reverse(Entry {
                word: word.clone(),
                count,
            }));
            if heap.len() > n {
                // Drops the lowest-ranked candidate.
                heap.pop();
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(entry)| entry)
            .collect()
    }
}
