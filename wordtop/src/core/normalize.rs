// src/core/normalize.rs

/// Rewrites a line of text so that every letter appears in lowercase and
/// every other character (digits, punctuation, whitespace) becomes a
/// single space. Splitting the result on whitespace yields the word
/// stream; maximal runs of separators never produce empty words.
///
/// Classification and lowering are both Unicode-aware. A handful of
/// letters lowercase to more than one character ('İ' becomes "i\u{307}"),
/// so the output can be slightly longer than the input in chars.
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_alphabetic() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned
}
