//! Text cleaning applied to training corpora and queries alike
//!
//! Strips ASCII punctuation, digits, control characters and a fixed set of
//! typographic marks, then collapses whitespace. A model is only meaningful
//! for text cleaned the same way it was trained on, which is why the
//! [`Cleaner`] settings travel inside the model file.

use serde::{Deserialize, Serialize};

/// Typographic marks removed on top of ASCII punctuation
const TYPOGRAPHIC: &[char] = &[
    '«', '»', '„', '“', '”', '‘', '’', '‚', '‹', '›', '—', '–', '…', '·', '¿', '¡', '•', '′',
    '″',
];

/// Whether `c` is removed by the cleaning filter
pub fn is_stripped(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_numeric() || c.is_control() || TYPOGRAPHIC.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleaner {
    /// Fold to lowercase after filtering
    pub lowercase: bool,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl Cleaner {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    pub fn clean(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pending_space = false;

        for c in text.chars() {
            // Whitespace first: tabs and newlines are also control chars
            if c.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            if is_stripped(c) {
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            if self.lowercase {
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
        }

        out
    }
}
