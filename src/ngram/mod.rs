//! Character n-gram extraction with word-boundary padding
//!
//! Text is split on whitespace; every word is wrapped in one [`BOUNDARY`]
//! sentinel on each side and an overlapping window of exactly `order`
//! characters slides over the padded word. An n-gram can therefore carry a
//! word edge (`" th"`, `"he "`) but never spans two words.

pub mod vocabulary;

pub use vocabulary::{CountVector, Vocabulary};

/// Sentinel marking the start and end of every word
pub const BOUNDARY: char = ' ';

/// Call `f` for every n-gram of exactly `order` characters in `text`.
///
/// Padded words shorter than `order` contribute nothing.
pub fn for_each_ngram<F: FnMut(&str)>(text: &str, order: usize, mut f: F) {
    if order == 0 {
        return;
    }

    let mut padded = String::new();
    let mut offsets: Vec<usize> = Vec::new();

    for word in text.split_whitespace() {
        padded.clear();
        padded.push(BOUNDARY);
        padded.push_str(word);
        padded.push(BOUNDARY);

        // Byte offset of every char plus the end, so windows stay on char boundaries
        offsets.clear();
        offsets.extend(padded.char_indices().map(|(i, _)| i));
        offsets.push(padded.len());

        let chars = offsets.len() - 1;
        if chars < order {
            continue;
        }
        for start in 0..=(chars - order) {
            f(&padded[offsets[start]..offsets[start + order]]);
        }
    }
}

/// Collect every n-gram occurrence of `text` in reading order.
pub fn ngrams(text: &str, order: usize) -> Vec<String> {
    let mut out = Vec::new();
    for_each_ngram(text, order, |gram| out.push(gram.to_string()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigrams_are_padded_per_word() {
        assert_eq!(ngrams("ab cd", 3), vec![" ab", "ab ", " cd", "cd "]);
    }

    #[test]
    fn test_unigrams_include_boundaries() {
        assert_eq!(ngrams("ab", 1), vec![" ", "a", "b", " "]);
    }

    #[test]
    fn test_never_spans_two_words() {
        for gram in ngrams("the quick brown fox", 4) {
            assert!(
                !gram.trim().contains(' '),
                "'{}' spans a word boundary",
                gram
            );
        }
    }

    #[test]
    fn test_short_words_yield_nothing() {
        // " ab " has 4 chars, too short for a 5-gram
        assert!(ngrams("ab", 5).is_empty());
        assert_eq!(ngrams("ab abc", 5), vec![" abc "]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(ngrams("größe", 3), vec![" gr", "grö", "röß", "öße", "ße "]);
        assert_eq!(ngrams("日本", 2), vec![" 日", "日本", "本 "]);
    }

    #[test]
    fn test_whitespace_runs_and_empty_text() {
        assert_eq!(ngrams("  a \t\n b ", 2), vec![" a", "a ", " b", "b "]);
        assert!(ngrams("", 2).is_empty());
        assert!(ngrams("   ", 1).is_empty());
    }

    #[test]
    fn test_zero_order_yields_nothing() {
        assert!(ngrams("hello", 0).is_empty());
    }
}
