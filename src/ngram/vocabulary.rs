//! Frozen n-gram vocabulary and sparse count vectors
//!
//! A [`Vocabulary`] is built once per n-gram order from the union of all
//! training corpora. Its indices are the dimension ids of every vector at
//! that order, so the same instance must count training text and queries.

use super::for_each_ngram;
use crate::models::BuildError;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize, Serializer};

/// Ordered, deduplicated set of n-grams seen in training.
///
/// Grams are sorted lexicographically so the dimension layout does not
/// depend on corpus order. The lookup index is rebuilt on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "StoredVocabulary")]
pub struct Vocabulary {
    order: usize,
    grams: Vec<String>,
    index: FxHashMap<String, u32>,
}

#[derive(Deserialize)]
struct StoredVocabulary {
    order: usize,
    grams: Vec<String>,
}

#[derive(Serialize)]
struct StoredVocabularyRef<'a> {
    order: usize,
    grams: &'a [String],
}

impl From<StoredVocabulary> for Vocabulary {
    fn from(stored: StoredVocabulary) -> Self {
        Self::from_sorted(stored.order, stored.grams)
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StoredVocabularyRef {
            order: self.order,
            grams: &self.grams,
        }
        .serialize(serializer)
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.grams == other.grams
    }
}

impl Vocabulary {
    /// Build the vocabulary of every `order`-gram in `corpora` (union across
    /// all of them).
    pub fn build<T: AsRef<str> + Sync>(order: usize, corpora: &[T]) -> Result<Self, BuildError> {
        if order < 1 {
            return Err(BuildError::InvalidOrder);
        }
        if corpora.is_empty() {
            return Err(BuildError::EmptyCorpora);
        }

        let distinct = corpora
            .par_iter()
            .map(|corpus| {
                let mut seen: FxHashSet<String> = FxHashSet::default();
                for_each_ngram(corpus.as_ref(), order, |gram| {
                    if !seen.contains(gram) {
                        seen.insert(gram.to_string());
                    }
                });
                seen
            })
            .reduce(FxHashSet::default, |mut a, mut b| {
                if a.len() < b.len() {
                    std::mem::swap(&mut a, &mut b);
                }
                a.extend(b);
                a
            });

        if distinct.is_empty() {
            return Err(BuildError::EmptyVocabulary { order });
        }

        let mut grams: Vec<String> = distinct.into_iter().collect();
        grams.sort_unstable();

        tracing::debug!("Built {}-gram vocabulary with {} entries", order, grams.len());
        Ok(Self::from_sorted(order, grams))
    }

    fn from_sorted(order: usize, grams: Vec<String>) -> Self {
        let index = grams
            .iter()
            .enumerate()
            .map(|(dim, gram)| (gram.clone(), dim as u32))
            .collect();
        Self {
            order,
            grams,
            index,
        }
    }

    /// Count the occurrences of every vocabulary n-gram in `text`.
    /// N-grams outside the vocabulary are dropped.
    pub fn count(&self, text: &str) -> CountVector {
        let mut counts: FxHashMap<u32, u64> = FxHashMap::default();
        for_each_ngram(text, self.order, |gram| {
            if let Some(&dim) = self.index.get(gram) {
                *counts.entry(dim).or_insert(0) += 1;
            }
        });
        CountVector::from_counts(self.len(), counts)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of dimensions of every vector at this order
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn dimension(&self, gram: &str) -> Option<u32> {
        self.index.get(gram).copied()
    }

    pub fn gram(&self, dimension: u32) -> Option<&str> {
        self.grams.get(dimension as usize).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.grams.iter().map(String::as_str)
    }
}

/// Sparse count vector over a vocabulary.
///
/// Only non-zero dimensions are stored, sorted by dimension; the logical
/// length is always the vocabulary size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountVector {
    dimensions: usize,
    entries: Vec<(u32, u64)>,
}

impl CountVector {
    /// Build from (dimension, count) pairs. Repeated dimensions are summed
    /// and zero counts dropped.
    pub fn from_counts(dimensions: usize, counts: impl IntoIterator<Item = (u32, u64)>) -> Self {
        let mut raw: Vec<(u32, u64)> = counts.into_iter().filter(|&(_, c)| c > 0).collect();
        raw.sort_unstable_by_key(|&(dim, _)| dim);

        let mut entries: Vec<(u32, u64)> = Vec::with_capacity(raw.len());
        for (dim, count) in raw {
            debug_assert!((dim as usize) < dimensions, "dimension {dim} out of range");
            match entries.last_mut() {
                Some((last, total)) if *last == dim => *total += count,
                _ => entries.push((dim, count)),
            }
        }

        Self {
            dimensions,
            entries,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Non-zero (dimension, count) pairs in dimension order
    pub fn entries(&self) -> &[(u32, u64)] {
        &self.entries
    }

    pub fn get(&self, dimension: u32) -> u64 {
        self.entries
            .binary_search_by_key(&dimension, |&(dim, _)| dim)
            .map(|i| self.entries[i].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    /// Mean over all dimensions, zeros included
    pub fn mean(&self) -> f64 {
        if self.dimensions == 0 {
            return 0.0;
        }
        self.total() as f64 / self.dimensions as f64
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_dense(&self) -> Vec<u64> {
        let mut dense = vec![0; self.dimensions];
        for &(dim, count) in &self.entries {
            dense[dim as usize] = count;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_sorted_union() {
        let vocab = Vocabulary::build(2, &["ba", "ab"]).unwrap();
        let grams: Vec<&str> = vocab.iter().collect();
        assert_eq!(grams, vec![" a", " b", "a ", "ab", "b ", "ba"]);
        assert_eq!(vocab.order(), 2);
        assert_eq!(vocab.dimension("ab"), Some(3));
        assert_eq!(vocab.gram(3), Some("ab"));
    }

    #[test]
    fn test_build_independent_of_corpus_order() {
        let a = Vocabulary::build(3, &["hello world", "hallo welt"]).unwrap();
        let b = Vocabulary::build(3, &["hallo welt", "hello world"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_rejects_bad_configuration() {
        let empty: [&str; 0] = [];
        assert_eq!(Vocabulary::build(3, &empty), Err(BuildError::EmptyCorpora));
        assert_eq!(Vocabulary::build(0, &["text"]), Err(BuildError::InvalidOrder));
        assert_eq!(
            Vocabulary::build(6, &["ab cd"]),
            Err(BuildError::EmptyVocabulary { order: 6 })
        );
    }

    #[test]
    fn test_count_drops_unknown_ngrams() {
        let vocab = Vocabulary::build(2, &["abc"]).unwrap();
        // vocabulary: " a", "ab", "bc", "c "
        assert_eq!(vocab.len(), 4);

        let counts = vocab.count("abd ab");
        assert_eq!(counts.dimensions(), 4);
        assert_eq!(counts.get(vocab.dimension(" a").unwrap()), 2);
        assert_eq!(counts.get(vocab.dimension("ab").unwrap()), 2);
        assert_eq!(counts.get(vocab.dimension("bc").unwrap()), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_count_unseen_text_is_zero() {
        let vocab = Vocabulary::build(3, &["hello"]).unwrap();
        let counts = vocab.count("xyz qrs");
        assert!(counts.is_zero());
        assert_eq!(counts.dimensions(), vocab.len());
        assert_eq!(counts.mean(), 0.0);
    }

    #[test]
    fn test_count_vector_merges_and_sorts() {
        let counts = CountVector::from_counts(5, vec![(3, 1), (1, 2), (3, 4), (0, 0)]);
        assert_eq!(counts.entries(), &[(1, 2), (3, 5)]);
        assert_eq!(counts.to_dense(), vec![0, 2, 0, 5, 0]);
        assert!((counts.mean() - 7.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let vocab = Vocabulary::build(3, &["der hund", "the dog"]).unwrap();
        let json = serde_json::to_string(&vocab).unwrap();
        assert!(!json.contains("index"));

        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
        assert_eq!(back.dimension("hun"), vocab.dimension("hun"));
        assert_eq!(back.count("der dog"), vocab.count("der dog"));
    }
}
