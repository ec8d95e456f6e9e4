//! Per-language reference profiles
//!
//! A profile is the weighted count vector of one language's full training
//! corpus, counted against the vocabulary shared by all languages.

mod weight;

pub use weight::{weigh, WeightVector};

use crate::models::{BuildError, Language};
use crate::ngram::Vocabulary;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference profile for one (order, language) pair.
///
/// Stored dense because distance computation looks it up at whatever
/// dimensions a query happens to contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageProfile {
    language: Language,
    weights: Vec<f64>,
}

impl LanguageProfile {
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Weight at `dimension`, zero for n-grams never seen in this language
    pub fn weight(&self, dimension: u32) -> f64 {
        self.weights.get(dimension as usize).copied().unwrap_or(0.0)
    }

    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of vocabulary n-grams this language's corpus contains
    pub fn support_len(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }
}

/// Build one profile per language, preserving the input order.
///
/// Languages only share the read-only vocabulary, so they are profiled in
/// parallel. A corpus with no vocabulary n-gram fails the whole build.
pub fn build_profiles<T: AsRef<str> + Sync>(
    vocabulary: &Vocabulary,
    corpora: &[(Language, T)],
) -> Result<Vec<LanguageProfile>, BuildError> {
    corpora
        .par_iter()
        .map(|(language, text)| {
            let counts = vocabulary.count(text.as_ref());
            let weights = weigh(&counts);
            if weights.is_zero() {
                return Err(BuildError::DegenerateProfile {
                    language: language.clone(),
                    order: vocabulary.order(),
                });
            }

            tracing::debug!(
                "Profiled {} at n={}: {} n-grams, {} distinct",
                language,
                vocabulary.order(),
                counts.total(),
                weights.support_len()
            );

            Ok(LanguageProfile {
                language: language.clone(),
                weights: weights.to_dense(),
            })
        })
        .collect()
}
