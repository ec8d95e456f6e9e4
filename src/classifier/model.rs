//! Nearest-profile classifier for a single n-gram order

use crate::models::{BuildError, Language, Ranked, Undecidable};
use crate::ngram::Vocabulary;
use crate::profile::{build_profiles, weigh, LanguageProfile, WeightVector};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Trained model for one n-gram order: the frozen vocabulary plus one
/// profile per candidate language, in configured order.
///
/// Immutable after [`Model::build`]; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    vocabulary: Vocabulary,
    profiles: Vec<LanguageProfile>,
}

impl Model {
    /// Train a model at `order` from one cleaned corpus per language.
    /// The slice order is the candidate order used for tie-breaking.
    pub fn build<T: AsRef<str> + Sync>(
        order: usize,
        corpora: &[(Language, T)],
    ) -> Result<Self, BuildError> {
        if order < 1 {
            return Err(BuildError::InvalidOrder);
        }
        if corpora.is_empty() {
            return Err(BuildError::NoLanguages);
        }

        let mut seen = FxHashSet::default();
        for (language, _) in corpora {
            if !seen.insert(language) {
                return Err(BuildError::DuplicateLanguage(language.clone()));
            }
        }

        let texts: Vec<&str> = corpora.iter().map(|(_, text)| text.as_ref()).collect();
        let vocabulary = Vocabulary::build(order, &texts)?;
        let profiles = build_profiles(&vocabulary, corpora)?;

        tracing::info!(
            "Built n={} model: {} languages, {} n-grams",
            order,
            profiles.len(),
            vocabulary.len()
        );

        Ok(Self {
            vocabulary,
            profiles,
        })
    }

    pub fn order(&self) -> usize {
        self.vocabulary.order()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    pub fn profile(&self, language: &Language) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| p.language() == language)
    }

    /// Candidate languages in configured order
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.profiles.iter().map(LanguageProfile::language)
    }

    pub fn contains(&self, language: &Language) -> bool {
        self.profile(language).is_some()
    }

    /// Count and weigh `text` exactly like the training corpora were.
    pub fn weigh_query(&self, text: &str) -> WeightVector {
        weigh(&self.vocabulary.count(text))
    }

    /// Language of the nearest profile. Ties go to the language listed first.
    pub fn classify(&self, text: &str) -> Result<Language, Undecidable> {
        let query = self.weigh_query(text);
        if query.is_zero() {
            return Err(self.undecidable());
        }

        let mut best: Option<(&LanguageProfile, f64)> = None;
        for profile in &self.profiles {
            let distance = restricted_distance(&query, profile);
            match best {
                Some((_, closest)) if distance >= closest => {}
                _ => best = Some((profile, distance)),
            }
        }

        best.map(|(profile, _)| profile.language().clone())
            .ok_or_else(|| self.undecidable())
    }

    /// Every candidate with its distance, nearest first. Equal distances keep
    /// configured order, so the head always agrees with [`Model::classify`].
    pub fn rank(&self, text: &str) -> Result<Vec<Ranked>, Undecidable> {
        let query = self.weigh_query(text);
        if query.is_zero() {
            return Err(self.undecidable());
        }

        let mut ranked: Vec<Ranked> = self
            .profiles
            .iter()
            .map(|profile| Ranked {
                language: profile.language().clone(),
                distance: restricted_distance(&query, profile),
            })
            .collect();
        // Stable sort keeps configured order among ties
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(ranked)
    }

    /// Classify many texts in parallel. Output order matches input order.
    pub fn classify_batch<T: AsRef<str> + Sync>(
        &self,
        texts: &[T],
    ) -> Vec<Result<Language, Undecidable>> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    fn undecidable(&self) -> Undecidable {
        Undecidable {
            order: self.order(),
        }
    }
}

/// Euclidean distance between `query` and `profile` over the query's
/// non-zero dimensions only. Dimensions absent from the query never count.
pub fn restricted_distance(query: &WeightVector, profile: &LanguageProfile) -> f64 {
    query
        .entries()
        .iter()
        .map(|&(dim, weight)| {
            let diff = weight - profile.weight(dim);
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}
