//! Mean normalization followed by log compression
//!
//! `weight[i] = ln(count[i] / mean + 1)` where the mean runs over every
//! vocabulary dimension, so a training corpus and a short query land on the
//! same scale. Zero stays zero: the non-zero dimensions of a weight vector
//! are exactly those of its counts.

use crate::ngram::CountVector;

/// Sparse weight vector, non-zero entries sorted by dimension
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    dimensions: usize,
    entries: Vec<(u32, f64)>,
}

impl WeightVector {
    /// All-zero vector: the "no signal" value
    pub fn zero(dimensions: usize) -> Self {
        Self {
            dimensions,
            entries: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Observed dimensions with their weights
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Number of observed (non-zero) dimensions
    pub fn support_len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, dimension: u32) -> f64 {
        self.entries
            .binary_search_by_key(&dimension, |&(dim, _)| dim)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimensions];
        for &(dim, weight) in &self.entries {
            dense[dim as usize] = weight;
        }
        dense
    }
}

/// Apply the weighting transform. A zero mean (no recognized n-gram at all)
/// gives the all-zero vector instead of dividing by zero.
pub fn weigh(counts: &CountVector) -> WeightVector {
    let mean = counts.mean();
    if mean == 0.0 {
        return WeightVector::zero(counts.dimensions());
    }

    let entries = counts
        .entries()
        .iter()
        .map(|&(dim, count)| (dim, (count as f64 / mean).ln_1p()))
        .collect();

    WeightVector {
        dimensions: counts.dimensions(),
        entries,
    }
}
