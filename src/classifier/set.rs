//! One trained [`Model`] per n-gram order

use super::model::Model;
use crate::models::{BuildError, Language};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ORDER: usize = 3;

/// Models for several orders over the same languages, ascending by order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSet {
    models: Vec<Model>,
}

impl ModelSet {
    /// Train one model per order. Orders are deduplicated; every order is
    /// built independently and in parallel. Any failing order fails the set.
    pub fn build<T: AsRef<str> + Sync>(
        orders: &[usize],
        corpora: &[(Language, T)],
    ) -> Result<Self, BuildError> {
        let mut orders = orders.to_vec();
        orders.sort_unstable();
        orders.dedup();
        if orders.is_empty() {
            return Err(BuildError::NoOrders);
        }

        let models = orders
            .par_iter()
            .map(|&order| Model::build(order, corpora))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { models })
    }

    /// Assemble from already-built models. Later duplicates of an order
    /// are dropped.
    pub fn from_models(mut models: Vec<Model>) -> Self {
        models.sort_by_key(Model::order);
        models.dedup_by_key(|m| m.order());
        Self { models }
    }

    pub fn get(&self, order: usize) -> Option<&Model> {
        self.models
            .binary_search_by_key(&order, Model::order)
            .ok()
            .map(|i| &self.models[i])
    }

    pub fn orders(&self) -> Vec<usize> {
        self.models.iter().map(Model::order).collect()
    }

    /// Order used when none is requested: 3 if trained, else the smallest
    pub fn default_order(&self) -> Option<usize> {
        self.get(DEFAULT_ORDER)
            .or_else(|| self.models.first())
            .map(Model::order)
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Candidate languages, identical across every order
    pub fn languages(&self) -> Vec<Language> {
        self.models
            .first()
            .map(|m| m.languages().cloned().collect())
            .unwrap_or_default()
    }
}
