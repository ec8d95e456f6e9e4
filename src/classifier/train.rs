//! Training from a corpus directory
//!
//! Reads `<corpus_dir>/<language>.txt` for every configured language, cleans
//! them, builds one model per requested order and writes the model file.

use super::set::ModelSet;
use super::store::ModelFile;
use crate::corpus::load_corpora;
use crate::models::Language;
use crate::preprocess::Cleaner;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Training configuration
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Directory holding one `<language>.txt` per language
    pub corpus_dir: PathBuf,
    /// Candidate languages, in tie-breaking order
    pub languages: Vec<Language>,
    /// N-gram orders to train
    pub orders: Vec<usize>,
    pub cleaner: Cleaner,
    /// Where to write the model file
    pub model_path: PathBuf,
}

/// Training result
#[derive(Debug)]
pub struct TrainResult {
    /// Path to saved model
    pub model_path: PathBuf,
    /// (order, vocabulary size) for every trained order
    pub vocabulary_sizes: Vec<(usize, usize)>,
    pub languages: Vec<Language>,
    /// Characters of cleaned training text per language
    pub corpus_chars: Vec<(Language, usize)>,
}

/// Train every configured order and save the resulting model file
pub fn train(config: &TrainConfig) -> Result<TrainResult> {
    let corpora = load_corpora(&config.corpus_dir, &config.languages, &config.cleaner)?;

    let corpus_chars: Vec<(Language, usize)> = corpora
        .iter()
        .map(|(language, text)| (language.clone(), text.chars().count()))
        .collect();
    for (language, chars) in &corpus_chars {
        tracing::info!("Loaded {} corpus: {} characters", language, chars);
    }

    let models = ModelSet::build(&config.orders, &corpora).context("Training failed")?;
    let vocabulary_sizes = models
        .models()
        .iter()
        .map(|m| (m.order(), m.vocabulary().len()))
        .collect();

    ModelFile::new(models, config.cleaner).save(&config.model_path)?;
    tracing::info!("Model saved to {}", config.model_path.display());

    Ok(TrainResult {
        model_path: config.model_path.clone(),
        vocabulary_sizes,
        languages: config.languages.clone(),
        corpus_chars,
    })
}
