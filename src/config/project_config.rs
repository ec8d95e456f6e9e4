//! Project-level configuration support
//!
//! Loads `langprofile.toml` from the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # langprofile.toml
//!
//! languages = ["en", "de", "fr"]
//! orders = [1, 2, 3, 4, 5]
//! default_order = 3
//! corpus_dir = "corpora"
//! model_path = "model.bin"
//!
//! [cleaning]
//! lowercase = true
//! ```

use crate::classifier::default_model_path;
use crate::models::{BuildError, Language};
use crate::preprocess::Cleaner;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "langprofile.toml";

/// Written by `langprofile init`
pub const EXAMPLE_CONFIG: &str = r#"# langprofile configuration

# Candidate languages. Ties between equally distant languages go to the
# one listed first.
languages = ["en", "de", "fr"]

# N-gram orders to train
orders = [1, 2, 3, 4, 5]

# Order used by `classify` when --order is not given
default_order = 3

# One <language>.txt per language
corpus_dir = "corpora"

# model_path = "model.bin"

[cleaning]
lowercase = true
"#;

/// Top-level project configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Candidate language codes, in tie-breaking order
    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default = "default_orders")]
    pub orders: Vec<usize>,

    #[serde(default = "default_order")]
    pub default_order: usize,

    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: PathBuf,

    /// Falls back to the per-user data directory
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    #[serde(default)]
    pub cleaning: CleaningConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            orders: default_orders(),
            default_order: default_order(),
            corpus_dir: default_corpus_dir(),
            model_path: None,
            cleaning: CleaningConfig::default(),
        }
    }
}

fn default_orders() -> Vec<usize> {
    vec![1, 2, 3, 4, 5]
}

fn default_order() -> usize {
    3
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("corpora")
}

/// Text cleaning settings, applied to corpora and queries alike
#[derive(Debug, Clone, Deserialize)]
pub struct CleaningConfig {
    #[serde(default = "default_true")]
    pub lowercase: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

fn default_true() -> bool {
    true
}

impl ProjectConfig {
    /// Parsed candidate languages, validated for emptiness and duplicates
    pub fn languages(&self) -> Result<Vec<Language>, BuildError> {
        parse_languages(&self.languages)
    }

    /// Requested orders, sorted and deduplicated
    pub fn orders(&self) -> Result<Vec<usize>, BuildError> {
        normalize_orders(&self.orders)
    }

    pub fn cleaner(&self) -> Cleaner {
        Cleaner::new(self.cleaning.lowercase)
    }

    pub fn model_path(&self) -> PathBuf {
        self.model_path.clone().unwrap_or_else(default_model_path)
    }
}

/// Parse language codes, keeping their order
pub fn parse_languages<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Language>, BuildError> {
    if codes.is_empty() {
        return Err(BuildError::NoLanguages);
    }
    let mut languages: Vec<Language> = Vec::with_capacity(codes.len());
    for code in codes {
        let language: Language = code.as_ref().parse()?;
        if languages.contains(&language) {
            return Err(BuildError::DuplicateLanguage(language));
        }
        languages.push(language);
    }
    Ok(languages)
}

/// Sort and deduplicate orders, rejecting 0 and the empty list
pub fn normalize_orders(orders: &[usize]) -> Result<Vec<usize>, BuildError> {
    if orders.contains(&0) {
        return Err(BuildError::InvalidOrder);
    }
    let mut orders = orders.to_vec();
    orders.sort_unstable();
    orders.dedup();
    if orders.is_empty() {
        return Err(BuildError::NoOrders);
    }
    Ok(orders)
}

/// Load `langprofile.toml` from `dir`. Missing or broken files fall back
/// to defaults.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_config_file(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from an explicit TOML file
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}
