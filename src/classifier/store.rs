//! On-disk model files
//!
//! A model file is a bitcode-encoded [`ModelFile`]: the trained
//! [`ModelSet`] plus the cleaning settings its corpora went through, so
//! queries can be cleaned the same way at classification time.

use super::set::ModelSet;
use crate::preprocess::Cleaner;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bumped whenever the encoded layout changes
pub const MODEL_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub version: u32,
    pub trained_at: DateTime<Utc>,
    pub cleaner: Cleaner,
    pub models: ModelSet,
}

impl ModelFile {
    pub fn new(models: ModelSet, cleaner: Cleaner) -> Self {
        Self {
            version: MODEL_FILE_VERSION,
            trained_at: Utc::now(),
            cleaner,
            models,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create model directory {}", parent.display()))?;
        }

        let bytes = bitcode::serialize(self)
            .map_err(|e| anyhow::anyhow!("Failed to encode model: {}", e))?;
        std::fs::write(path, &bytes)
            .with_context(|| format!("Failed to write model to {}", path.display()))?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read model {}", path.display()))?;
        let file: ModelFile = bitcode::deserialize(&bytes).map_err(|e| {
            anyhow::anyhow!("{} is not a valid model file: {}", path.display(), e)
        })?;

        if file.version != MODEL_FILE_VERSION {
            bail!(
                "{} was written with model format v{}, expected v{}. Retrain with `langprofile train`.",
                path.display(),
                file.version,
                MODEL_FILE_VERSION
            );
        }
        if file.models.is_empty() {
            bail!("{} contains no models", path.display());
        }

        tracing::debug!(
            "Loaded model {} (orders {:?}, trained {})",
            path.display(),
            file.models.orders(),
            file.trained_at.to_rfc3339()
        );
        Ok(file)
    }
}

/// Where `train` writes and `classify` reads when no path is configured
pub fn default_model_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("langprofile")
        .join("model.bin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use tempfile::TempDir;

    fn model_set() -> ModelSet {
        ModelSet::build(
            &[1, 3],
            &[
                (Language::new("en"), "the quick brown fox"),
                (Language::new("fr"), "le renard brun rapide"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("model.bin");
        let file = ModelFile::new(model_set(), Cleaner::new(false));

        file.save(&path).unwrap();
        let loaded = ModelFile::load(&path).unwrap();

        assert_eq!(loaded, file);
        let model = loaded.models.get(3).unwrap();
        assert_eq!(model.classify("brown fox"), Ok(Language::new("en")));
    }

    #[test]
    fn test_load_rejects_other_versions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");
        let mut file = ModelFile::new(model_set(), Cleaner::default());
        file.version = MODEL_FILE_VERSION + 1;
        file.save(&path).unwrap();

        let err = ModelFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("model format"));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"definitely not a model").unwrap();
        assert!(ModelFile::load(&path).is_err());
    }

    #[test]
    fn test_default_path_is_under_langprofile() {
        let path = default_model_path();
        assert!(path.ends_with("langprofile/model.bin"));
    }
}
