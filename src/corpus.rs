//! Training corpora and labeled evaluation sets
//!
//! Training corpora live as `<dir>/<language>.txt`. Evaluation sets are
//! plain text with one `<language>\t<text>` example per line.

use crate::models::Language;
use crate::preprocess::Cleaner;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Read a file as UTF-8, replacing invalid sequences instead of failing
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(
                "{} is not valid UTF-8; invalid bytes replaced",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

pub fn corpus_path(dir: &Path, language: &Language) -> PathBuf {
    dir.join(format!("{}.txt", language))
}

/// Load and clean one corpus per language, in the given order
pub fn load_corpora(
    dir: &Path,
    languages: &[Language],
    cleaner: &Cleaner,
) -> Result<Vec<(Language, String)>> {
    languages
        .iter()
        .map(|language| {
            let path = corpus_path(dir, language);
            let raw = read_text(&path)
                .with_context(|| format!("Missing training corpus for '{}'", language))?;
            Ok((language.clone(), cleaner.clean(&raw)))
        })
        .collect()
}

/// One example of an evaluation set
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledLine {
    pub label: Language,
    pub text: String,
}

/// Split `<language>\t<text>` on the first tab. `None` for blank lines,
/// lines without a tab and lines where either field is blank.
pub fn parse_labeled_line(line: &str) -> Option<LabeledLine> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (label, text) = line.split_once('\t')?;
    if text.trim().is_empty() {
        return None;
    }
    let label: Language = label.parse().ok()?;
    Some(LabeledLine {
        label,
        text: text.to_string(),
    })
}

/// Parsed evaluation set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledSet {
    pub examples: Vec<LabeledLine>,
    /// 1-based numbers of non-blank lines that could not be parsed
    pub malformed: Vec<usize>,
}

impl LabeledSet {
    /// Apply `cleaner` to every example text in place
    pub fn clean(&mut self, cleaner: &Cleaner) {
        for example in &mut self.examples {
            example.text = cleaner.clean(&example.text);
        }
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

pub fn parse_labeled(content: &str) -> LabeledSet {
    let mut set = LabeledSet::default();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_labeled_line(line) {
            Some(example) => set.examples.push(example),
            None => {
                tracing::warn!("Skipping malformed line {}: expected <language>\\t<text>", i + 1);
                set.malformed.push(i + 1);
            }
        }
    }
    set
}

pub fn read_labeled(path: &Path) -> Result<LabeledSet> {
    let content = read_text(path)?;
    let set = parse_labeled(&content);
    tracing::debug!(
        "Read {} examples from {} ({} malformed lines)",
        set.len(),
        path.display(),
        set.malformed.len()
    );
    Ok(set)
}
