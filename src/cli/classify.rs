//! Classify command

use super::load_model;
use anyhow::{Context, Result};
use langprofile::classifier::{Model, ModelSet};
use langprofile::config::ProjectConfig;
use langprofile::evaluate::UNDECIDABLE_LABEL;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Run the classify command
pub fn run(
    config: &ProjectConfig,
    model: Option<PathBuf>,
    order: Option<usize>,
    verbose: bool,
    texts: Vec<String>,
) -> Result<()> {
    let file = load_model(config, model)?;
    let model = select_model(&file.models, order, config.default_order)?;

    let texts = if texts.is_empty() {
        read_stdin_lines()?
    } else {
        texts
    };
    let cleaned: Vec<String> = texts.iter().map(|t| file.cleaner.clean(t)).collect();
    tracing::debug!("Classifying {} texts at n={}", cleaned.len(), model.order());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if verbose {
        for text in &cleaned {
            writeln!(out, "{}", verbose_line(model, text))?;
        }
    } else {
        for result in model.classify_batch(&cleaned) {
            let label = match result {
                Ok(language) => language.to_string(),
                Err(_) => UNDECIDABLE_LABEL.to_string(),
            };
            writeln!(out, "{}", label)?;
        }
    }
    Ok(())
}

/// `--order` must be trained. Without it, the configured default is used
/// when trained, else the model set's own default.
pub(super) fn select_model(
    models: &ModelSet,
    order: Option<usize>,
    configured: usize,
) -> Result<&Model> {
    match order {
        Some(n) => models.get(n).with_context(|| {
            format!("No model for n={}; trained orders: {:?}", n, models.orders())
        }),
        None => models
            .get(configured)
            .or_else(|| models.default_order().and_then(|n| models.get(n)))
            .context("Model file contains no models"),
    }
}

/// `<label>\t<lang>=<distance> ...`, nearest first
fn verbose_line(model: &Model, text: &str) -> String {
    match model.rank(text) {
        Ok(ranked) => {
            let distances: Vec<String> = ranked
                .iter()
                .map(|r| format!("{}={:.4}", r.language, r.distance))
                .collect();
            format!("{}\t{}", ranked[0].language, distances.join(" "))
        }
        Err(_) => UNDECIDABLE_LABEL.to_string(),
    }
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line.context("Failed to read stdin")?);
    }
    Ok(lines)
}
