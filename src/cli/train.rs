//! Train command

use super::create_spinner_style;
use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use langprofile::classifier::{train, TrainConfig};
use langprofile::config::{normalize_orders, parse_languages, ProjectConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Run the train command. Non-empty CLI lists override the config file.
pub fn run(
    config: &ProjectConfig,
    corpus_dir: Option<PathBuf>,
    orders: Vec<usize>,
    languages: Vec<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let languages = if languages.is_empty() {
        config.languages()
    } else {
        parse_languages(&languages)
    }
    .context("Set `languages` in langprofile.toml or pass --languages")?;

    let orders = if orders.is_empty() {
        config.orders()
    } else {
        normalize_orders(&orders)
    }?;

    let train_config = TrainConfig {
        corpus_dir: corpus_dir.unwrap_or_else(|| config.corpus_dir.clone()),
        languages,
        orders,
        cleaner: config.cleaner(),
        model_path: output.unwrap_or_else(|| config.model_path()),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!(
        "Training {} languages at n={:?}...",
        train_config.languages.len(),
        train_config.orders
    ));

    let result = train(&train_config);
    spinner.finish_and_clear();
    let result = result?;

    println!(
        "{} Trained {} languages",
        style("✓").green(),
        result.languages.len()
    );
    for (language, chars) in &result.corpus_chars {
        println!("  {:<8} {:>10} chars", language, chars);
    }
    for (order, size) in &result.vocabulary_sizes {
        println!("  n={:<2} {:>10} n-grams", order, size);
    }
    println!(
        "Model saved to {}",
        style(result.model_path.display()).cyan()
    );
    Ok(())
}
