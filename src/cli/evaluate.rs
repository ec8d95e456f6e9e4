//! Evaluate command

use super::{classify::select_model, create_bar_style, load_model};
use anyhow::Result;
use indicatif::ProgressBar;
use langprofile::config::ProjectConfig;
use langprofile::corpus::read_labeled;
use langprofile::evaluate::{evaluate_observed, sweep, SweepReport};
use langprofile::reporters::{render, OutputFormat};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the evaluate command
pub fn run(
    config: &ProjectConfig,
    test_file: &Path,
    model: Option<PathBuf>,
    order: Option<usize>,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let file = load_model(config, model)?;

    let mut set = read_labeled(test_file)?;
    if set.is_empty() {
        tracing::warn!("{} contains no labeled examples", test_file.display());
    }
    set.clean(&file.cleaner);

    let model_count = if order.is_some() { 1 } else { file.models.len() };
    let bar = ProgressBar::new((set.len() * model_count) as u64);
    bar.set_style(create_bar_style());
    bar.set_message("Classifying...");

    let report = match order {
        Some(n) => {
            let model = select_model(&file.models, Some(n), config.default_order)?;
            let evaluation = evaluate_observed(model, &set.examples, || bar.inc(1));
            SweepReport::new(&set, vec![evaluation])
        }
        None => sweep(&file.models, &set, || bar.inc(1)),
    };
    bar.finish_and_clear();

    if let Some(best) = report.best() {
        tracing::info!(
            "Best n={} with {:.2}% error",
            best.order,
            best.error_rate * 100.0
        );
    }

    println!("{}", render(&report, format)?);
    Ok(())
}
