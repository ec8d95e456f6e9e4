//! CLI command definitions and handlers

mod classify;
mod evaluate;
mod init;
mod train;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressStyle;
use langprofile::classifier::ModelFile;
use langprofile::config::{load_config_file, load_project_config, ProjectConfig};
use std::path::{Path, PathBuf};

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Parse an n-gram order (at least 1)
fn parse_order(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("n-gram order must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// langprofile - character n-gram language identification
#[derive(Parser, Debug)]
#[command(name = "langprofile")]
#[command(
    version,
    about = "Identify the language of short texts from character n-gram profiles",
    long_about = "langprofile learns one character n-gram frequency profile per language from \
plain-text corpora and labels new text with the language whose profile is nearest. \
Distances only consider the n-grams the text actually contains, so even a few words \
are enough.",
    after_help = "\
Examples:
  langprofile init                                Write an example langprofile.toml
  langprofile train --languages en,de,fr          Train from corpora/<lang>.txt
  langprofile classify \"where is the station\"     Label a text
  cat lines.txt | langprofile classify --order 4  Label every stdin line
  langprofile evaluate test.tsv --format json     Error rate for every trained n"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers (1-64)
    #[arg(long, global = true, default_value = "8", value_parser = parse_workers)]
    pub workers: usize,

    /// Config file (default: ./langprofile.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a langprofile.toml with example settings
    Init,

    /// Train one model per n-gram order and save the model file
    #[command(after_help = "\
Examples:
  langprofile train                               Use langprofile.toml settings
  langprofile train --orders 2,3,4 -o model.bin   Train selected orders
  langprofile train --corpus-dir data --languages en,de")]
    Train {
        /// Directory containing <language>.txt corpora
        #[arg(long)]
        corpus_dir: Option<PathBuf>,

        /// N-gram orders to train, comma separated
        #[arg(long, value_delimiter = ',', value_parser = parse_order)]
        orders: Vec<usize>,

        /// Candidate languages in tie-breaking order, comma separated
        #[arg(long, value_delimiter = ',')]
        languages: Vec<String>,

        /// Model file to write
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the language of each TEXT (or of each stdin line)
    Classify {
        /// Model file (default: configured model path)
        #[arg(long)]
        model: Option<PathBuf>,

        /// N-gram order to classify with
        #[arg(long, value_parser = parse_order)]
        order: Option<usize>,

        /// Also print every candidate's distance, nearest first
        #[arg(long, short = 'v')]
        verbose: bool,

        /// Texts to classify; reads stdin when omitted
        text: Vec<String>,
    },

    /// Measure error rates on a labeled <language>\t<text> file
    Evaluate {
        /// Labeled test file
        test_file: PathBuf,

        /// Model file (default: configured model path)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Evaluate only this order (default: every trained order)
        #[arg(long, value_parser = parse_order)]
        order: Option<usize>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    // A global pool can only be installed once per process
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.workers)
        .build_global()
    {
        tracing::debug!("Keeping existing rayon pool: {}", e);
    }

    let config_path = cli.config;
    match cli.command {
        Commands::Init => init::run(Path::new(".")),

        Commands::Train {
            corpus_dir,
            orders,
            languages,
            output,
        } => {
            let config = load_config(config_path.as_deref())?;
            train::run(&config, corpus_dir, orders, languages, output)
        }

        Commands::Classify {
            model,
            order,
            verbose,
            text,
        } => {
            let config = load_config(config_path.as_deref())?;
            classify::run(&config, model, order, verbose, text)
        }

        Commands::Evaluate {
            test_file,
            model,
            order,
            format,
        } => {
            let config = load_config(config_path.as_deref())?;
            evaluate::run(&config, &test_file, model, order, &format)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ProjectConfig> {
    match path {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_project_config(Path::new("."))),
    }
}

/// `--model`, else the configured path, else the data-dir default
fn resolve_model_path(config: &ProjectConfig, model: Option<PathBuf>) -> PathBuf {
    model.unwrap_or_else(|| config.model_path())
}

fn load_model(config: &ProjectConfig, model: Option<PathBuf>) -> Result<ModelFile> {
    let path = resolve_model_path(config, model);
    ModelFile::load(&path).with_context(|| {
        format!(
            "No usable model at {}. Run `langprofile train` first.",
            path.display()
        )
    })
}

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .expect("valid template")
}

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}
