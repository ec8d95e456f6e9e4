//! Output reporters for evaluation results
//!
//! Supports multiple output formats:
//! - `text` - Terminal table with colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::evaluate::SweepReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an evaluation report in the specified format
pub fn render(report: &SweepReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two-order report over a tiny two-language set
    pub(crate) fn test_report() -> SweepReport {
        use crate::classifier::ModelSet;
        use crate::corpus::parse_labeled;
        use crate::evaluate::sweep;
        use crate::models::Language;

        let models = ModelSet::build(
            &[1, 2],
            &[
                (Language::new("aa"), "abc cab bca"),
                (Language::new("bb"), "xyz zyx yzx"),
            ],
        )
        .expect("build models");
        let set = parse_labeled("aa\tcab\nbb\tzyx\nbb\tqqq\nno tab\n");
        sweep(&models, &set, || {})
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("html").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
