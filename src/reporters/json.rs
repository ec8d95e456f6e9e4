//! JSON reporter
//!
//! Outputs the full SweepReport as pretty-printed JSON for jq and friends.

use crate::evaluate::SweepReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &SweepReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
