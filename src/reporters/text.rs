//! Text (terminal) reporter

use crate::evaluate::{Evaluation, SweepReport};
use anyhow::Result;
use console::style;

fn percent(value: f64) -> String {
    format!("{:6.2}%", value * 100.0)
}

/// Color an error rate: green under 5%, yellow under 20%, red above
fn styled_error(rate: f64) -> String {
    let text = percent(rate);
    if rate < 0.05 {
        style(text).green().to_string()
    } else if rate < 0.20 {
        style(text).yellow().to_string()
    } else {
        style(text).red().to_string()
    }
}

/// Render report as formatted terminal output
pub fn render(report: &SweepReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Language identification").bold()));
    out.push_str(&format!("{}\n", style("─".repeat(38)).dim()));
    out.push_str(&format!("Examples: {}", report.examples));
    if report.malformed_lines > 0 {
        out.push_str(&format!(
            "  {}",
            style(format!("({} malformed lines skipped)", report.malformed_lines)).yellow()
        ));
    }
    out.push_str("\n\n");

    out.push_str(&format!(
        "{}\n",
        style("   n   error   correct  wrong  undecidable").bold()
    ));
    for evaluation in &report.evaluations {
        let marker = if Some(evaluation.order) == report.best_order {
            style("*").cyan().bold().to_string()
        } else {
            " ".to_string()
        };
        out.push_str(&format!(
            " {}{:>2} {} {:>9} {:>6} {:>12}\n",
            marker,
            evaluation.order,
            styled_error(evaluation.error_rate),
            evaluation.correct,
            evaluation.wrong,
            evaluation.undecidable
        ));
    }

    if let Some(best) = report.best() {
        out.push('\n');
        render_languages(&mut out, best);
    }

    Ok(out)
}

fn render_languages(out: &mut String, best: &Evaluation) {
    out.push_str(&format!(
        "{} (n={})\n",
        style("PER LANGUAGE").bold(),
        best.order
    ));
    for row in &best.per_language {
        out.push_str(&format!(
            "  {:<8} {}  {}/{}\n",
            row.language,
            percent(row.accuracy),
            row.correct,
            row.total
        ));
    }
    if !best.unknown_labels.is_empty() {
        let labels: Vec<String> = best.unknown_labels.iter().map(|l| l.to_string()).collect();
        out.push_str(&format!(
            "  {} {}\n",
            style("unknown labels:").yellow(),
            labels.join(", ")
        ));
    }
}
