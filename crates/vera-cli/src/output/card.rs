use vera_core::{ResultSource, Verdict};
use vera_pipeline::AnalysisReport;

use super::table::paint;

const METER_CELLS: usize = 20;
const DEFAULT_WIDTH: usize = 80;

#[derive(Clone, Copy, Debug)]
pub struct CardOptions {
    pub width: Option<usize>,
    pub color: bool,
}

/// Render a verdict report as a terminal card.
#[must_use]
pub fn render_report_card(report: &AnalysisReport, options: CardOptions) -> String {
    let width = options.width.unwrap_or(DEFAULT_WIDTH).max(40);
    let result = &report.result;

    let verdict = if options.color {
        paint(result.verdict.as_str(), verdict_color(result.verdict))
    } else {
        result.verdict.to_string()
    };

    let mut lines = vec![
        format!(
            "{verdict}  {}  {:>3}/100  ({})",
            score_meter(result.score),
            result.score,
            source_label(report.source)
        ),
        String::new(),
    ];
    lines.extend(wrap(&format!("Claim: {}", report.query), width));
    lines.push(String::new());
    lines.extend(wrap(&result.explanation, width));

    if !result.citations.is_empty() {
        lines.push(String::new());
        lines.push(String::from("Citations:"));
        for (index, citation) in result.citations.iter().enumerate() {
            let prefix = format!("  {}. ", index + 1);
            let indent = " ".repeat(prefix.len());
            for (line_no, line) in wrap(citation, width.saturating_sub(prefix.len()))
                .into_iter()
                .enumerate()
            {
                let lead = if line_no == 0 { &prefix } else { &indent };
                lines.push(format!("{lead}{line}"));
            }
        }
    }

    lines.join("\n")
}

/// Fixed-width bar, one cell per five points.
#[must_use]
pub fn score_meter(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * METER_CELLS + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(METER_CELLS - filled)
    )
}

const fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::True => "1;32",
        Verdict::Misleading | Verdict::Uncertain => "1;33",
        Verdict::False | Verdict::Error => "1;31",
    }
}

const fn source_label(source: ResultSource) -> &'static str {
    match source {
        ResultSource::Remote => "model",
        ResultSource::Fallback => "offline fallback",
        ResultSource::Error => "error",
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
