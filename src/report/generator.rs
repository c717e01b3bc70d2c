use crate::domain::{compute_progress, DayRecord};
use crate::persistence::atomic_write;
use crate::ui::questions_pane::checkbox;
use anyhow::{Context, Result};
use std::path::Path;

/// Render a markdown summary of a day's record
pub fn render_report(record: &DayRecord) -> String {
    let progress = compute_progress(&record.questions);
    let mut report = String::new();

    // Header
    report.push_str(&format!("# DSA Progress - {}\n\n", record.date));

    if !record.topic.is_empty() {
        report.push_str(&format!("**Topic:** {}\n\n", record.topic));
    }
    if !record.quote.is_empty() {
        report.push_str(&format!("> {}\n\n", record.quote));
    }

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **{}** ({}%)\n",
        progress.count_label(),
        progress.percent()
    ));
    report.push_str(&format!("- {}\n\n", progress.tier().message()));

    // Questions Section
    report.push_str("## Questions\n\n");
    if record.questions.is_empty() {
        report.push_str("_No questions recorded._\n");
    } else {
        for question in &record.questions {
            report.push_str(&format!("- {} {}\n", checkbox(question), question.text));
        }
    }

    report
}

/// Write a report for `record` to `output`
pub fn write_report(record: &DayRecord, output: &Path) -> Result<()> {
    atomic_write(output, &render_report(record))
        .with_context(|| format!("Failed to write report: {}", output.display()))
}
