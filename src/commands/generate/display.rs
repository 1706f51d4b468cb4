//! Display and formatting utilities for generate command output.

use crate::error::Result;
use crate::placement::{FileOutcome, FileStatus, PlacementReport};

/// One status line per document, operations first.
pub fn render_lines(report: &PlacementReport) -> Vec<String> {
    report.outcomes().into_iter().map(render_line).collect()
}

fn render_line(outcome: &FileOutcome) -> String {
    let path = outcome.path.display();
    match outcome.status {
        FileStatus::Created => format!("[OK] Created: {}", path),
        FileStatus::Skipped => format!("[WARN] Already exists: {}", path),
        FileStatus::Planned => format!("[DRY] Would create: {}", path),
    }
}

/// The report as pretty-printed JSON.
pub fn render_json(report: &PlacementReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
