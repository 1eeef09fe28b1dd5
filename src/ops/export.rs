use std::fs;
use std::path::PathBuf;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::Tracker;

use super::metrics::Metrics;

/// Error type for the stats export
#[derive(Debug, thiserror::Error)]
#[error("could not write {path}: {source}")]
pub struct ExportError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Build the plain-text stats report
pub fn render_report(tracker: &Tracker) -> String {
    let summary = Metrics::of(tracker).summary();
    let mut out = String::new();

    out.push_str(&format!("{}-Day Tracker Export\n", tracker.days()));
    out.push_str("===================\n\n");
    out.push_str(&format!(
        "Overall: {}/{} ({}%)\n\n",
        summary.checked, summary.total, summary.percent
    ));

    out.push_str("Per-habit completion:\n");
    for habit in &summary.habits {
        out.push_str(&format!(
            "- {}: {}/{} ({}%)\n",
            tracker.habits.name(habit.habit),
            habit.checked,
            habit.total,
            habit.percent
        ));
    }

    out.push_str("\nWeekly breakdown:\n");
    for week in &summary.weeks {
        out.push_str(&format!(
            "- Week {} (Day {}-{}): {}/{} ({}%)\n",
            week.week, week.first_day, week.last_day, week.checked, week.total, week.percent
        ));
    }
    out
}

/// Write the report to the configured export path.
///
/// A plain overwrite: the report is a snapshot for reading, not tracker
/// state, so it does not go through the atomic writer.
pub fn export_stats(tracker: &Tracker) -> Result<PathBuf, ExportError> {
    let path = tracker.export_path();
    let report = render_report(tracker);
    if let Err(e) = fs::write(&path, &report) {
        recovery::log_recovery(
            &tracker.data_dir,
            RecoveryEntry::now(RecoveryCategory::Export, "stats export failed")
                .field("Target", path.display())
                .field("Error", &e)
                .body(report),
        );
        return Err(ExportError { path, source: e });
    }
    Ok(path)
}
