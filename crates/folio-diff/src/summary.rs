//! Human-readable change summaries.
//!
//! The site is written in French, so the phrases are too.

use crate::version_diff::DiffSummary;

/// Phrase used when no block changed.
pub const NO_CHANGES: &str = "Aucune modification";

/// Describe the non-zero counts of `summary`, comma separated, in the order
/// added, removed, modified. Counts above one are pluralized.
pub fn change_summary(summary: &DiffSummary) -> String {
    let parts: Vec<String> = [
        (summary.added, "ajouté"),
        (summary.removed, "supprimé"),
        (summary.modified, "modifié"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, verb)| {
        let plural = if count > 1 { "s" } else { "" };
        format!("{count} bloc{plural} {verb}{plural}")
    })
    .collect();

    if parts.is_empty() {
        NO_CHANGES.to_string()
    } else {
        parts.join(", ")
    }
}
