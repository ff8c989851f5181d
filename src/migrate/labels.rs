//! Label sync for migrated issues.

/// Labels that must never follow an issue to the destination repository.
const BANNED_LABELS: &[&str] = &["migration/essential"];

/// Compute the destination label set for a migrated issue.
///
/// The imported marker always comes first and appears exactly once;
/// source labels follow in order, minus banned ones.
pub fn sync_labels(source_labels: &[String], imported_label: &str) -> Vec<String> {
    let mut labels = vec![imported_label.to_string()];

    for label in source_labels {
        if BANNED_LABELS.contains(&label.as_str()) || label == imported_label {
            continue;
        }
        labels.push(label.clone());
    }

    labels
}
