use std::path::Path;

use similar::TextDiff;

/// Unified diff between the current and the planned content of a file.
pub fn unified_diff(old: &str, new: &str, path: &Path) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut output = String::new();

    output.push_str(&format!(
        "--- a/{}\n+++ b/{}\n",
        path.display(),
        path.display()
    ));

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        output.push_str(&format!("{hunk}"));
    }

    output
}
