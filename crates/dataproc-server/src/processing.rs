//! Text processing applied to accepted input.

use crate::config::ProcessingLimits;

/// Suffix appended to output cut at [`ProcessingLimits::truncate_after`].
pub const TRUNCATION_MARKER: &str = "... (truncated)";

/// Trim, upper-case, then cut to `limits.truncate_after` characters.
///
/// The length check runs after upper-casing, which can grow the text
/// (`ß` becomes `SS`).
pub fn process(input: &str, limits: &ProcessingLimits) -> String {
    let upper = input.trim().to_uppercase();
    if upper.chars().count() <= limits.truncate_after {
        return upper;
    }

    let mut cut: String = upper.chars().take(limits.truncate_after).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}
