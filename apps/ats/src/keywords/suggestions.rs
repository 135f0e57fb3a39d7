pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;

/// Renders the first `limit` missing keywords as coaching sentences.
pub fn format_suggestions(missing: &[String], limit: usize) -> Vec<String> {
    missing
        .iter()
        .take(limit)
        .map(|keyword| {
            format!(
                "Add experience/skill: \"{keyword}\" — e.g. \"Worked on {keyword} for 6+ months; implemented X that improved Y by Z%.\""
            )
        })
        .collect()
}
