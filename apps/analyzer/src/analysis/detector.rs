//! Keyword skill detection.
//!
//! A skill label is reduced to a single probe token (first word, with `/`
//! treated as a separator) and counted as present when that token appears
//! anywhere in the lowercased resume. Multi-word labels such as "REST APIs"
//! therefore match on "rest" alone.

/// Derives the lowercase probe token for a skill label.
pub fn probe_token(label: &str) -> String {
    label
        .replace('/', " ")
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Returns true if `lower_text` (already lowercased) mentions the skill.
///
/// Every membership test in the fallback goes through here.
pub fn mentions_skill(lower_text: &str, label: &str) -> bool {
    lower_text.contains(probe_token(label).as_str())
}

/// Returns the catalog labels present in `text`, in catalog order.
pub fn detect_skills(text: &str, catalog: &[&'static str]) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    catalog
        .iter()
        .copied()
        .filter(|label| mentions_skill(&lower, label))
        .collect()
}
