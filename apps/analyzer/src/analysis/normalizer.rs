use crate::analysis::taxonomy::JOB_SKILLS;

/// Maps a free-text job title onto a canonical taxonomy key.
///
/// The first key (in declaration order) that contains the input, or that the
/// input contains, wins. Unknown titles come back lowercased and trimmed so
/// the taxonomy lookup downstream simply misses.
pub fn normalize_job_title(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    JOB_SKILLS
        .iter()
        .map(|entry| entry.role)
        .find(|key| lower.contains(key) || key.contains(lower.as_str()))
        .map(str::to_string)
        .unwrap_or(lower)
}
