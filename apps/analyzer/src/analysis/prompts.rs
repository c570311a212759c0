// Prompt text for the AI analysis path.

use crate::llm_client::prompts::JSON_ONLY_REMINDER;

/// Analysis prompt template. Replace `{target_line}`, `{resume}`,
/// `{job_match_shape}` and `{job_match_rule}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert resume analyst and HR professional. Analyze the following resume and provide detailed feedback.

{target_line}

RESUME:
{resume}

Provide your analysis in the following JSON format (return ONLY valid JSON, no markdown):
{
  "score": <number 1-100>,
  "jobMatch": {job_match_shape},
  "strengths": [<up to 6 specific strengths found in the resume>],
  "improvements": [<up to 6 actionable improvements>],
  "currentSkills": [<list of detected technical/professional skills>],
  "suggestedSkills": [<list of beneficial skills to add>],
  "skillsToAcquire": [<list of skills critical for the target role>],
  "suitedRoles": [<list of roles this person is well-suited for>]
}

Requirements:
- Score should reflect overall resume quality (1-100)
{job_match_rule}
- Be specific and actionable in suggestions
- Extract skills from the actual resume content
- Provide realistic career guidance
- {reminder}"#;

/// Builds the analysis prompt. `job_title` is `None` when no target role was given.
pub fn build_analysis_prompt(resume_text: &str, job_title: Option<&str>) -> String {
    let (target_line, shape, rule) = match job_title {
        Some(title) => (
            format!("The candidate is applying for: {title}\n"),
            "<number 0-100 or null>",
            "- JobMatch should reflect how well the resume matches the specified role (0-100)",
        ),
        None => (
            String::new(),
            "null",
            "- jobMatch should be null since no target role specified",
        ),
    };

    let template = ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_match_shape}", shape)
        .replace("{job_match_rule}", rule)
        .replace("{reminder}", JSON_ONLY_REMINDER);

    substitute_once(
        &template,
        &[("{target_line}", target_line.as_str()), ("{resume}", resume_text)],
    )
}

/// Replaces each placeholder in a single left-to-right pass. Inserted values
/// are never rescanned, so caller text containing `{resume}` or similar stays
/// literal.
fn substitute_once(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((at, placeholder, value)) = values
        .iter()
        .filter_map(|(p, v)| rest.find(p).map(|at| (at, *p, *v)))
        .min_by_key(|(at, _, _)| *at)
    {
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + placeholder.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_with_job_title() {
        let prompt = build_analysis_prompt("Rust engineer resume", Some("Backend Developer"));
        assert!(prompt.contains("applying for: Backend Developer"));
        assert!(prompt.contains("<number 0-100 or null>"));
        assert!(prompt.contains("Rust engineer resume"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_prompt_without_job_title_requests_null() {
        let prompt = build_analysis_prompt("Some resume", None);
        assert!(!prompt.contains("applying for"));
        assert!(prompt.contains("\"jobMatch\": null"));
        assert!(prompt.contains("jobMatch should be null"));
    }

    #[test]
    fn test_resume_placeholders_are_not_expanded() {
        let prompt = build_analysis_prompt("Skills: {job_match_rule} {target_line}", None);
        assert!(prompt.contains("Skills: {job_match_rule} {target_line}"));
    }

    #[test]
    fn test_job_title_placeholders_are_not_expanded() {
        let prompt = build_analysis_prompt("SECRET RESUME BODY", Some("{resume}"));
        assert_eq!(prompt.matches("SECRET RESUME BODY").count(), 1);
        assert!(prompt.contains("applying for: {resume}"));

        let prompt = build_analysis_prompt("Resume", Some("{job_match_rule}"));
        assert!(prompt.contains("applying for: {job_match_rule}"));
    }

    #[test]
    fn test_substitute_once_handles_repeats_and_order() {
        let out = substitute_once("{b}-{a}-{b}", &[("{a}", "{b}"), ("{b}", "x")]);
        assert_eq!(out, "x-{b}-x");
    }
}
