//! Fallback scorer: deterministic keyword analysis with no network dependency.
//!
//! Used whenever the remote provider is unavailable. Total over every resume
//! that passed the length precondition.
//!
//! Algorithm:
//! 1. word count = whitespace tokens
//! 2. current skills = catalog labels whose probe token appears in the text
//! 3. score = round(clamp(45 + 0.12·words + 2·skills, 30, 95))
//! 4. suited roles = roles with ≥ 2 keyword hits, else a default pair
//! 5. job match / gaps from the taxonomy entry of the normalized title
//! 6. strengths and improvements sliced from fixed banks by word count

use std::ops::Range;
use std::sync::Arc;

use uuid::Uuid;

use crate::analysis::detector::{detect_skills, mentions_skill};
use crate::analysis::models::{
    AnalysisMethod, AnalysisPayload, AnalysisResult, MAX_CURRENT_SKILLS, MAX_IMPROVEMENTS,
    MAX_SKILLS_TO_ACQUIRE, MAX_STRENGTHS, MAX_SUGGESTED_SKILLS, MAX_SUITED_ROLES,
};
use crate::analysis::normalizer::normalize_job_title;
use crate::analysis::taxonomy::{
    self, DEFAULT_SUITED_ROLES, GENERAL_IMPROVEMENTS, GENERAL_STRENGTHS, ROLE_KEYWORDS,
    SKILL_CATALOG, UNKNOWN_ROLE_SKILLS_TO_ACQUIRE, UNKNOWN_ROLE_SUGGESTED_SKILLS,
};

const BASE_SCORE: f64 = 45.0;
const SCORE_PER_WORD: f64 = 0.12;
const SCORE_PER_SKILL: f64 = 2.0;
const MIN_FALLBACK_SCORE: f64 = 30.0;
const MAX_FALLBACK_SCORE: f64 = 95.0;

/// A role qualifies as "suited" at this many keyword hits.
const ROLE_KEYWORD_THRESHOLD: usize = 2;

/// Placeholder job-match range for titles outside the taxonomy.
pub const UNKNOWN_ROLE_MATCH_RANGE: Range<u32> = 40..70;

/// Source of the placeholder job match for unknown roles.
pub trait MatchSampler: Send + Sync {
    fn sample(&self, range: Range<u32>) -> u32;
}

/// Always returns the same value, keeping the fallback fully reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub u32);

impl Default for FixedSampler {
    fn default() -> Self {
        Self(55)
    }
}

impl MatchSampler for FixedSampler {
    fn sample(&self, _range: Range<u32>) -> u32 {
        self.0.min(100)
    }
}

/// Draws uniformly from the range using v4 UUID entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl MatchSampler for RandomSampler {
    fn sample(&self, range: Range<u32>) -> u32 {
        let span = range.end.saturating_sub(range.start);
        if span == 0 {
            return range.start;
        }
        range.start + (Uuid::new_v4().as_u128() % span as u128) as u32
    }
}

/// Deterministic keyword-based scorer.
#[derive(Clone)]
pub struct FallbackScorer {
    sampler: Arc<dyn MatchSampler>,
}

impl Default for FallbackScorer {
    fn default() -> Self {
        Self::new(Arc::new(FixedSampler::default()))
    }
}

impl FallbackScorer {
    pub fn new(sampler: Arc<dyn MatchSampler>) -> Self {
        Self { sampler }
    }

    /// Scores a resume and stamps the result as fallback-sourced.
    pub fn analyze(&self, resume_text: &str, job_title: &str) -> AnalysisResult {
        let payload = self.score(resume_text, job_title);
        AnalysisResult::from_payload(payload, job_title, AnalysisMethod::Fallback)
    }

    fn score(&self, resume_text: &str, job_title: &str) -> AnalysisPayload {
        let lower = resume_text.to_lowercase();
        let word_count = resume_text.split_whitespace().count();

        let current_skills = detect_skills(resume_text, SKILL_CATALOG);
        let score = compute_score(word_count, current_skills.len());
        let suited_roles = suited_roles(&lower);

        let (job_match, skills_to_acquire, suggested_skills) = if job_title.trim().is_empty() {
            let suggested: Vec<&str> = SKILL_CATALOG
                .iter()
                .copied()
                .filter(|s| !current_skills.contains(s))
                .take(MAX_SUGGESTED_SKILLS)
                .collect();
            (None, Vec::new(), suggested)
        } else {
            let role_key = normalize_job_title(job_title);
            match taxonomy::lookup(&role_key) {
                Some(entry) => {
                    let all_required: Vec<&str> =
                        entry.required.iter().chain(entry.nice).copied().collect();
                    let matched = all_required
                        .iter()
                        .filter(|s| mentions_skill(&lower, s))
                        .count();
                    let job_match =
                        ((matched as f64 / all_required.len() as f64) * 100.0).round() as u32;
                    let missing_required = entry
                        .required
                        .iter()
                        .copied()
                        .filter(|s| !mentions_skill(&lower, s))
                        .collect();
                    let missing_nice = entry
                        .nice
                        .iter()
                        .copied()
                        .filter(|s| !mentions_skill(&lower, s))
                        .collect();
                    (Some(job_match), missing_required, missing_nice)
                }
                None => {
                    tracing::debug!("No taxonomy entry for '{role_key}', using placeholder match");
                    (
                        Some(self.sampler.sample(UNKNOWN_ROLE_MATCH_RANGE)),
                        UNKNOWN_ROLE_SKILLS_TO_ACQUIRE.to_vec(),
                        UNKNOWN_ROLE_SUGGESTED_SKILLS.to_vec(),
                    )
                }
            }
        };

        let num_strengths = (word_count / 50 + 2).clamp(2, MAX_STRENGTHS);
        let num_improvements = 6usize.saturating_sub(word_count / 70).clamp(2, MAX_IMPROVEMENTS);

        AnalysisPayload {
            score,
            job_match,
            strengths: owned(&GENERAL_STRENGTHS[..num_strengths]),
            improvements: owned(&GENERAL_IMPROVEMENTS[..num_improvements]),
            current_skills: owned_capped(&current_skills, MAX_CURRENT_SKILLS),
            suggested_skills: owned_capped(&suggested_skills, MAX_SUGGESTED_SKILLS),
            skills_to_acquire: owned_capped(&skills_to_acquire, MAX_SKILLS_TO_ACQUIRE),
            suited_roles: owned_capped(&suited_roles, MAX_SUITED_ROLES),
        }
    }
}

fn compute_score(word_count: usize, skill_count: usize) -> u32 {
    let raw = BASE_SCORE + SCORE_PER_WORD * word_count as f64 + SCORE_PER_SKILL * skill_count as f64;
    raw.clamp(MIN_FALLBACK_SCORE, MAX_FALLBACK_SCORE).round() as u32
}

fn suited_roles(lower_text: &str) -> Vec<&'static str> {
    let roles: Vec<&str> = ROLE_KEYWORDS
        .iter()
        .filter(|entry| {
            entry
                .keywords
                .iter()
                .filter(|kw| lower_text.contains(*kw))
                .count()
                >= ROLE_KEYWORD_THRESHOLD
        })
        .map(|entry| entry.role)
        .collect();

    if roles.is_empty() {
        DEFAULT_SUITED_ROLES.to_vec()
    } else {
        roles
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn owned_capped(items: &[&str], cap: usize) -> Vec<String> {
    items.iter().take(cap).map(|s| s.to_string()).collect()
}
