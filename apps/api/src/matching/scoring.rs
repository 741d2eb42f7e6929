#![allow(dead_code)]

//! Match scoring — weighted composite of skill, keyword, title, budget and
//! timeline sub-scores, each independently capped.
//!
//! Pure and deterministic: no I/O, no hidden state, no error paths. Missing
//! optional fields degrade to neutral/zero contributions instead of failing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::tokenizer::tokenize;
use crate::models::{Job, Profile, SalaryRange};

// ────────────────────────────────────────────────────────────────────────────
// Weights and breakdown
// ────────────────────────────────────────────────────────────────────────────

/// Relative weight of each scoring dimension. Callers may override per request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub keywords: f64,
    pub title: f64,
    pub budget: f64,
    pub timeline: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.55,
            keywords: 0.2,
            title: 0.1,
            budget: 0.1,
            timeline: 0.05,
        }
    }
}

/// Per-dimension sub-scores plus the weighted composite in `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_score: u32,
    pub keyword_score: u32,
    pub title_score: u32,
    pub budget_score: u32,
    pub timeline_score: u32,
    pub total: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Composite
// ────────────────────────────────────────────────────────────────────────────

/// Composite match score in `[0, 100]` for a job against a profile.
pub fn compute_match_score(job: &Job, profile: &Profile, weights: &MatchWeights) -> u32 {
    compute_match_breakdown(job, profile, weights).total
}

/// Full per-dimension breakdown. `total = round(Σ subscore × weight)`,
/// clamped to `[0, 100]`.
pub fn compute_match_breakdown(
    job: &Job,
    profile: &Profile,
    weights: &MatchWeights,
) -> MatchBreakdown {
    let skill_score = skill_overlap_score(job, profile);
    let keyword_score = keyword_hit_score(job, profile);
    let title_score = title_overlap_score(job, profile);
    let budget_score = budget_fit_score(job.budget, profile.preferred_salary);
    let timeline_score = timeline_signal_score(&job.timeline);

    let total = (skill_score as f64 * weights.skills
        + keyword_score as f64 * weights.keywords
        + title_score as f64 * weights.title
        + budget_score as f64 * weights.budget
        + timeline_score as f64 * weights.timeline)
        .round()
        .clamp(0.0, 100.0) as u32;

    MatchBreakdown {
        skill_score,
        keyword_score,
        title_score,
        budget_score,
        timeline_score,
        total,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// `min(100, 20 × |profile.skills ∩ job.skills|)`, case-insensitive.
fn skill_overlap_score(job: &Job, profile: &Profile) -> u32 {
    let mine: HashSet<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
    let theirs: HashSet<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
    let overlap = mine.intersection(&theirs).count() as u32;
    (20 * overlap).min(100)
}

/// `min(50, 10 × hits)` where a profile skill hits when all of its tokens
/// appear in the tokenized job description or title. Tokenizing the skill
/// side means "Node.js" still hits a description that says "node js".
fn keyword_hit_score(job: &Job, profile: &Profile) -> u32 {
    let haystack: HashSet<String> = tokenize(&job.description)
        .into_iter()
        .chain(tokenize(&job.title))
        .collect();

    let hits = profile
        .skills
        .iter()
        .filter(|skill| {
            let tokens = tokenize(skill);
            !tokens.is_empty() && tokens.iter().all(|t| haystack.contains(t))
        })
        .count() as u32;

    (10 * hits).min(50)
}

/// `min(40, 10 × count(profile title tokens found in job title tokens))`.
fn title_overlap_score(job: &Job, profile: &Profile) -> u32 {
    let job_tokens: HashSet<String> = tokenize(&job.title).into_iter().collect();
    let hits = tokenize(&profile.title)
        .iter()
        .filter(|t| job_tokens.contains(*t))
        .count() as u32;
    (10 * hits).min(40)
}

/// 20 when either side has no budget data; 30 inside the preferred band;
/// 25 when the budget lands within 70% of the band's floor; 10 otherwise.
fn budget_fit_score(budget: Option<f64>, preference: Option<SalaryRange>) -> u32 {
    let (budget, range) = match (budget, preference) {
        (Some(b), Some(r)) => (b, r),
        _ => return 20,
    };

    if budget >= range.min && budget <= range.max {
        30
    } else if budget < range.min && budget >= 0.7 * range.min {
        25
    } else {
        10
    }
}

/// Short engagements score highest: "week" → 25, "month" → 20, anything
/// else (including an empty timeline) → 15.
fn timeline_signal_score(timeline: &str) -> u32 {
    let t = timeline.to_lowercase();
    if t.contains("week") {
        25
    } else if t.contains("month") {
        20
    } else {
        15
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
