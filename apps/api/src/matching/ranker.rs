//! Ranker — scores every job, drafts a cover note per job, and keeps the
//! top N matches in descending score order.

use serde::{Deserialize, Serialize};

use crate::generation::cover_note::{generate_proposal, ProposalStyle};
use crate::matching::scoring::{compute_match_breakdown, MatchBreakdown, MatchWeights};
use crate::models::{Job, Profile, WorkSample};

/// Portfolio samples attached to each match.
const MAX_SAMPLES: usize = 2;

/// Matches returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// A job scored against a profile, with the drafted cover note attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub job: Job,
    pub score: u32,
    pub breakdown: MatchBreakdown,
    pub proposal_text: String,
    pub samples: Vec<WorkSample>,
}

/// Knobs for a ranking run.
#[derive(Debug, Clone)]
pub struct RankOptions {
    pub top_n: usize,
    pub weights: MatchWeights,
    pub style: ProposalStyle,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            weights: MatchWeights::default(),
            style: ProposalStyle::default(),
        }
    }
}

/// Scores, drafts, sorts, truncates.
///
/// The sort is stable and descending by score, so equal-score jobs keep their
/// input order. Output length is at most `opts.top_n`.
pub fn rank_jobs(jobs: &[Job], profile: &Profile, opts: &RankOptions) -> Vec<ScoredMatch> {
    let samples = portfolio_samples(profile);

    let mut matches: Vec<ScoredMatch> = jobs
        .iter()
        .map(|job| {
            let breakdown = compute_match_breakdown(job, profile, &opts.weights);
            ScoredMatch {
                score: breakdown.total,
                breakdown,
                proposal_text: generate_proposal(job, profile, &opts.style),
                samples: samples.clone(),
                job: job.clone(),
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(opts.top_n);
    matches
}

/// First `MAX_SAMPLES` portfolio URLs, titled by position.
fn portfolio_samples(profile: &Profile) -> Vec<WorkSample> {
    profile
        .portfolio_urls
        .iter()
        .take(MAX_SAMPLES)
        .enumerate()
        .map(|(i, url)| WorkSample {
            title: format!("Portfolio sample {}", i + 1),
            url: url.clone(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_profile(skills: &[&str], portfolio_urls: &[&str]) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            display_name: "Sam Ortiz".to_string(),
            title: "Backend Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            preferred_salary: None,
            portfolio_urls: portfolio_urls.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn make_job(title: &str, skills: &[&str]) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            budget: None,
            timeline: String::new(),
            client_name: String::new(),
        }
    }

    #[test]
    fn test_output_capped_at_top_n() {
        let jobs: Vec<Job> = (0..10).map(|i| make_job(&format!("Job {i}"), &[])).collect();
        let opts = RankOptions {
            top_n: 3,
            ..Default::default()
        };
        let ranked = rank_jobs(&jobs, &make_profile(&[], &[]), &opts);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_scores_are_non_increasing() {
        let jobs = vec![
            make_job("No overlap", &[]),
            make_job("Full overlap", &["Rust", "Tokio"]),
            make_job("Partial overlap", &["Rust"]),
        ];
        let ranked = rank_jobs(&jobs, &make_profile(&["Rust", "Tokio"], &[]), &RankOptions::default());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked[0].job.title, "Full overlap");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let jobs = vec![
            make_job("First twin", &["Rust"]),
            make_job("Second twin", &["Rust"]),
        ];
        let ranked = rank_jobs(&jobs, &make_profile(&["Rust"], &[]), &RankOptions::default());
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].job.title, "First twin");
        assert_eq!(ranked[1].job.title, "Second twin");
    }

    #[test]
    fn test_at_most_two_portfolio_samples_attached() {
        let profile = make_profile(&[], &["https://a.dev", "https://b.dev", "https://c.dev"]);
        let ranked = rank_jobs(&[make_job("Any", &[])], &profile, &RankOptions::default());
        let samples = &ranked[0].samples;
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].title, "Portfolio sample 1");
        assert_eq!(samples[0].url, "https://a.dev");
        assert_eq!(samples[1].url, "https://b.dev");
    }

    #[test]
    fn test_every_match_carries_a_cover_note() {
        let ranked = rank_jobs(
            &[make_job("Platform work", &[])],
            &make_profile(&["Rust"], &[]),
            &RankOptions::default(),
        );
        assert!(ranked[0].proposal_text.contains("Platform work"));
    }

    #[test]
    fn test_empty_job_list_ranks_to_empty() {
        let ranked = rank_jobs(&[], &make_profile(&[], &[]), &RankOptions::default());
        assert!(ranked.is_empty());
    }
}
