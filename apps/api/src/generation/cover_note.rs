//! Cover-note generation — purely deterministic string templating from the
//! job, the profile, and the requested style. No external calls, no failure
//! modes: missing profile fields drop their clause instead of erroring.

use serde::{Deserialize, Serialize};

use crate::generation::tone::{tone_template, ProposalTone};
use crate::models::{Job, Profile};

/// Requested overall length of the cover note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// Style options for a generated cover note.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProposalStyle {
    #[serde(default)]
    pub tone: ProposalTone,
    #[serde(default)]
    pub length: ProposalLength,
    #[serde(default)]
    pub include_pilot: bool,
    #[serde(default)]
    pub include_metrics: bool,
}

/// Heading of the deliverables block. Omitted entirely when `length = short`.
pub const DELIVERABLES_HEADING: &str = "Here's how I'll deliver:";

/// How many profile skills are surfaced in the intro and deliverables block.
const LEAD_SKILL_COUNT: usize = 3;

/// Renders a complete cover note for `job` on behalf of `profile`.
pub fn generate_proposal(job: &Job, profile: &Profile, style: &ProposalStyle) -> String {
    let tone = tone_template(style.tone);
    let mut sections: Vec<String> = Vec::new();

    sections.push(tone.greeting.to_string());
    sections.push(intro_paragraph(job, profile, tone.interest_line));

    if style.length != ProposalLength::Short {
        sections.push(deliverables_block(profile));
        if style.length == ProposalLength::Long {
            sections.push(working_style_paragraph(job));
        }
    }

    if style.include_metrics {
        sections.push(
            "In recent engagements of this shape I've cut page load times by ~35% and \
             doubled deployment frequency; I'd target the same kind of measurable outcome here."
                .to_string(),
        );
    }

    if style.include_pilot {
        sections.push(
            "If it helps de-risk the decision, I'm happy to start with a small paid pilot \
             so you can evaluate the fit before committing further."
                .to_string(),
        );
    }

    sections.push(format!("{}\n{}", tone.signoff, profile.display_name));

    sections.join("\n\n")
}

/// One-sentence introduction templated from the profile's title and lead
/// skills plus the job title. Degrades clause by clause when fields are empty.
fn intro_paragraph(job: &Job, profile: &Profile, interest_line: &str) -> String {
    let lead_skills = profile
        .skills
        .iter()
        .take(LEAD_SKILL_COUNT)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let who = match (profile.title.trim().is_empty(), lead_skills.is_empty()) {
        (false, false) => format!(
            "I'm a {} working hands-on with {}",
            profile.title, lead_skills
        ),
        (false, true) => format!("I'm a {}", profile.title),
        (true, false) => format!("I work hands-on with {lead_skills}"),
        (true, true) => "I build and ship production software".to_string(),
    };

    format!(
        "{who}, and your \"{}\" opening stood out to me. {interest_line}",
        job.title
    )
}

/// Bulleted deliverables block. Falls back to engagement-shape bullets when
/// the profile lists no skills.
fn deliverables_block(profile: &Profile) -> String {
    let mut bullets: Vec<String> = profile
        .skills
        .iter()
        .take(LEAD_SKILL_COUNT)
        .map(|skill| format!("- {skill} work delivered production-ready, reviewed, and tested"))
        .collect();

    if bullets.is_empty() {
        bullets.push("- A scoped delivery plan agreed within the first week".to_string());
    }
    bullets.push("- Clear written progress updates, with a demo at every milestone".to_string());

    format!("{DELIVERABLES_HEADING}\n{}", bullets.join("\n"))
}

fn working_style_paragraph(job: &Job) -> String {
    format!(
        "On process: I front-load the riskiest unknowns, keep the scope of \"{}\" visible in a \
         shared tracker, and flag trade-offs early rather than surprising you at handoff. \
         You'll always know what's done, what's next, and what's blocked.",
        job.title
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            display_name: "Priya Raman".to_string(),
            title: "Full Stack Developer".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string(), "SQL".to_string()],
            preferred_salary: None,
            portfolio_urls: vec![],
        }
    }

    fn make_job() -> Job {
        Job {
            id: Uuid::new_v4(),
            title: "Marketplace Dashboard Revamp".to_string(),
            description: "Rebuild our analytics dashboard.".to_string(),
            skills: vec!["React".to_string()],
            budget: Some(4000.0),
            timeline: "6 weeks".to_string(),
            client_name: "Northwind".to_string(),
        }
    }

    #[test]
    fn test_short_length_omits_deliverables_block() {
        let style = ProposalStyle {
            length: ProposalLength::Short,
            ..Default::default()
        };
        let note = generate_proposal(&make_job(), &make_profile(), &style);
        assert!(!note.contains(DELIVERABLES_HEADING));
    }

    #[test]
    fn test_medium_length_includes_deliverables_block() {
        let style = ProposalStyle::default();
        let note = generate_proposal(&make_job(), &make_profile(), &style);
        assert!(note.contains(DELIVERABLES_HEADING));
    }

    #[test]
    fn test_long_length_adds_working_style_paragraph() {
        let medium = generate_proposal(&make_job(), &make_profile(), &ProposalStyle::default());
        let long = generate_proposal(
            &make_job(),
            &make_profile(),
            &ProposalStyle {
                length: ProposalLength::Long,
                ..Default::default()
            },
        );
        assert!(long.contains("On process:"));
        assert!(!medium.contains("On process:"));
        assert!(long.len() > medium.len());
    }

    #[test]
    fn test_metrics_sentence_is_opt_in() {
        let without = generate_proposal(&make_job(), &make_profile(), &ProposalStyle::default());
        let with = generate_proposal(
            &make_job(),
            &make_profile(),
            &ProposalStyle {
                include_metrics: true,
                ..Default::default()
            },
        );
        assert!(with.contains("~35%"));
        assert!(!without.contains("~35%"));
    }

    #[test]
    fn test_pilot_sentence_is_opt_in() {
        let without = generate_proposal(&make_job(), &make_profile(), &ProposalStyle::default());
        let with = generate_proposal(
            &make_job(),
            &make_profile(),
            &ProposalStyle {
                include_pilot: true,
                ..Default::default()
            },
        );
        assert!(with.contains("paid pilot"));
        assert!(!without.contains("paid pilot"));
    }

    #[test]
    fn test_greeting_follows_tone() {
        let friendly = generate_proposal(
            &make_job(),
            &make_profile(),
            &ProposalStyle {
                tone: ProposalTone::Friendly,
                ..Default::default()
            },
        );
        assert!(friendly.starts_with("Hey there!"));

        let professional = generate_proposal(&make_job(), &make_profile(), &ProposalStyle::default());
        assert!(professional.starts_with("Dear Hiring Team,"));
    }

    #[test]
    fn test_mentions_job_title_and_signs_with_display_name() {
        let note = generate_proposal(&make_job(), &make_profile(), &ProposalStyle::default());
        assert!(note.contains("Marketplace Dashboard Revamp"));
        assert!(note.trim_end().ends_with("Priya Raman"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let style = ProposalStyle {
            tone: ProposalTone::Technical,
            length: ProposalLength::Long,
            include_pilot: true,
            include_metrics: true,
        };
        let job = make_job();
        let profile = make_profile();
        assert_eq!(
            generate_proposal(&job, &profile, &style),
            generate_proposal(&job, &profile, &style)
        );
    }

    #[test]
    fn test_empty_profile_fields_degrade_gracefully() {
        let mut profile = make_profile();
        profile.title = String::new();
        profile.skills = vec![];
        let note = generate_proposal(&make_job(), &profile, &ProposalStyle::default());
        assert!(note.contains("I build and ship production software"));
        assert!(note.contains("scoped delivery plan"));
    }
}
