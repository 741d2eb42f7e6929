//! Tone calibration — maps the requested proposal tone to a greeting,
//! an interest line, and a sign-off.
//!
//! Tone changes register only. It never changes which facts the cover note
//! states, so two tones over the same inputs differ in framing, not content.

use serde::{Deserialize, Serialize};

/// Requested voice of the generated cover note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalTone {
    #[default]
    Professional,
    Concise,
    Technical,
    Friendly,
}

/// Fixed phrasing calibrated to a single tone.
#[derive(Debug, Clone)]
pub struct ToneTemplate {
    pub greeting: &'static str,
    pub interest_line: &'static str,
    pub signoff: &'static str,
}

/// Returns the phrasing template for the requested tone.
pub fn tone_template(tone: ProposalTone) -> ToneTemplate {
    match tone {
        ProposalTone::Professional => ToneTemplate {
            greeting: "Dear Hiring Team,",
            interest_line: "Your posting aligns closely with the work I specialize in.",
            signoff: "Best regards,",
        },
        ProposalTone::Concise => ToneTemplate {
            greeting: "Hi,",
            interest_line: "Short version: this is the kind of work I do every day.",
            signoff: "Thanks,",
        },
        ProposalTone::Technical => ToneTemplate {
            greeting: "Hello,",
            interest_line:
                "I read the requirements in detail and the technical scope maps directly onto my stack.",
            signoff: "Regards,",
        },
        ProposalTone::Friendly => ToneTemplate {
            greeting: "Hey there!",
            interest_line: "This project looks like a great fit, and honestly a fun one.",
            signoff: "Cheers,",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tone_has_distinct_greeting() {
        let tones = [
            ProposalTone::Professional,
            ProposalTone::Concise,
            ProposalTone::Technical,
            ProposalTone::Friendly,
        ];
        let greetings: Vec<&str> = tones.iter().map(|t| tone_template(*t).greeting).collect();
        for (i, a) in greetings.iter().enumerate() {
            for b in greetings.iter().skip(i + 1) {
                assert_ne!(a, b, "tones must not share greetings");
            }
        }
    }

    #[test]
    fn test_default_tone_is_professional() {
        assert_eq!(ProposalTone::default(), ProposalTone::Professional);
    }

    #[test]
    fn test_tone_serde_uses_snake_case() {
        let tone: ProposalTone = serde_json::from_str(r#""friendly""#).unwrap();
        assert_eq!(tone, ProposalTone::Friendly);
        assert_eq!(
            serde_json::to_string(&ProposalTone::Technical).unwrap(),
            r#""technical""#
        );
    }
}
