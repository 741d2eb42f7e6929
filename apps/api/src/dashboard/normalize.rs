//! Input normalization — raw client payloads become typed records in one
//! explicit step, with the defaulting rules enumerated as data instead of
//! inline `x || y || z` fallbacks scattered through handlers.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::dashboard::models::{Application, ApplicationStatus, SavedJob};
use crate::errors::AppError;
use crate::models::Job;

// ────────────────────────────────────────────────────────────────────────────
// Defaulting rules
// ────────────────────────────────────────────────────────────────────────────

/// Every defaultable application field and its fallback value, in one place.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationDefaults {
    pub status: ApplicationStatus,
    pub company: &'static str,
    pub notes: &'static str,
}

pub const APPLICATION_DEFAULTS: ApplicationDefaults = ApplicationDefaults {
    status: ApplicationStatus::Applied,
    company: "",
    notes: "",
};

// ────────────────────────────────────────────────────────────────────────────
// Drafts
// ────────────────────────────────────────────────────────────────────────────

/// Raw application payload as clients actually send it. Older clients sent
/// the job reference as `id`; the serde alias keeps them working.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationDraft {
    #[serde(alias = "id")]
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

/// Partial update for an existing application.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationUpdate {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

/// Payload for bookmarking a job.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedJobDraft {
    pub job: Job,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Validates a draft and produces a typed `Application`, applying the
/// defaulting rules for everything the client omitted.
pub fn normalize_application(
    draft: ApplicationDraft,
    defaults: &ApplicationDefaults,
) -> Result<Application, AppError> {
    let job_id = draft
        .job_id
        .ok_or_else(|| AppError::Validation("job_id is required".to_string()))?;
    let job_title = draft
        .job_title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_title is required".to_string()))?;

    Ok(Application {
        id: Uuid::new_v4(),
        job_id,
        job_title,
        company: draft.company.unwrap_or_else(|| defaults.company.to_string()),
        status: draft.status.unwrap_or(defaults.status),
        notes: draft.notes.unwrap_or_else(|| defaults.notes.to_string()),
        applied_at: Utc::now(),
    })
}

/// Wraps a job into a `SavedJob` bookmark.
pub fn normalize_saved_job(draft: SavedJobDraft) -> SavedJob {
    SavedJob {
        id: Uuid::new_v4(),
        job: draft.job,
        saved_at: Utc::now(),
    }
}

/// Applies a partial update to an existing application.
pub fn apply_application_update(mut application: Application, update: ApplicationUpdate) -> Application {
    if let Some(status) = update.status {
        application.status = status;
    }
    if let Some(notes) = update.notes {
        application.notes = notes;
    }
    application
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_omitted_fields() {
        let draft = ApplicationDraft {
            job_id: Some(Uuid::new_v4()),
            job_title: Some("Backend Engineer".to_string()),
            company: None,
            status: None,
            notes: None,
        };
        let application = normalize_application(draft, &APPLICATION_DEFAULTS).unwrap();
        assert_eq!(application.status, ApplicationStatus::Applied);
        assert_eq!(application.company, "");
        assert_eq!(application.notes, "");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let draft = ApplicationDraft {
            job_id: Some(Uuid::new_v4()),
            job_title: Some("Backend Engineer".to_string()),
            company: Some("Globex".to_string()),
            status: Some(ApplicationStatus::Interviewing),
            notes: Some("second round".to_string()),
        };
        let application = normalize_application(draft, &APPLICATION_DEFAULTS).unwrap();
        assert_eq!(application.status, ApplicationStatus::Interviewing);
        assert_eq!(application.company, "Globex");
        assert_eq!(application.notes, "second round");
    }

    #[test]
    fn test_legacy_id_field_aliases_job_id() {
        let job_id = Uuid::new_v4();
        let draft: ApplicationDraft = serde_json::from_value(json!({
            "id": job_id,
            "job_title": "Data Engineer"
        }))
        .unwrap();
        assert_eq!(draft.job_id, Some(job_id));
    }

    #[test]
    fn test_missing_job_id_is_rejected() {
        let draft: ApplicationDraft =
            serde_json::from_value(json!({ "job_title": "Data Engineer" })).unwrap();
        let err = normalize_application(draft, &APPLICATION_DEFAULTS).unwrap_err();
        assert!(err.to_string().contains("job_id"));
    }

    #[test]
    fn test_blank_job_title_is_rejected() {
        let draft: ApplicationDraft = serde_json::from_value(json!({
            "job_id": Uuid::new_v4(),
            "job_title": "   "
        }))
        .unwrap();
        assert!(normalize_application(draft, &APPLICATION_DEFAULTS).is_err());
    }

    #[test]
    fn test_partial_update_touches_only_supplied_fields() {
        let draft = ApplicationDraft {
            job_id: Some(Uuid::new_v4()),
            job_title: Some("Backend Engineer".to_string()),
            company: Some("Globex".to_string()),
            status: None,
            notes: Some("keep me".to_string()),
        };
        let application = normalize_application(draft, &APPLICATION_DEFAULTS).unwrap();

        let updated = apply_application_update(
            application,
            ApplicationUpdate {
                status: Some(ApplicationStatus::Offer),
                notes: None,
            },
        );
        assert_eq!(updated.status, ApplicationStatus::Offer);
        assert_eq!(updated.notes, "keep me");
        assert_eq!(updated.company, "Globex");
    }
}
