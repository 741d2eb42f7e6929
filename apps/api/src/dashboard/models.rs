use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Job;

/// Where an application sits in the candidate's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Interviewing,
    Offer,
    Rejected,
    Withdrawn,
}

/// A tracked job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub notes: String,
    pub applied_at: DateTime<Utc>,
}

/// A job bookmarked for later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: Uuid,
    pub job: Job,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ProposalSubmitted,
    ApplicationUpdate,
    System,
}

/// An unread/read dashboard notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message,
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// Derived dashboard counts. Computed on demand, never stored.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub applications_total: usize,
    pub applications_by_status: HashMap<ApplicationStatus, usize>,
    pub saved_jobs: usize,
    pub proposals_submitted: usize,
    pub unread_notifications: usize,
}
