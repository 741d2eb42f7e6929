use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A marketplace job posting, treated as read-only input.
///
/// Every field except `id` and `title` tolerates absence — scoring degrades
/// to neutral contributions rather than rejecting the posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub client_name: String,
}
