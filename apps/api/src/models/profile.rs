use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Salary band a candidate is targeting, in the marketplace's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// The acting candidate profile. Immutable for the duration of a scoring run —
/// supplied by the caller on every request, never stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_salary: Option<SalaryRange>,
    #[serde(default)]
    pub portfolio_urls: Vec<String>,
}
