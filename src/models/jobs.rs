use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job application workflow status. Stored as text using the variant name,
/// matching the wire form (`"Applied"`, `"Interview"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    sqlx::Type,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub company: String,
    pub role: String,
    pub status: JobStatus,
    pub notes: String,
    pub applied_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/jobs. Status defaults to Applied and the applied date
/// to today when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<JobStatus>,
    pub notes: Option<String>,
    pub applied_date: Option<NaiveDate>,
}

/// Body of PUT /api/jobs/{id}. A full replace of the mutable fields, with
/// the same defaulting as creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<JobStatus>,
    pub notes: Option<String>,
    pub applied_date: Option<NaiveDate>,
}
