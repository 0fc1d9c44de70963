use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of visual layouts a resume can be rendered with.
///
/// Stored as lowercase text; unknown identifiers coerce to [`TemplateKind::Classic`]
/// rather than erroring, so a stale client can never wedge a resume.
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
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Minimal,
    Professional,
    Creative,
}

impl TemplateKind {
    /// Parses a template identifier, falling back to the default layout
    /// for unknown or missing values.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::from_str(v.trim()).ok())
            .unwrap_or_default()
    }

    /// Short human description shown by the template listing endpoint.
    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "Serif layout with ruled section headings",
            TemplateKind::Modern => "Banner header with skill pills",
            TemplateKind::Minimal => "Centered, understated single column",
            TemplateKind::Professional => "Sidebar for contact and skills",
            TemplateKind::Creative => "Card sections with tagged skills",
        }
    }
}

/// Structured resume content as authored by the client.
///
/// Every field is optional; layouts omit absent fields instead of rendering
/// placeholders. Unknown keys are preserved verbatim so content round-trips
/// unchanged. Skills stay a single comma-separated string at this boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ResumeContent {
    /// Splits the comma-separated skills string into trimmed, non-empty items.
    pub fn skills_list(&self) -> Vec<&str> {
        self.skills
            .as_deref()
            .map(|s| s.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: ResumeContent,
    pub template: TemplateKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of POST /api/resumes. Required fields are validated in the service
/// layer so that missing input surfaces as a 400, not a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResume {
    pub title: Option<String>,
    pub content: Option<ResumeContent>,
    pub template: Option<String>,
}

/// Body of PUT /api/resumes/{id}. A full replace of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResume {
    pub title: Option<String>,
    pub content: Option<ResumeContent>,
    pub template: Option<String>,
}
