//! Template listing handler

use axum::{Json, extract::Extension};
use strum::IntoEnumIterator;

use crate::{middleware::auth::AuthenticatedUser, models::resumes::TemplateKind};

/// GET /api/templates
///
/// Lists the available resume templates with short descriptions.
///
/// # HTTP Status Codes
/// - `200 OK`: Array of template descriptors
/// - `401 UNAUTHORIZED`: Missing or invalid token
pub async fn list_templates(
    Extension(_auth_user): Extension<AuthenticatedUser>,
) -> Json<serde_json::Value> {
    let templates: Vec<serde_json::Value> = TemplateKind::iter()
        .map(|t| {
            serde_json::json!({
                "id": t.to_string(),
                "description": t.description(),
            })
        })
        .collect();

    Json(serde_json::json!({ "templates": templates }))
}
