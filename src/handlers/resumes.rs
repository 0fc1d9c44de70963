//! Resume CRUD and export handlers
//!
//! All routes here sit behind the JWT middleware; the acting user arrives
//! via request extensions and is the only owner these handlers operate for.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::Result,
    export,
    middleware::auth::AuthenticatedUser,
    models::resumes::{CreateResume, UpdateResume},
    render,
    services::resumes,
    state::AppState,
};

/// GET /api/resumes
///
/// Lists the acting user's resumes, most recently updated first. Content is
/// parsed back from its stored JSON document form.
///
/// # HTTP Status Codes
/// - `200 OK`: Array of resumes
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn list_resumes(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    let resumes = resumes::list_resumes(&mut conn, auth_user.id).await?;

    Ok(Json(serde_json::json!(resumes)))
}

/// POST /api/resumes
///
/// Creates a resume owned by the acting user. The owner is stamped from the
/// authenticated context, never from the body.
///
/// # Request Body
/// - `title`: Resume title (required)
/// - `content`: Structured content document (required)
/// - `template`: Template identifier; unknown values fall back to classic
///
/// # HTTP Status Codes
/// - `201 CREATED`: Resume created; body carries the new id
/// - `400 BAD_REQUEST`: Missing title or content
pub async fn create_resume(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateResume>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.pool.acquire().await?;

    let resume = resumes::create_resume(&mut conn, auth_user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Resume created successfully",
            "resumeId": resume.id,
        })),
    ))
}

/// PUT /api/resumes/{id}
///
/// Full replace of a resume's title, content, and template. Refreshes the
/// update timestamp.
///
/// # HTTP Status Codes
/// - `200 OK`: Resume updated
/// - `400 BAD_REQUEST`: Missing title or content
/// - `403 FORBIDDEN`: Resume belongs to another user
/// - `404 NOT_FOUND`: No such resume
pub async fn update_resume(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateResume>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    resumes::update_resume(&mut conn, auth_user.id, id, request).await?;

    Ok(Json(serde_json::json!({
        "message": "Resume updated successfully",
    })))
}

/// DELETE /api/resumes/{id}
///
/// # HTTP Status Codes
/// - `200 OK`: Resume deleted
/// - `403 FORBIDDEN`: Resume belongs to another user
/// - `404 NOT_FOUND`: No such resume
pub async fn delete_resume(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    resumes::delete_resume(&mut conn, auth_user.id, id).await?;

    Ok(Json(serde_json::json!({
        "message": "Resume deleted successfully",
    })))
}

/// GET /api/resumes/{id}/export
///
/// Renders the resume with its stored template and returns the result as a
/// downloadable PDF. Operates on a transient render only; a failure here
/// never touches the stored resume.
///
/// # HTTP Status Codes
/// - `200 OK`: `application/pdf` bytes with an attachment disposition
/// - `403 FORBIDDEN`: Resume belongs to another user
/// - `404 NOT_FOUND`: No such resume
/// - `500 INTERNAL_SERVER_ERROR`: PDF serialization failure
pub async fn export_resume(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;

    let resume = resumes::get_owned_resume(&mut conn, auth_user.id, id).await?;

    let document = render::render(&resume.content, resume.template);
    let bytes = export::pdf_bytes(&document)?;

    let filename = format!(
        "{}-resume.pdf",
        sanitize_filename(resume.content.name.as_deref().unwrap_or("resume"))
    );

    tracing::info!(resume_id = %id, size = bytes.len(), "Exported resume PDF");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    ))
}

/// Keeps filenames to alphanumerics, dashes, and underscores; whitespace
/// becomes underscores.
fn sanitize_filename(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}
