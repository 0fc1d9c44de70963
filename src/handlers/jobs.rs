//! Job application CRUD handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::Result,
    middleware::auth::AuthenticatedUser,
    models::jobs::{CreateJob, UpdateJob},
    services::jobs,
    state::AppState,
};

/// GET /api/jobs
///
/// Lists the acting user's job applications, most recently created first.
///
/// # HTTP Status Codes
/// - `200 OK`: Array of jobs
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn list_jobs(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    let jobs = jobs::list_jobs(&mut conn, auth_user.id).await?;

    Ok(Json(serde_json::json!(jobs)))
}

/// POST /api/jobs
///
/// Creates a job application owned by the acting user.
///
/// # Request Body
/// - `company`: Company name (required)
/// - `role`: Role title (required)
/// - `status`: One of Applied/Interview/Offer/Rejected; defaults to Applied
/// - `notes`: Free text, defaults to empty
/// - `appliedDate`: ISO date, defaults to today
///
/// # HTTP Status Codes
/// - `201 CREATED`: Job created; body carries the new id
/// - `400 BAD_REQUEST`: Missing company or role
pub async fn create_job(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateJob>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.pool.acquire().await?;

    let job = jobs::create_job(&mut conn, auth_user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Job added successfully",
            "jobId": job.id,
        })),
    ))
}

/// PUT /api/jobs/{id}
///
/// Full replace of a job's mutable fields.
///
/// # HTTP Status Codes
/// - `200 OK`: Job updated
/// - `400 BAD_REQUEST`: Missing company or role
/// - `403 FORBIDDEN`: Job belongs to another user
/// - `404 NOT_FOUND`: No such job
pub async fn update_job(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJob>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    jobs::update_job(&mut conn, auth_user.id, id, request).await?;

    Ok(Json(serde_json::json!({
        "message": "Job updated successfully",
    })))
}

/// DELETE /api/jobs/{id}
///
/// # HTTP Status Codes
/// - `200 OK`: Job deleted
/// - `403 FORBIDDEN`: Job belongs to another user
/// - `404 NOT_FOUND`: No such job
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    jobs::delete_job(&mut conn, auth_user.id, id).await?;

    Ok(Json(serde_json::json!({
        "message": "Job deleted successfully",
    })))
}
