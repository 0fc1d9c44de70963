use chrono::Utc;
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::jobs::{CreateJob, Job, UpdateJob},
    queries::jobs,
    validation::validate_required_string,
};

/// Lists all job applications owned by `owner_id`, most recently created
/// first.
pub async fn list_jobs(conn: &mut DbConn, owner_id: Uuid) -> Result<Vec<Job>> {
    jobs::list_jobs_by_owner(conn, owner_id).await
}

/// Creates a job application for the acting user. Status defaults to
/// Applied and the applied date to today when omitted.
pub async fn create_job(conn: &mut DbConn, owner_id: Uuid, payload: CreateJob) -> Result<Job> {
    let company = validate_required_string(payload.company.as_deref().unwrap_or(""), "Company")?;
    let role = validate_required_string(payload.role.as_deref().unwrap_or(""), "Role")?;
    let status = payload.status.unwrap_or_default();
    let notes = payload.notes.unwrap_or_default();
    let applied_date = payload
        .applied_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let job = jobs::create_job(conn, owner_id, company, role, status, notes, applied_date).await?;

    tracing::info!(job_id = %job.id, owner_id = %owner_id, "Created job application");

    Ok(job)
}

/// Fetches a job the acting user owns; 404 if absent, 403 if owned by
/// another user.
pub async fn get_owned_job(conn: &mut DbConn, owner_id: Uuid, id: Uuid) -> Result<Job> {
    let job = jobs::get_job_by_id(conn, id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

    if job.owner_id != owner_id {
        return Err(Error::Forbidden(
            "You do not have access to this job".to_string(),
        ));
    }

    Ok(job)
}

/// Overwrites a job's mutable fields after the ownership check, with the
/// same defaulting as creation.
pub async fn update_job(
    conn: &mut DbConn,
    owner_id: Uuid,
    id: Uuid,
    payload: UpdateJob,
) -> Result<()> {
    get_owned_job(conn, owner_id, id).await?;

    let company = validate_required_string(payload.company.as_deref().unwrap_or(""), "Company")?;
    let role = validate_required_string(payload.role.as_deref().unwrap_or(""), "Role")?;
    let status = payload.status.unwrap_or_default();
    let notes = payload.notes.unwrap_or_default();
    let applied_date = payload
        .applied_date
        .unwrap_or_else(|| Utc::now().date_naive());

    jobs::update_job(conn, id, company, role, status, notes, applied_date).await
}

/// Deletes a job after the ownership check.
pub async fn delete_job(conn: &mut DbConn, owner_id: Uuid, id: Uuid) -> Result<()> {
    get_owned_job(conn, owner_id, id).await?;

    let rows_affected = jobs::delete_job(conn, id).await?;
    if rows_affected == 0 {
        return Err(Error::NotFound("Job not found".to_string()));
    }

    Ok(())
}
