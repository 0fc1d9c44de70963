use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::jobs::{Job, JobStatus},
};

/// Creates a new job application record owned by `owner_id`.
pub async fn create_job(
    conn: &mut DbConn,
    owner_id: Uuid,
    company: String,
    role: String,
    status: JobStatus,
    notes: String,
    applied_date: NaiveDate,
) -> Result<Job> {
    let job = Job {
        id: Uuid::new_v4(),
        owner_id,
        company,
        role,
        status,
        notes,
        applied_date,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO jobs (id, owner_id, company, role, status, notes, applied_date, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(job.id)
    .bind(job.owner_id)
    .bind(&job.company)
    .bind(&job.role)
    .bind(job.status)
    .bind(&job.notes)
    .bind(job.applied_date)
    .bind(job.created_at)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(job)
}

/// Gets a single job by its ID. The job may not exist.
pub async fn get_job_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<Job>> {
    let job = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, owner_id, company, role, status, notes, applied_date, created_at
        FROM jobs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(job)
}

/// Lists all jobs owned by `owner_id`, most recently created first.
pub async fn list_jobs_by_owner(conn: &mut DbConn, owner_id: Uuid) -> Result<Vec<Job>> {
    let jobs = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, owner_id, company, role, status, notes, applied_date, created_at
        FROM jobs
        WHERE owner_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(jobs)
}

/// Overwrites a job's mutable fields.
pub async fn update_job(
    conn: &mut DbConn,
    id: Uuid,
    company: String,
    role: String,
    status: JobStatus,
    notes: String,
    applied_date: NaiveDate,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE jobs
        SET company = ?, role = ?, status = ?, notes = ?, applied_date = ?
        WHERE id = ?
        "#,
    )
    .bind(company)
    .bind(role)
    .bind(status)
    .bind(notes)
    .bind(applied_date)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(())
}

/// Deletes a job by its ID.
pub async fn delete_job(conn: &mut DbConn, id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM jobs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}
