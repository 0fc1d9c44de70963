use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::resumes::{CreateResume, Resume, TemplateKind, UpdateResume},
    queries::resumes,
    validation::validate_required_string,
};

/// Lists all resumes owned by `owner_id`, most recently updated first.
pub async fn list_resumes(conn: &mut DbConn, owner_id: Uuid) -> Result<Vec<Resume>> {
    resumes::list_resumes_by_owner(conn, owner_id).await
}

/// Creates a resume for the acting user. The owner is always stamped from
/// the authenticated context, never from the request body.
pub async fn create_resume(
    conn: &mut DbConn,
    owner_id: Uuid,
    payload: CreateResume,
) -> Result<Resume> {
    let title = validate_required_string(payload.title.as_deref().unwrap_or(""), "Title")?;
    let content = payload
        .content
        .ok_or_else(|| Error::Validation("Content is required".to_string()))?;
    let template = TemplateKind::parse_or_default(payload.template.as_deref());

    let resume = resumes::create_resume(conn, owner_id, title, content, template).await?;

    tracing::info!(resume_id = %resume.id, owner_id = %owner_id, "Created resume");

    Ok(resume)
}

/// Fetches a resume the acting user owns.
///
/// The ownership sequence is always: fetch by primary key, then compare the
/// stored owner to the acting user. Absent rows are 404; rows owned by
/// someone else are 403, and nothing is mutated in either case.
pub async fn get_owned_resume(conn: &mut DbConn, owner_id: Uuid, id: Uuid) -> Result<Resume> {
    let resume = resumes::get_resume_by_id(conn, id)
        .await?
        .ok_or_else(|| Error::NotFound("Resume not found".to_string()))?;

    if resume.owner_id != owner_id {
        return Err(Error::Forbidden(
            "You do not have access to this resume".to_string(),
        ));
    }

    Ok(resume)
}

/// Overwrites a resume's title, content, and template after the ownership
/// check, refreshing its update timestamp.
pub async fn update_resume(
    conn: &mut DbConn,
    owner_id: Uuid,
    id: Uuid,
    payload: UpdateResume,
) -> Result<()> {
    let existing = get_owned_resume(conn, owner_id, id).await?;

    let title = validate_required_string(payload.title.as_deref().unwrap_or(""), "Title")?;
    let content = payload
        .content
        .ok_or_else(|| Error::Validation("Content is required".to_string()))?;
    let template = match payload.template {
        Some(t) => TemplateKind::parse_or_default(Some(&t)),
        None => existing.template,
    };

    resumes::update_resume(conn, id, title, &content, template).await
}

/// Deletes a resume after the ownership check.
pub async fn delete_resume(conn: &mut DbConn, owner_id: Uuid, id: Uuid) -> Result<()> {
    get_owned_resume(conn, owner_id, id).await?;

    let rows_affected = resumes::delete_resume(conn, id).await?;
    if rows_affected == 0 {
        return Err(Error::NotFound("Resume not found".to_string()));
    }

    Ok(())
}
