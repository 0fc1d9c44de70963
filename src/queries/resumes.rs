use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::resumes::{Resume, ResumeContent, TemplateKind},
};

/// Raw resume row. The content column holds the JSON document text; it is
/// parsed back into structured form on every read.
#[derive(Debug, sqlx::FromRow)]
struct ResumeRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    content: String,
    template: TemplateKind,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ResumeRow> for Resume {
    type Error = Error;

    fn try_from(row: ResumeRow) -> Result<Resume> {
        let content: ResumeContent = serde_json::from_str(&row.content)
            .map_err(|e| Error::Internal(format!("Stored resume content is not valid JSON: {}", e)))?;

        Ok(Resume {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            content,
            template: row.template,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn encode_content(content: &ResumeContent) -> Result<String> {
    serde_json::to_string(content)
        .map_err(|e| Error::Internal(format!("Failed to serialize resume content: {}", e)))
}

/// Creates a new resume owned by `owner_id`.
pub async fn create_resume(
    conn: &mut DbConn,
    owner_id: Uuid,
    title: String,
    content: ResumeContent,
    template: TemplateKind,
) -> Result<Resume> {
    let now = Utc::now();
    let resume = Resume {
        id: Uuid::new_v4(),
        owner_id,
        title,
        content,
        template,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO resumes (id, owner_id, title, content, template, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(resume.id)
    .bind(resume.owner_id)
    .bind(&resume.title)
    .bind(encode_content(&resume.content)?)
    .bind(resume.template)
    .bind(resume.created_at)
    .bind(resume.updated_at)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(resume)
}

/// Gets a single resume by its ID. The resume may not exist.
pub async fn get_resume_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<Resume>> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        SELECT id, owner_id, title, content, template, created_at, updated_at
        FROM resumes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    row.map(Resume::try_from).transpose()
}

/// Lists all resumes owned by `owner_id`, most recently updated first.
pub async fn list_resumes_by_owner(conn: &mut DbConn, owner_id: Uuid) -> Result<Vec<Resume>> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        r#"
        SELECT id, owner_id, title, content, template, created_at, updated_at
        FROM resumes
        WHERE owner_id = ?
        ORDER BY updated_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    rows.into_iter().map(Resume::try_from).collect()
}

/// Overwrites a resume's mutable fields and refreshes its update timestamp.
pub async fn update_resume(
    conn: &mut DbConn,
    id: Uuid,
    title: String,
    content: &ResumeContent,
    template: TemplateKind,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE resumes
        SET title = ?, content = ?, template = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(encode_content(content)?)
    .bind(template)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(())
}

/// Deletes a resume by its ID.
pub async fn delete_resume(conn: &mut DbConn, id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM resumes
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
