use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

pub struct NewResume<'a> {
    pub user_id: Uuid,
    pub file_name: &'a str,
    pub file_path: &'a str,
    pub extracted_text: &'a str,
    pub skills: &'a [String],
}

pub async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, file_name, file_path, extracted_text, skills)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume.user_id)
    .bind(resume.file_name)
    .bind(resume.file_path)
    .bind(resume.extracted_text)
    .bind(resume.skills)
    .fetch_one(pool)
    .await
}

pub async fn find_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Returns a user's resumes, newest first.
pub async fn list_resumes_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY uploaded_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Loads a resume and checks it belongs to `user_id`.
pub async fn require_owned_resume(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<ResumeRow, AppError> {
    let resume = find_resume(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    if resume.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(resume)
}
