use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::validation::JobRequest;
use crate::models::job::JobRow;

/// Active jobs, newest first.
pub async fn list_active_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE is_active = TRUE ORDER BY posted_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn require_job(pool: &PgPool, id: Uuid) -> Result<JobRow, AppError> {
    find_job(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

pub async fn insert_job(
    pool: &PgPool,
    posted_by: Uuid,
    req: &JobRequest,
) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (id, title, description, company, location, required_skills,
             min_experience, qualifications, posted_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.title.trim())
    .bind(req.description.trim())
    .bind(req.company.trim())
    .bind(req.location.trim())
    .bind(&req.required_skills)
    .bind(req.min_experience)
    .bind(req.qualifications.clone().unwrap_or_default())
    .bind(posted_by)
    .fetch_one(pool)
    .await
}

/// Replaces every editable field. Qualifications are left untouched when the
/// request omits them.
pub async fn update_job(pool: &PgPool, id: Uuid, req: &JobRequest) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs
        SET title = $2,
            description = $3,
            company = $4,
            location = $5,
            required_skills = $6,
            min_experience = $7,
            qualifications = COALESCE($8, qualifications)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.title.trim())
    .bind(req.description.trim())
    .bind(req.company.trim())
    .bind(req.location.trim())
    .bind(&req.required_skills)
    .bind(req.min_experience)
    .bind(&req.qualifications)
    .fetch_one(pool)
    .await
}

pub async fn deactivate_job(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE jobs SET is_active = FALSE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
