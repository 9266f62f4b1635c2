use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::queries::{
    deactivate_job, insert_job, list_active_jobs, require_job, update_job,
};
use crate::jobs::validation::JobRequest;
use crate::models::job::JobRow;
use crate::models::user::{Role, User};
use crate::state::AppState;
use crate::users::queries::require_user;

/// Admins may manage any job; everyone else only the jobs they posted.
fn can_manage(user: &User, job: &JobRow) -> bool {
    user.role() == Role::Admin || job.posted_by == user.id
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_active_jobs(&state.db).await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    Ok(Json(require_job(&state.db, id).await?))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(req): Json<JobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    req.validate()?;

    // Role comes from the row, not the token claims.
    let user = require_user(&state.db, caller.user_id).await?;
    if !user.can_post_jobs() {
        return Err(AppError::Forbidden);
    }

    let job = insert_job(&state.db, user.id, &req).await?;
    info!("User {} posted job {} ({})", user.id, job.id, job.title);
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobRow>, AppError> {
    req.validate()?;

    let user = require_user(&state.db, caller.user_id).await?;
    let job = require_job(&state.db, id).await?;
    if !can_manage(&user, &job) {
        return Err(AppError::Forbidden);
    }

    let updated = update_job(&state.db, id, &req).await?;
    info!("User {} updated job {}", user.id, id);
    Ok(Json(updated))
}

/// DELETE /api/v1/jobs/:id
///
/// Soft delete: the job is marked inactive.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let user = require_user(&state.db, caller.user_id).await?;
    let job = require_job(&state.db, id).await?;
    if !can_manage(&user, &job) {
        return Err(AppError::Forbidden);
    }

    deactivate_job(&state.db, id).await?;
    info!("User {} deactivated job {}", user.id, id);
    Ok(StatusCode::NO_CONTENT)
}
