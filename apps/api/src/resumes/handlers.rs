use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resumes::queries::{list_resumes_for_user, require_owned_resume};
use crate::resumes::upload::{process_upload, read_upload};
use crate::state::AppState;
use crate::users::queries::require_user;

/// POST /api/v1/resumes
///
/// Multipart form with a `file` field (PDF or DOCX), owned by the caller.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    caller: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let upload = read_upload(caller.user_id, multipart).await?;
    let resume = process_upload(&state, upload).await?;
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    require_user(&state.db, caller.user_id).await?;
    let resumes = list_resumes_for_user(&state.db, caller.user_id).await?;
    Ok(Json(resumes))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = require_owned_resume(&state.db, id, caller.user_id).await?;
    Ok(Json(resume))
}
