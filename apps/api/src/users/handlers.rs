use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::state::AppState;
use crate::users::queries::require_user;

/// Users see their own record; admins see anyone's.
fn can_view(caller: &AuthUser, user_id: Uuid) -> bool {
    caller.role == Role::Admin || caller.user_id == user_id
}

/// GET /api/v1/users/me
pub async fn handle_get_me(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<User>, AppError> {
    Ok(Json(require_user(&state.db, caller.user_id).await?))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    if !can_view(&caller, id) {
        return Err(AppError::Forbidden);
    }
    Ok(Json(require_user(&state.db, id).await?))
}
