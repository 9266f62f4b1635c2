use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_token;
use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::state::AppState;
use crate::users::queries::{email_exists, find_user_by_email, insert_user, NewUser};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), AppError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("email must be a valid address".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "first_name and last_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: &'static str,
    pub user: User,
}

impl AuthResponse {
    fn for_user(state: &AppState, user: User) -> Result<Self, AppError> {
        let token = issue_token(
            user.id,
            user.role(),
            &state.config.jwt_secret,
            state.config.jwt_ttl_hours,
        )?;
        Ok(AuthResponse {
            token,
            token_type: "Bearer",
            user,
        })
    }
}

/// PBKDF2 is CPU-bound; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password task failed: {e}")))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    req.validate()?;

    let email = req.email.trim();
    if email_exists(&state.db, email).await? {
        return Err(AppError::Conflict("Email is already in use".to_string()));
    }

    let password = req.password.clone();
    let password_hash = run_blocking(move || hash_password(&password)).await?;

    let user = insert_user(
        &state.db,
        NewUser {
            email,
            password_hash: &password_hash,
            first_name: req.first_name.trim(),
            last_name: req.last_name.trim(),
            role: Role::parse_or_default(req.role.as_deref()),
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict("Email is already in use".to_string())
        }
        other => AppError::Database(other),
    })?;

    info!("Registered user {} as {}", user.id, user.role);
    Ok((StatusCode::CREATED, Json(AuthResponse::for_user(&state, user)?)))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

    let user = find_user_by_email(&state.db, req.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let stored = user.password_hash.clone();
    let password = req.password;
    if !run_blocking(move || verify_password(&password, &stored)).await? {
        warn!("Failed login for user {}", user.id);
        return Err(invalid());
    }

    info!("User {} logged in", user.id);
    Ok(Json(AuthResponse::for_user(&state, user)?))
}
